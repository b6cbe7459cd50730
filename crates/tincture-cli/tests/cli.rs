//! Runs the tool end to end with in-memory input and output.

use std::io::{Cursor, Write};

use serial_test::serial;
use tempfile::NamedTempFile;
use tincture_cli::config::CONFIG_ENV;
use tincture_cli::{run_with, FORCE_COLOR_ENV};

/// Points the config lookup at an empty file and clears `FORCE_COLOR`, so
/// the developer's own settings never leak into a run. Keep the returned
/// file alive for the duration of the run.
fn isolate_env() -> NamedTempFile {
    let empty = NamedTempFile::new().unwrap();
    std::env::set_var(CONFIG_ENV, empty.path());
    std::env::remove_var(FORCE_COLOR_ENV);
    empty
}

fn argv<'a>(args: &[&'a str]) -> Vec<&'a str> {
    let mut argv = vec!["tincture"];
    argv.extend_from_slice(args);
    argv
}

fn run_ok(args: &[&str], input: &str) -> String {
    let _config = isolate_env();
    let mut out = Vec::new();
    run_with(argv(args), Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn run_err(args: &[&str]) -> String {
    let _config = isolate_env();
    let mut out = Vec::new();
    run_with(argv(args), Cursor::new(""), &mut out)
        .unwrap_err()
        .to_string()
}

#[test]
#[serial]
fn test_styles_arguments() {
    let out = run_ok(&["--force-color", "--fg", "red", "-s", "bold", "Hello"], "");
    assert_eq!(out, "\x1b[31m\x1b[1mHello\x1b[0m\n");
}

#[test]
#[serial]
fn test_joins_arguments_with_spaces() {
    let out = run_ok(&["--force-color", "--bg", "blue", "two", "words"], "");
    assert_eq!(out, "\x1b[44mtwo words\x1b[0m\n");
}

#[test]
#[serial]
fn test_styles_each_stdin_line() {
    let out = run_ok(&["--force-color", "--code", "196"], "one\ntwo\n");
    assert_eq!(out, "\x1b[38;5;196mone\x1b[0m\n\x1b[38;5;196mtwo\x1b[0m\n");
}

#[test]
#[serial]
fn test_non_terminal_output_is_plain() {
    let out = run_ok(&["--fg", "green", "-s", "underline", "plain"], "");
    assert_eq!(out, "plain\n");
}

#[test]
#[serial]
fn test_no_color() {
    let out = run_ok(&["--no-color", "--rainbow", "plain"], "");
    assert_eq!(out, "plain\n");
}

#[test]
#[serial]
fn test_invalid_rgb_leaves_text_alone() {
    let out = run_ok(&["--force-color", "--rgb", "256,0,0", "--on-hex", "zzz", "x"], "");
    assert_eq!(out, "x\n");
}

#[test]
#[serial]
fn test_rainbow_then_bold() {
    let out = run_ok(&["--force-color", "--rainbow", "-s", "bold", "ab"], "");
    assert_eq!(out, "\x1b[1m\x1b[31ma\x1b[33mb\x1b[0m\n");
}

#[test]
#[serial]
fn test_gradient_after_foreground_has_one_reset() {
    let out = run_ok(&["--force-color", "--gradient", "red,blue", "--fg", "white", "ab"], "");
    assert_eq!(out, "\x1b[37m\x1b[31ma\x1b[34mb\x1b[0m\n");
}

#[test]
#[serial]
fn test_empty_definition_is_a_plain_theme() {
    let out = run_ok(
        &["--force-color", "--define", "cli_empty=", "-t", "cli_empty", "bare"],
        "",
    );
    assert_eq!(out, "bare\n");
    tincture::remove_theme("cli_empty").unwrap();
}

#[test]
#[serial]
fn test_force_color_env_styles_non_terminal_output() {
    let _config = isolate_env();
    std::env::set_var(FORCE_COLOR_ENV, "1");
    let mut out = Vec::new();
    let result = run_with(argv(&["--fg", "cyan", "x"]), Cursor::new(""), &mut out);
    std::env::remove_var(FORCE_COLOR_ENV);
    result.unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\x1b[36mx\x1b[0m\n");
}

#[test]
#[serial]
fn test_config_env_variable_is_honored() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "themes:\n  - name: cli_env_note\n    tokens: [magenta, on_cyan]\n"
    )
    .unwrap();
    std::env::remove_var(FORCE_COLOR_ENV);
    std::env::set_var(CONFIG_ENV, file.path());
    let mut out = Vec::new();
    let result = run_with(
        argv(&["--force-color", "-t", "cli_env_note", "n"]),
        Cursor::new(""),
        &mut out,
    );
    std::env::remove_var(CONFIG_ENV);
    result.unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\x1b[35m\x1b[46mn\x1b[0m\n");
    tincture::remove_theme("cli_env_note").unwrap();
}

#[test]
#[serial]
fn test_builtin_theme() {
    let out = run_ok(&["--force-color", "-t", "warning", "careful"], "");
    assert_eq!(out, "\x1b[33m\x1b[1mcareful\x1b[0m\n");
}

#[test]
#[serial]
fn test_define_and_apply_theme() {
    let out = run_ok(
        &[
            "--force-color",
            "--define",
            "cli_alert=red,on_white,underline",
            "-t",
            "cli_alert",
            "boom",
        ],
        "",
    );
    assert_eq!(out, "\x1b[31m\x1b[47m\x1b[4mboom\x1b[0m\n");
    tincture::remove_theme("cli_alert").unwrap();
}

#[test]
#[serial]
fn test_unknown_theme_is_an_error() {
    let err = run_err(&["-t", "cli_missing", "x"]);
    assert!(err.contains("cli_missing"), "{}", err);
}

#[test]
#[serial]
fn test_redefining_builtin_name_is_an_error() {
    let err = run_err(&["--define", "success=blue", "x"]);
    assert!(err.contains("success"), "{}", err);
}

#[test]
#[serial]
fn test_unknown_color_is_a_parse_error() {
    let err = run_err(&["--fg", "chartreuse", "x"]);
    assert!(err.contains("chartreuse"), "{}", err);
}

#[test]
#[serial]
fn test_list_colors_and_styles() {
    let out = run_ok(&["--no-color", "--list-colors", "--list-styles"], "");
    assert_eq!(
        out,
        "black\nred\ngreen\nyellow\nblue\nmagenta\ncyan\nwhite\nclear\nbold\nunderline\nreversed\n"
    );
}

#[test]
#[serial]
fn test_list_colors_styled() {
    let out = run_ok(&["--force-color", "--list-colors"], "");
    assert!(out.starts_with("\x1b[30mblack\x1b[0m\n\x1b[31mred\x1b[0m\n"));
}

#[test]
#[serial]
fn test_list_themes_starts_with_builtins() {
    let out = run_ok(&["--no-color", "--list-themes"], "");
    let names: Vec<&str> = out.lines().collect();
    assert_eq!(&names[..5], &["success", "error", "warning", "info", "debug"]);
}

#[test]
#[serial]
fn test_show_theme_as_yaml() {
    let out = run_ok(&["--show-theme", "error"], "");
    let record: tincture::ThemeRecord = serde_yaml::from_str(&out).unwrap();
    assert_eq!(record, tincture::ThemeRecord::new().foreground("red").style("bold"));
}

#[test]
#[serial]
fn test_show_unknown_theme() {
    let err = run_err(&["--show-theme", "cli_nope"]);
    assert!(err.contains("cli_nope"), "{}", err);
}

#[test]
#[serial]
fn test_config_file_defines_themes() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "themes:\n  - name: cli_cfg_note\n    tokens: [blue, reversed]\n"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let out = run_ok(
        &["--force-color", "--config", path.as_str(), "-t", "cli_cfg_note", "note"],
        "",
    );
    assert_eq!(out, "\x1b[34m\x1b[7mnote\x1b[0m\n");
    tincture::remove_theme("cli_cfg_note").unwrap();
}

#[test]
#[serial]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = run_err(&["--config", path.to_str().unwrap(), "x"]);
    assert!(err.contains("configuration"), "{}", err);
}

#[test]
#[serial]
fn test_malformed_config_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "themes: {{ not: a list }}").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let err = run_err(&["--config", path.as_str(), "x"]);
    assert!(err.contains("configuration"), "{}", err);
}
