//! The `tincture` command-line tool.
//!
//! [`run`] is the whole program minus argument parsing and logger setup, so
//! it can be driven with in-memory input and output.

pub mod cli;
pub mod config;
pub mod logger;

use std::ffi::OsString;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use tincture::{CatalogKind, Defined, Styled, Stylize};

pub use cli::{Cli, ColorChoice};

/// Environment variable forcing color on.
pub const FORCE_COLOR_ENV: &str = "FORCE_COLOR";

/// Parses `args` and runs with an output that is not a terminal.
pub fn run_with<I, T, R, W>(args: I, input: R, output: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    run(&cli, input, output, false)
}

/// Runs the tool.
///
/// Order: config file, `--define`s, color policy, then either the listing
/// options or styling of the text.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    input: R,
    output: &mut W,
    stdout_is_term: bool,
) -> Result<()> {
    let report = config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if report.has_failures() {
        warn!(
            "{} theme declaration(s) in the config were not applied",
            report.failed.len()
        );
    }

    for def in &cli.define {
        match tincture::define_theme(&def.name, &def.tokens)
            .with_context(|| format!("failed to define theme '{}'", def.name))?
        {
            Defined::Registered => info!("defined theme '{}'", def.name),
            Defined::Skipped { existing } => {
                info!("theme '{}' is the same as '{}'", def.name, existing)
            }
        }
    }

    let forced = std::env::var(FORCE_COLOR_ENV).ok();
    apply_color_policy(cli.color_choice(), forced.as_deref(), stdout_is_term);

    if cli.is_listing() {
        return list(cli, output);
    }

    if cli.text.is_empty() {
        for line in input.lines() {
            let line = line.context("failed to read input")?;
            writeln!(output, "{}", style_text(cli, &line)?)?;
        }
    } else {
        let text = cli.text.join(" ");
        writeln!(output, "{}", style_text(cli, &text)?)?;
    }
    output.flush()?;
    Ok(())
}

fn force_requested(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "0")
}

/// Sets the global switch from the command line, `FORCE_COLOR` and whether
/// stdout is a terminal.
///
/// In `Auto` mode styling is only ever turned off here; `NO_COLOR` has
/// already set the initial state.
pub fn apply_color_policy(choice: ColorChoice, force_color: Option<&str>, stdout_is_term: bool) {
    match choice {
        ColorChoice::Never => tincture::disable(),
        ColorChoice::Always => tincture::enable(),
        ColorChoice::Auto => {
            if force_requested(force_color) {
                tincture::enable();
            } else if !stdout_is_term {
                debug!("stdout is not a terminal, disabling styling");
                tincture::disable();
            }
        }
    }
}

/// Builds the styled value for `text` from the styling options.
pub fn style_text(cli: &Cli, text: &str) -> Result<Styled> {
    let mut styled = Styled::plain(text);

    if cli.rainbow {
        styled = styled.rainbow();
    } else if let Some(gradient) = &cli.gradient {
        styled = styled.gradient(gradient.start.name(), gradient.end.name());
    }

    if let Some(color) = cli.fg {
        styled = styled.fg(color);
    }
    if let Some(color) = cli.bg {
        styled = styled.bg(color);
    }
    for &attribute in &cli.styles {
        styled = styled.attr(attribute);
    }
    if let Some(code) = cli.code {
        styled = styled.color(code);
    }
    if let Some(code) = cli.on_code {
        styled = styled.on_color(code);
    }
    if let Some(rgb) = cli.rgb {
        styled = styled.rgb(rgb.r, rgb.g, rgb.b);
    }
    if let Some(rgb) = cli.on_rgb {
        styled = styled.on_rgb(rgb.r, rgb.g, rgb.b);
    }
    if let Some(hex) = &cli.hex {
        styled = styled.with_hex(hex);
    }
    if let Some(hex) = &cli.on_hex {
        styled = styled.on_hex(hex);
    }
    if let Some(theme) = &cli.theme {
        styled = styled.theme(theme)?;
    }

    Ok(styled)
}

fn list<W: Write>(cli: &Cli, output: &mut W) -> Result<()> {
    if cli.list_colors {
        for name in tincture::foreground_names() {
            writeln!(output, "{}", name.apply_named(CatalogKind::Foreground, name))?;
        }
    }
    if cli.list_styles {
        for name in tincture::style_names() {
            writeln!(output, "{}", name.apply_named(CatalogKind::Style, name))?;
        }
    }
    if cli.list_themes {
        for name in tincture::list_themes() {
            let label = tincture::apply_theme(&name, name.as_str())?;
            writeln!(output, "{}", label)?;
        }
    }
    if let Some(name) = &cli.show_theme {
        let Some(record) = tincture::get_theme(name) else {
            bail!("theme not found: {}", name);
        };
        write!(output, "{}", serde_yaml::to_string(&record)?)?;
    }
    output.flush()?;
    Ok(())
}
