//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tincture::{Attribute, Color};

/// Style terminal text with ANSI colors, effects and themes.
///
/// Styling options are applied in a fixed order: effect (rainbow or
/// gradient), foreground, background, styles, 256-color codes, RGB, hex,
/// then the theme.
#[derive(Debug, Parser)]
#[command(name = "tincture")]
#[command(version)]
#[command(about = "Style terminal text with ANSI colors, effects and themes")]
pub struct Cli {
    /// Text to style (words are joined with spaces). Reads stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Foreground color
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    pub fg: Option<Color>,

    /// Background color
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    pub bg: Option<Color>,

    /// Text style (repeatable): clear, bold, underline, reversed
    #[arg(short, long = "style", value_name = "STYLE", value_parser = parse_attribute)]
    pub styles: Vec<Attribute>,

    /// 256-color foreground code
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub code: Option<i64>,

    /// 256-color background code
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub on_code: Option<i64>,

    /// True-color foreground
    #[arg(long, value_name = "R,G,B", value_parser = parse_rgb)]
    pub rgb: Option<RgbArg>,

    /// True-color background
    #[arg(long, value_name = "R,G,B", value_parser = parse_rgb)]
    pub on_rgb: Option<RgbArg>,

    /// Six-digit hex foreground, `#` optional
    #[arg(long, value_name = "HEX")]
    pub hex: Option<String>,

    /// Six-digit hex background, `#` optional
    #[arg(long, value_name = "HEX")]
    pub on_hex: Option<String>,

    /// Apply a named theme
    #[arg(short, long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Color each character in turn
    #[arg(long, conflicts_with = "gradient")]
    pub rainbow: bool,

    /// Per-character gradient between two colors
    #[arg(long, value_name = "START,END", value_parser = parse_gradient)]
    pub gradient: Option<GradientArg>,

    /// Define a theme for this run (repeatable)
    #[arg(long, value_name = "NAME=TOKEN,...", value_parser = parse_definition)]
    pub define: Vec<ThemeDefinition>,

    /// List foreground colors
    #[arg(long)]
    pub list_colors: bool,

    /// List text styles
    #[arg(long)]
    pub list_styles: bool,

    /// List registered themes
    #[arg(long)]
    pub list_themes: bool,

    /// Print a theme definition as YAML
    #[arg(long, value_name = "NAME")]
    pub show_theme: Option<String>,

    /// Configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Never emit escape codes
    #[arg(long, conflicts_with = "force_color")]
    pub no_color: bool,

    /// Emit escape codes even when stdout is not a terminal
    #[arg(long)]
    pub force_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The requested color policy.
    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else if self.force_color {
            ColorChoice::Always
        } else {
            ColorChoice::Auto
        }
    }

    /// True if any listing option was given.
    pub fn is_listing(&self) -> bool {
        self.list_colors || self.list_styles || self.list_themes || self.show_theme.is_some()
    }
}

/// Color policy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Style when stdout is a terminal or `FORCE_COLOR` is set.
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbArg {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientArg {
    pub start: Color,
    pub end: Color,
}

/// A `--define` argument: a theme name and its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub name: String,
    pub tokens: Vec<String>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.trim().parse::<Color>().map_err(|_| {
        format!(
            "unknown color '{}' (expected one of: {})",
            s,
            tincture::foreground_names().join(", ")
        )
    })
}

fn parse_attribute(s: &str) -> Result<Attribute, String> {
    s.trim().parse::<Attribute>().map_err(|_| {
        format!(
            "unknown style '{}' (expected one of: {})",
            s,
            tincture::style_names().join(", ")
        )
    })
}

/// Parses `r,g,b`. Components are integers; range checking is left to the
/// styling operation, which ignores out-of-range triples.
fn parse_rgb(s: &str) -> Result<RgbArg, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "expected three comma-separated components, got {}",
            parts.len()
        ));
    }
    let mut values = [0i64; 3];
    for (i, part) in parts.iter().enumerate() {
        values[i] = part
            .parse::<i64>()
            .map_err(|_| format!("component '{}' is not an integer", part))?;
    }
    Ok(RgbArg {
        r: values[0],
        g: values[1],
        b: values[2],
    })
}

fn parse_gradient(s: &str) -> Result<GradientArg, String> {
    let (start, end) = s
        .split_once(',')
        .ok_or_else(|| "expected START,END".to_string())?;
    Ok(GradientArg {
        start: parse_color(start)?,
        end: parse_color(end)?,
    })
}

fn parse_definition(s: &str) -> Result<ThemeDefinition, String> {
    let (name, tokens) = s
        .split_once('=')
        .ok_or_else(|| "expected NAME=TOKEN,...".to_string())?;
    let name = name.trim();
    if name.is_empty() {
        return Err("theme name is empty".to_string());
    }
    let tokens = tokens
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();
    Ok(ThemeDefinition {
        name: name.to_string(),
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_styling_options() {
        let cli = Cli::try_parse_from([
            "tincture", "--fg", "red", "--bg", "white", "-s", "bold", "-s", "underline",
            "--code", "196", "--rgb", "1,2,3", "--hex", "#ff0000", "hello", "world",
        ])
        .unwrap();
        assert_eq!(cli.fg, Some(Color::Red));
        assert_eq!(cli.bg, Some(Color::White));
        assert_eq!(cli.styles, vec![Attribute::Bold, Attribute::Underline]);
        assert_eq!(cli.code, Some(196));
        assert_eq!(cli.rgb, Some(RgbArg { r: 1, g: 2, b: 3 }));
        assert_eq!(cli.hex.as_deref(), Some("#ff0000"));
        assert_eq!(cli.text, vec!["hello", "world"]);
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let err = Cli::try_parse_from(["tincture", "--fg", "purple", "x"]).unwrap_err();
        assert!(err.to_string().contains("unknown color 'purple'"));
    }

    #[test]
    fn test_negative_code_and_rgb_pass_through_parsing() {
        let cli = Cli::try_parse_from(["tincture", "--code", "-1", "--on-rgb", "300,0,-5"]).unwrap();
        assert_eq!(cli.code, Some(-1));
        assert_eq!(cli.on_rgb, Some(RgbArg { r: 300, g: 0, b: -5 }));
    }

    #[test]
    fn test_parse_rgb_errors() {
        assert!(parse_rgb("1,2").is_err());
        assert!(parse_rgb("1,2,x").is_err());
    }

    #[test]
    fn test_parse_gradient() {
        assert_eq!(
            parse_gradient("red, blue").unwrap(),
            GradientArg {
                start: Color::Red,
                end: Color::Blue
            }
        );
        assert!(parse_gradient("red").is_err());
        assert!(parse_gradient("red,mauve").is_err());
    }

    #[test]
    fn test_parse_definition() {
        let def = parse_definition("alert=red, on_white,bold").unwrap();
        assert_eq!(def.name, "alert");
        assert_eq!(def.tokens, vec!["red", "on_white", "bold"]);
        assert!(parse_definition("alert").is_err());
        assert!(parse_definition("=red").is_err());
    }

    #[test]
    fn test_rainbow_conflicts_with_gradient() {
        assert!(Cli::try_parse_from(["tincture", "--rainbow", "--gradient", "red,blue"]).is_err());
    }

    #[test]
    fn test_color_choice() {
        let cli = Cli::try_parse_from(["tincture", "--no-color"]).unwrap();
        assert_eq!(cli.color_choice(), ColorChoice::Never);
        let cli = Cli::try_parse_from(["tincture", "--force-color"]).unwrap();
        assert_eq!(cli.color_choice(), ColorChoice::Always);
        let cli = Cli::try_parse_from(["tincture"]).unwrap();
        assert_eq!(cli.color_choice(), ColorChoice::Auto);
        assert!(Cli::try_parse_from(["tincture", "--no-color", "--force-color"]).is_err());
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["tincture", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["tincture", "-v", "-q"]).is_err());
    }
}
