//! YAML configuration: theme declarations and removals applied at startup.
//!
//! ```yaml
//! themes:
//!   - name: alert
//!     tokens: [red, on_white, bold]
//! remove:
//!   - alert
//! ```
//!
//! Declarations are applied in file order, then removals. A declaration or
//! removal that fails is logged and counted in the [`ConfigReport`]; it does
//! not abort the load. Only read and parse failures do.

use std::path::{Path, PathBuf};

use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tincture::Defined;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TINCTURE_CONFIG";

const CONFIG_DIR: &str = "tincture";
const CONFIG_FILE: &str = "config.yaml";

/// Errors that abort loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `origin` is the file path, or `<inline>` for YAML given as a string.
    #[error("failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub themes: Vec<ThemeDeclaration>,
    #[serde(default)]
    pub remove: Vec<String>,
}

/// One entry under `themes:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDeclaration {
    pub name: String,
    pub tokens: Vec<String>,
}

/// What happened while applying a config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigReport {
    /// The file the config came from, if any.
    pub path: Option<PathBuf>,
    /// Themes registered.
    pub applied: Vec<String>,
    /// Themes skipped as `(name, existing owner)`.
    pub skipped: Vec<(String, String)>,
    /// Themes removed.
    pub removed: Vec<String>,
    /// Failed declarations and removals as `(name, reason)`.
    pub failed: Vec<(String, String)>,
}

impl ConfigReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, Some(path))
    }

    fn parse(yaml: &str, path: Option<&Path>) -> Result<Self, ConfigError> {
        // An empty file is an empty config, not a parse error.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            origin: path
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<inline>".to_string()),
            message: e.to_string(),
        })
    }

    /// Applies declarations, then removals, to the process-wide theme engine.
    pub fn apply(&self) -> ConfigReport {
        let mut report = ConfigReport::default();

        for decl in &self.themes {
            match tincture::define_theme(&decl.name, &decl.tokens) {
                Ok(Defined::Registered) => {
                    debug!("config: registered theme '{}'", decl.name);
                    report.applied.push(decl.name.clone());
                }
                Ok(Defined::Skipped { existing }) => {
                    report.skipped.push((decl.name.clone(), existing));
                }
                // The engine has already logged the failure.
                Err(e) => report.failed.push((decl.name.clone(), e.to_string())),
            }
        }

        for name in &self.remove {
            match tincture::remove_theme(name) {
                Ok(_) => {
                    debug!("config: removed theme '{}'", name);
                    report.removed.push(name.clone());
                }
                Err(e) => {
                    error!("config: could not remove theme '{}': {}", name, e);
                    report.failed.push((name.clone(), e.to_string()));
                }
            }
        }

        report
    }
}

/// A config file location and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub required: bool,
}

/// Resolves the config path from the process environment.
pub fn locate(explicit: Option<&Path>) -> Option<ConfigSource> {
    locate_with(explicit, |key| std::env::var(key).ok())
}

/// Resolves the config path: `explicit`, then `TINCTURE_CONFIG`, then the
/// per-user file under `$XDG_CONFIG_HOME` or `$HOME/.config`.
pub fn locate_with(
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<ConfigSource> {
    let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = explicit {
        return Some(ConfigSource {
            path: path.to_path_buf(),
            required: true,
        });
    }
    if let Some(path) = non_empty(CONFIG_ENV) {
        return Some(ConfigSource {
            path: PathBuf::from(path),
            required: true,
        });
    }

    let base = non_empty("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(ConfigSource {
        path: base.join(CONFIG_DIR).join(CONFIG_FILE),
        required: false,
    })
}

/// Locates, reads and applies the config.
///
/// Returns an empty report when no config applies.
pub fn load(explicit: Option<&Path>) -> Result<ConfigReport, ConfigError> {
    let Some(source) = locate(explicit) else {
        return Ok(ConfigReport::default());
    };
    load_source(&source)
}

pub fn load_source(source: &ConfigSource) -> Result<ConfigReport, ConfigError> {
    if !source.path.is_file() {
        if source.required {
            return Err(ConfigError::NotFound(source.path.clone()));
        }
        debug!("config: no file at {}", source.path.display());
        return Ok(ConfigReport::default());
    }

    let config = Config::from_file(&source.path)?;
    let mut report = config.apply();
    info!(
        "config: {} applied, {} skipped, {} removed, {} failed from {}",
        report.applied.len(),
        report.skipped.len(),
        report.removed.len(),
        report.failed.len(),
        source.path.display()
    );
    report.path = Some(source.path.clone());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_yaml() {
        let config = Config::from_yaml(
            r#"
themes:
  - name: alert
    tokens: [red, on_white, bold]
remove: [alert]
"#,
        )
        .unwrap();
        assert_eq!(
            config.themes,
            vec![ThemeDeclaration {
                name: "alert".into(),
                tokens: vec!["red".into(), "on_white".into(), "bold".into()],
            }]
        );
        assert_eq!(config.remove, vec!["alert"]);
    }

    #[test]
    fn test_empty_yaml_is_empty_config() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("themes: []").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_yaml("colours: []").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref origin, .. } if origin == "<inline>"));
    }

    #[test]
    fn test_locate_prefers_explicit_then_env() {
        let env = env_from(&[(CONFIG_ENV, "/env/tincture.yaml"), ("HOME", "/home/u")]);
        let explicit = locate_with(Some(Path::new("/cli.yaml")), &env).unwrap();
        assert_eq!(explicit.path, PathBuf::from("/cli.yaml"));
        assert!(explicit.required);

        let from_env = locate_with(None, &env).unwrap();
        assert_eq!(from_env.path, PathBuf::from("/env/tincture.yaml"));
        assert!(from_env.required);
    }

    #[test]
    fn test_locate_user_file_is_optional() {
        let xdg = locate_with(None, env_from(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/h")])).unwrap();
        assert_eq!(xdg.path, PathBuf::from("/xdg/tincture/config.yaml"));
        assert!(!xdg.required);

        let home = locate_with(None, env_from(&[("HOME", "/h")])).unwrap();
        assert_eq!(home.path, PathBuf::from("/h/.config/tincture/config.yaml"));

        assert!(locate_with(None, env_from(&[])).is_none());
    }

    #[test]
    fn test_missing_required_file() {
        let source = ConfigSource {
            path: PathBuf::from("/definitely/not/here.yaml"),
            required: true,
        };
        assert!(matches!(load_source(&source), Err(ConfigError::NotFound(_))));

        let optional = ConfigSource {
            required: false,
            ..source
        };
        assert_eq!(load_source(&optional).unwrap(), ConfigReport::default());
    }

    #[test]
    #[serial]
    fn test_load_source_applies_and_reports() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
themes:
  - name: cfg_unit_alert
    tokens: [red, on_white, underline]
  - name: cfg_unit_copy
    tokens: [green, bold]
  - name: cfg_unit_empty
    tokens: []
  - name: cfg_unit_blank
    tokens: [red, " "]
remove:
  - cfg_unit_alert
  - cfg_unit_empty
  - success
"#
        )
        .unwrap();

        let source = ConfigSource {
            path: file.path().to_path_buf(),
            required: true,
        };
        let report = load_source(&source).unwrap();

        assert_eq!(report.path.as_deref(), Some(file.path()));
        assert_eq!(report.applied, vec!["cfg_unit_alert", "cfg_unit_empty"]);
        assert_eq!(
            report.skipped,
            vec![("cfg_unit_copy".to_string(), "success".to_string())]
        );
        assert_eq!(report.removed, vec!["cfg_unit_alert", "cfg_unit_empty"]);
        let failed: Vec<&str> = report.failed.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(failed, vec!["cfg_unit_blank", "success"]);
        assert!(tincture::get_theme("cfg_unit_blank").is_none());
        assert!(report.has_failures());
        assert!(tincture::get_theme("cfg_unit_alert").is_none());
        assert!(tincture::get_theme("success").is_some());
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "themes: [unclosed").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
