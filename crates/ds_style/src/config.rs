//! Typed theme configuration loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};
use crate::prefix::Prefix;
use crate::style_map::StyleMap;
use crate::theme::Theme;

/// Serialized theme settings.
///
/// ```toml
/// prefix = "ds"
/// style_maps = ["button.module.json", "typography.module.json"]
///
/// [styles]
/// "ds-caption" = "Typography_ds-caption__c1"
/// ```
///
/// Inline `styles` are applied first, then each `style_maps` artifact in order; later entries
/// win for the same token. With `passthrough = true` no map is used and tokens are emitted
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Design-system prefix; [`DEFAULT_PREFIX`](crate::DEFAULT_PREFIX) when absent.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Emit tokens unchanged instead of looking them up.
    #[serde(default)]
    pub passthrough: bool,
    /// Inline token to class-name entries.
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
    /// Style-map artifact paths, relative to the config file.
    #[serde(default)]
    pub style_maps: Vec<String>,
}

impl ThemeConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(raw: &str) -> StyleResult<Self> {
        toml::from_str(raw).map_err(|err| StyleError::ConfigParse {
            path: "<inline toml>".to_string(),
            message: err.to_string(),
        })
    }

    /// Parses a JSON document.
    pub fn from_json_str(raw: &str) -> StyleResult<Self> {
        serde_json::from_str(raw).map_err(|err| StyleError::ConfigParse {
            path: "<inline json>".to_string(),
            message: err.to_string(),
        })
    }

    /// Builds the immutable theme, merging `artifacts` after the inline entries.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidPrefix`] when the configured prefix contains whitespace.
    pub fn into_theme(self, artifacts: impl IntoIterator<Item = StyleMap>) -> StyleResult<Theme> {
        let prefix = match self.prefix {
            Some(raw) => Prefix::parse(raw)?,
            None => Prefix::default(),
        };
        if self.passthrough {
            return Ok(Theme::passthrough(prefix));
        }
        let map = artifacts
            .into_iter()
            .fold(StyleMap::from_pairs(self.styles), StyleMap::merge);
        Ok(Theme::with_style_map(prefix, map))
    }
}

/// Filesystem loader for a TOML or JSON theme config and its style-map artifacts.
#[derive(Clone, Debug)]
pub struct ThemeLoader {
    path: PathBuf,
}

impl ThemeLoader {
    /// Creates a loader for the given root-relative path.
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self {
            path: root.join(relative_path),
        }
    }

    /// Returns the config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads only the config document, choosing the parser from the file extension.
    pub fn load_config(&self) -> StyleResult<ThemeConfig> {
        let body = read(&self.path)?;
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension {
            "toml" => toml::from_str(&body).map_err(|err| parse_error(&self.path, err)),
            "json" => serde_json::from_str(&body).map_err(|err| parse_error(&self.path, err)),
            other => Err(StyleError::UnsupportedConfigFormat(other.to_string())),
        }
    }

    /// Reads the config and every listed artifact, then builds the theme.
    pub fn load(&self) -> StyleResult<Theme> {
        let mut config = self.load_config()?;
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        let artifacts = std::mem::take(&mut config.style_maps)
            .iter()
            .map(|relative| {
                let path = base.join(relative);
                let body = read(&path)?;
                StyleMap::from_json_str(&body).map_err(|err| StyleError::ConfigParse {
                    path: path.display().to_string(),
                    message: err.to_string(),
                })
            })
            .collect::<StyleResult<Vec<_>>>()?;
        config.into_theme(artifacts)
    }
}

fn read(path: &Path) -> StyleResult<String> {
    fs::read_to_string(path).map_err(|err| StyleError::ConfigRead {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> StyleError {
    StyleError::ConfigParse {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_map::StyleSource;
    use pretty_assertions::assert_eq;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_root(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "ds-style-config-test-{label}-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn toml_config_parses_all_fields() {
        let config = ThemeConfig::from_toml_str(
            "prefix = \"acme\"\nstyle_maps = [\"button.json\"]\n\n[styles]\n\"acme-caption\" = \"c1\"\n",
        )
        .expect("config");
        assert_eq!(
            config,
            ThemeConfig {
                prefix: Some("acme".into()),
                passthrough: false,
                styles: BTreeMap::from([("acme-caption".to_string(), "c1".to_string())]),
                style_maps: vec!["button.json".into()],
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ThemeConfig::from_json_str(r#"{"prefx": "ds"}"#).expect_err("typo");
        assert!(matches!(err, StyleError::ConfigParse { .. }));
    }

    #[test]
    fn artifacts_override_inline_entries() {
        let config = ThemeConfig::from_json_str(r#"{"styles": {"ds-button": "inline"}}"#)
            .expect("config");
        let theme = config
            .into_theme([StyleMap::from_pairs([("ds-button", "artifact")])])
            .expect("theme");
        assert_eq!(theme.prefix().as_str(), "ds");
        assert_eq!(theme.lookup("ds-button"), Some("artifact"));
    }

    #[test]
    fn passthrough_config_ignores_map_entries() {
        let config = ThemeConfig {
            prefix: Some("x".into()),
            passthrough: true,
            ..ThemeConfig::default()
        };
        let theme = config.into_theme(Vec::<StyleMap>::new()).expect("theme");
        assert_eq!(theme.styles(), &StyleSource::Passthrough);
        assert_eq!(theme.lookup("x-button"), Some("x-button"));
    }

    #[test]
    fn invalid_prefix_fails_theme_build() {
        let config = ThemeConfig {
            prefix: Some("a b".into()),
            ..ThemeConfig::default()
        };
        assert_eq!(
            config.into_theme(Vec::<StyleMap>::new()),
            Err(StyleError::InvalidPrefix("a b".into()))
        );
    }

    #[test]
    fn loader_merges_artifacts_relative_to_config() {
        let root = unique_test_root("merge");
        let theme_dir = root.join("assets/theme");
        fs::create_dir_all(&theme_dir).expect("create theme dir");
        fs::write(
            theme_dir.join("theme.toml"),
            "prefix = \"ds\"\nstyle_maps = [\"button.json\", \"typography.json\"]\n",
        )
        .expect("write config");
        fs::write(
            theme_dir.join("button.json"),
            r#"{"ds-button": "a1", "ds-button--sm": "b2"}"#,
        )
        .expect("write button map");
        fs::write(theme_dir.join("typography.json"), r#"{"ds-header--5": "h5"}"#)
            .expect("write typography map");

        let theme = ThemeLoader::new(&root, "assets/theme/theme.toml")
            .load()
            .expect("load theme");
        assert_eq!(theme.lookup("ds-button--sm"), Some("b2"));
        assert_eq!(theme.lookup("ds-header--5"), Some("h5"));
        assert_eq!(theme.lookup("ds-body--1"), None);

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn loader_reports_missing_file_with_path() {
        let root = unique_test_root("missing");
        let err = ThemeLoader::new(&root, "theme.json")
            .load()
            .expect_err("missing config");
        assert!(matches!(err, StyleError::ConfigRead { .. }));
        assert!(err.to_string().contains("theme.json"));
    }

    #[test]
    fn loader_rejects_unknown_extension() {
        let root = unique_test_root("extension");
        fs::create_dir_all(&root).expect("create root");
        fs::write(root.join("theme.yaml"), "prefix: ds\n").expect("write config");

        let err = ThemeLoader::new(&root, "theme.yaml")
            .load_config()
            .expect_err("yaml is unsupported");
        assert_eq!(err, StyleError::UnsupportedConfigFormat("yaml".into()));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn loader_reports_broken_artifact() {
        let root = unique_test_root("broken");
        fs::create_dir_all(&root).expect("create root");
        fs::write(root.join("theme.json"), r#"{"style_maps": ["broken.json"]}"#)
            .expect("write config");
        fs::write(root.join("broken.json"), "[").expect("write artifact");

        let err = ThemeLoader::new(&root, "theme.json")
            .load()
            .expect_err("broken artifact");
        assert!(err.to_string().contains("broken.json"));

        let _ = fs::remove_dir_all(root);
    }
}
