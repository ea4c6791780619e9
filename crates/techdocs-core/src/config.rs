//! Switcher configuration and technology catalogs.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    tech::{DEFAULT_DATABASE, DEFAULT_LANGUAGE, Selection, TechAxis, Technology},
    visibility::{TECH_SWITCH_PREFIX, VISIBLE_CLASS, VisibilityToggler},
};

/// Main configuration structure for techdocs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Switcher behaviour.
    #[serde(default)]
    pub switcher: SwitcherConfig,

    /// Selectable programming languages.
    #[serde(default = "default_languages")]
    pub languages: Vec<Technology>,

    /// Selectable database dialects.
    #[serde(default = "default_databases")]
    pub databases: Vec<Technology>,
}

/// Switcher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitcherConfig {
    /// Identifier prefix of toggled content blocks.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Class added to visible content blocks.
    #[serde(default = "default_visible_class")]
    pub visible_class: String,

    /// Language selected on mount.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Database dialect selected on mount.
    #[serde(default = "default_database")]
    pub default_database: String,
}

// Default value functions
fn default_prefix() -> String {
    TECH_SWITCH_PREFIX.to_string()
}

fn default_visible_class() -> String {
    VISIBLE_CLASS.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_languages() -> Vec<Technology> {
    vec![
        Technology::new("typescript", "TypeScript"),
        Technology::new("javascript", "JavaScript"),
    ]
}

fn default_databases() -> Vec<Technology> {
    vec![
        Technology::new("postgres", "PostgreSQL"),
        Technology::new("mysql", "MySQL"),
        Technology::new("sqlite", "SQLite"),
        Technology::new("sqlserver", "SQL Server"),
        Technology::new("mongodb", "MongoDB"),
        Technology::new("cockroachdb", "CockroachDB"),
    ]
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            visible_class: default_visible_class(),
            default_language: default_language(),
            default_database: default_database(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            switcher: SwitcherConfig::default(),
            languages: default_languages(),
            databases: default_databases(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text, e.g. an embedded file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate the site's `techdocs.toml`.
    ///
    /// Used by the server to reject a broken catalog before the bundle that
    /// embeds the same file is served.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CoreError::config(format!(
                "switcher config {} does not exist",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()
            .map_err(|e| {
                CoreError::config_with_source(format!("failed to read {}", path.display()), e)
            })?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        let switcher = &self.switcher;
        if switcher.prefix.is_empty() {
            return Err(CoreError::config("switcher.prefix cannot be empty"));
        }
        if !switcher.prefix.chars().all(is_name_char) {
            return Err(CoreError::config(format!(
                "switcher.prefix '{}' may only contain letters, digits, '-' and '_'",
                switcher.prefix
            )));
        }

        if !is_class_name(&switcher.visible_class) {
            return Err(CoreError::config(format!(
                "switcher.visible_class '{}' must be a single CSS class name",
                switcher.visible_class
            )));
        }

        for (axis, default) in [
            (TechAxis::Lang, &switcher.default_language),
            (TechAxis::Db, &switcher.default_database),
        ] {
            let catalog = self.technologies(axis);
            if !catalog.is_empty() && self.find(axis, default).is_none() {
                return Err(CoreError::config(format!(
                    "default {} '{default}' is not in the {axis} catalog",
                    axis.label().to_lowercase()
                )));
            }

            let mut seen = HashSet::new();
            for tech in catalog {
                if !seen.insert(tech.id.as_str()) {
                    tracing::warn!(axis = %axis, id = %tech.id, "duplicate technology id");
                }
            }
        }

        Ok(())
    }

    /// Catalog of technologies for `axis`.
    pub fn technologies(&self, axis: TechAxis) -> &[Technology] {
        match axis {
            TechAxis::Lang => &self.languages,
            TechAxis::Db => &self.databases,
        }
    }

    /// Look up a technology by id on `axis`.
    pub fn find(&self, axis: TechAxis, id: &str) -> Option<&Technology> {
        self.technologies(axis).iter().find(|tech| tech.id == id)
    }

    /// The selection a freshly mounted page header starts from.
    pub fn initial_selection(&self) -> Selection {
        Selection::new(
            &self.switcher.default_language,
            &self.switcher.default_database,
        )
    }

    /// Toggler for the configured prefix.
    pub fn toggler(&self) -> VisibilityToggler {
        VisibilityToggler::new(&self.switcher.prefix)
    }

    /// Stylesheet rules that hide prefixed blocks until the toggler marks
    /// them with the visible class.
    pub fn visibility_css(&self) -> String {
        let SwitcherConfig {
            prefix,
            visible_class,
            ..
        } = &self.switcher;
        format!(
            "[id^=\"{prefix}\"] {{ display: none; }}\n\
             [id^=\"{prefix}\"].{visible_class} {{ display: block; }}\n"
        )
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_class_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| !c.is_ascii_digit())
        && name.chars().all(is_name_char)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[switcher]
prefix = "sample"
visible_class = "is-visible"
default_language = "javascript"
default_database = "mysql"

[[languages]]
id = "typescript"
label = "TypeScript"

[[languages]]
id = "javascript"
label = "JavaScript"

[[databases]]
id = "mysql"
label = "MySQL"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("techdocs.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.switcher.prefix, "sample");
        assert_eq!(config.switcher.visible_class, "is-visible");
        assert_eq!(config.languages.len(), 2);
        assert_eq!(config.databases, vec![Technology::new("mysql", "MySQL")]);
        assert_eq!(
            config.initial_selection(),
            Selection::new("javascript", "mysql")
        );
        assert_eq!(config.toggler().prefix(), "sample");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str("").expect("parse empty config");

        assert_eq!(config, Config::default());
        assert_eq!(config.switcher.prefix, "techswitch");
        assert_eq!(config.switcher.visible_class, "show");
        assert_eq!(config.initial_selection(), Selection::default());
        assert_eq!(
            config.find(TechAxis::Db, "sqlserver").map(|t| t.label.as_str()),
            Some("SQL Server")
        );
    }

    #[test]
    fn test_config_validation_empty_prefix() {
        let result = Config::from_toml_str("[switcher]\nprefix = \"\"\n");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("prefix cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_visible_class_whitespace() {
        let result = Config::from_toml_str("[switcher]\nvisible_class = \"show now\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_unknown_default() {
        let result = Config::from_toml_str("[switcher]\ndefault_database = \"oracle\"\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("oracle"));
        assert!(err.contains("db catalog"));
    }

    #[test]
    fn test_empty_catalog_accepts_any_default() {
        let config = Config::from_toml_str("languages = []\n[switcher]\ndefault_language = \"rust\"\n")
            .expect("parse config");
        assert!(config.technologies(TechAxis::Lang).is_empty());
        assert_eq!(config.initial_selection().language, "rust");
    }

    #[test]
    fn test_config_validation_prefix_characters() {
        let result = Config::from_toml_str("[switcher]\nprefix = \"tech\\\"]\"\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("switcher.prefix"));
    }

    #[test]
    fn test_config_validation_visible_class_leading_digit() {
        let result = Config::from_toml_str("[switcher]\nvisible_class = \"1show\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_visibility_css_defaults() {
        let css = Config::default().visibility_css();
        assert!(css.contains("[id^=\"techswitch\"] { display: none; }"));
        assert!(css.contains("[id^=\"techswitch\"].show { display: block; }"));
    }

    #[test]
    fn test_visibility_css_follows_switcher_config() {
        let config = Config::from_toml_str(&create_test_config()).expect("parse config");
        let css = config.visibility_css();

        assert!(css.contains("[id^=\"sample\"] { display: none; }"));
        assert!(css.contains("[id^=\"sample\"].is-visible { display: block; }"));
        assert!(!css.contains("techswitch"));
        assert!(!css.contains(".show"));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("techdocs.toml");
        std::fs::write(&config_path, "[switcher]\ndefault_language = \"cobol\"\n")
            .expect("write");

        let result = Config::load(&config_path);
        assert!(result.unwrap_err().to_string().contains("cobol"));
    }

    #[test]
    fn test_load_reports_unparsable_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("techdocs.toml");
        std::fs::write(&config_path, "[switcher\n").expect("write");

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/techdocs.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}
