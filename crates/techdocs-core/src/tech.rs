//! Technology axes, catalog entries, and the current selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default selected language.
pub const DEFAULT_LANGUAGE: &str = "typescript";

/// Default selected database dialect.
pub const DEFAULT_DATABASE: &str = "postgres";

/// The axis a technology switcher selects along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechAxis {
    /// Programming language.
    Lang,
    /// Database dialect.
    Db,
}

impl TechAxis {
    /// Short identifier used in CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lang => "lang",
            Self::Db => "db",
        }
    }

    /// Human readable label for the switcher.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lang => "Language",
            Self::Db => "Database",
        }
    }

    /// The other axis.
    pub fn other(self) -> Self {
        match self {
            Self::Lang => Self::Db,
            Self::Db => Self::Lang,
        }
    }
}

impl fmt::Display for TechAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable technology.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Technology {
    /// Tag embedded in element identifiers (e.g. `typescript`).
    pub id: String,

    /// Display label (e.g. `TypeScript`).
    pub label: String,
}

impl Technology {
    /// Create a new technology.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Which switchers a page header enables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Switchers {
    pub lang: bool,
    pub db: bool,
}

impl Switchers {
    pub fn new(lang: bool, db: bool) -> Self {
        Self { lang, db }
    }

    /// Whether the switcher for `axis` is enabled.
    pub fn enabled(self, axis: TechAxis) -> bool {
        match axis {
            TechAxis::Lang => self.lang,
            TechAxis::Db => self.db,
        }
    }

    pub fn any(self) -> bool {
        self.lang || self.db
    }
}

/// Currently selected language and database dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub language: String,
    pub database: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, DEFAULT_DATABASE)
    }
}

impl Selection {
    pub fn new(language: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            database: database.into(),
        }
    }

    /// The selected technology on `axis`.
    pub fn get(&self, axis: TechAxis) -> &str {
        match axis {
            TechAxis::Lang => &self.language,
            TechAxis::Db => &self.database,
        }
    }

    /// Replace the selected technology on `axis`.
    pub fn set(&mut self, axis: TechAxis, technology: impl Into<String>) {
        match axis {
            TechAxis::Lang => self.language = technology.into(),
            TechAxis::Db => self.database = technology.into(),
        }
    }

    /// Whether a block tagged with the given technologies is shown.
    ///
    /// A missing tag places no constraint on its axis.
    pub fn admits(&self, language: Option<&str>, database: Option<&str>) -> bool {
        language.is_none_or(|lang| lang == self.language)
            && database.is_none_or(|db| db == self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_defaults() {
        let selection = Selection::default();
        assert_eq!(selection.language, "typescript");
        assert_eq!(selection.database, "postgres");
    }

    #[test]
    fn test_selection_set_per_axis() {
        let mut selection = Selection::default();
        selection.set(TechAxis::Db, "mysql");
        assert_eq!(selection.get(TechAxis::Db), "mysql");
        assert_eq!(selection.get(TechAxis::Lang), "typescript");
    }

    #[test]
    fn test_selection_admits() {
        let selection = Selection::new("typescript", "mysql");
        assert!(selection.admits(Some("typescript"), None));
        assert!(selection.admits(Some("typescript"), Some("mysql")));
        assert!(selection.admits(None, None));
        assert!(!selection.admits(Some("typescript"), Some("postgres")));
        assert!(!selection.admits(Some("javascript"), None));
    }

    #[test]
    fn test_switchers() {
        let switchers = Switchers::new(true, false);
        assert!(switchers.enabled(TechAxis::Lang));
        assert!(!switchers.enabled(TechAxis::Db));
        assert!(switchers.any());
        assert!(!Switchers::default().any());
    }

    #[test]
    fn test_axis_serialization() {
        let json = serde_json::to_string(&TechAxis::Db).unwrap();
        assert_eq!(json, "\"db\"");
        assert_eq!(TechAxis::Lang.other(), TechAxis::Db);
        assert_eq!(TechAxis::Lang.to_string(), "lang");
    }
}
