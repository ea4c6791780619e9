//! Table of contents for the current page.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Where the reader currently is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageLocation {
    /// Path of the page (e.g. `/guides/installation`).
    pub pathname: String,

    /// Fragment including the leading `#`, or empty.
    #[serde(default)]
    pub hash: String,
}

impl PageLocation {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            hash: String::new(),
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Fragment without the leading `#`.
    pub fn fragment(&self) -> &str {
        self.hash.trim_start_matches('#')
    }

    /// Link to the heading `id` on this page.
    pub fn href_for(&self, id: &str) -> String {
        format!("{}#{id}", self.pathname)
    }
}

/// Table of contents entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,

    /// Heading text.
    pub text: String,

    /// Anchor ID.
    pub id: String,
}

impl TocEntry {
    /// Create a new TOC entry.
    pub fn new(level: u8, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.into(),
        }
    }

    /// Indentation class for this entry's level.
    pub fn level_class(&self) -> String {
        format!("toc-level-{}", self.level.clamp(1, 6))
    }
}

/// Table of contents component.
///
/// Renders nothing when there are no entries.
#[component]
pub fn Toc(
    /// Current page location.
    #[prop(into)]
    location: Signal<PageLocation>,
    /// TOC entries.
    #[prop(into)]
    entries: Signal<Vec<TocEntry>>,
) -> impl IntoView {
    view! {
      <Show when=move || !entries.get().is_empty()>
        <nav class="toc" aria-label="Table of contents">
          <h2 class="toc-title">"On this page"</h2>
          <ul class="toc-list">
            <For
              each=move || entries.get()
              key=|entry| entry.id.clone()
              children=move |entry| {
                let id = entry.id.clone();
                let href_id = entry.id.clone();
                let is_active = Memo::new(move |_| location.with(|loc| loc.fragment() == id));
                let href = move || location.with(|loc| loc.href_for(&href_id));

                view! {
                  <li class=entry.level_class() class:active=is_active>
                    <a href=href class="toc-link">
                      {entry.text.clone()}
                    </a>
                  </li>
                }
              }
            />

          </ul>
        </nav>
      </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_entry_creation() {
        let entry = TocEntry::new(2, "Prerequisites", "prerequisites");
        assert_eq!(entry.level, 2);
        assert_eq!(entry.text, "Prerequisites");
        assert_eq!(entry.id, "prerequisites");
        assert_eq!(entry.level_class(), "toc-level-2");
    }

    #[test]
    fn test_toc_level_class_is_clamped() {
        assert_eq!(TocEntry::new(0, "Top", "top").level_class(), "toc-level-1");
        assert_eq!(TocEntry::new(9, "Deep", "deep").level_class(), "toc-level-6");
    }

    #[test]
    fn test_location_fragment() {
        let location = PageLocation::new("/guides/installation").with_hash("#prerequisites");
        assert_eq!(location.fragment(), "prerequisites");
        assert_eq!(PageLocation::new("/").fragment(), "");
    }

    #[test]
    fn test_location_href_for() {
        let location = PageLocation::new("/guides/installation").with_hash("#setup");
        assert_eq!(
            location.href_for("prerequisites"),
            "/guides/installation#prerequisites"
        );
    }

    #[test]
    fn test_location_deserialization_without_hash() {
        let location: PageLocation =
            serde_json::from_str(r#"{"pathname":"/reference"}"#).unwrap();
        assert_eq!(location, PageLocation::new("/reference"));
    }
}
