//! Which parts of the page header render for a given set of flags.

use techdocs_core::Switchers;

/// Weight of the divider below the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divider {
    /// Neither switcher is shown.
    Normal,
    /// Leaves room for the switcher overlay.
    Wide,
}

impl Divider {
    /// CSS class of the `<hr>`; a normal divider has none.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Wide => Some("bigger-margin"),
        }
    }
}

/// Rendering decisions of a `TopSection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopSectionLayout {
    pub breadcrumb: bool,
    pub divider: Option<Divider>,
    pub lang: bool,
    pub db: bool,
    pub toc: bool,
}

impl TopSectionLayout {
    pub fn new(index_page: bool, lang_switcher: bool, db_switcher: bool) -> Self {
        let divider = if index_page {
            None
        } else if lang_switcher || db_switcher {
            Some(Divider::Wide)
        } else {
            Some(Divider::Normal)
        };

        Self {
            breadcrumb: !index_page,
            divider,
            lang: lang_switcher,
            db: db_switcher,
            toc: !index_page,
        }
    }

    pub fn switchers(&self) -> Switchers {
        Switchers::new(self.lang, self.db)
    }
}
