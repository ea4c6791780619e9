//! Visibility toggling for technology-tagged content blocks.
//!
//! Content blocks opt in by carrying an identifier that starts with the
//! switch prefix and embeds technology tags, e.g.
//! `techswitch-typescript-postgres`. Every application of a selection change
//! first hides all prefixed blocks, then reveals the ones matching the
//! selection.

use tracing::debug;

use crate::tech::{Selection, Switchers, TechAxis};

/// Identifier prefix of blocks taking part in visibility toggling.
pub const TECH_SWITCH_PREFIX: &str = "techswitch";

/// Class whose presence makes a tagged block visible.
pub const VISIBLE_CLASS: &str = "show";

/// A page whose tagged blocks can be scanned and shown or hidden.
pub trait TechPage {
    /// Handle to a single block on the page.
    type Element;

    /// All blocks whose identifier starts with `prefix`, in document order.
    fn scan(&self, prefix: &str) -> Vec<Self::Element>;

    /// Identifier of `element`.
    fn element_id(&self, element: &Self::Element) -> String;

    /// Add or remove the visible marker on `element`.
    fn set_visible(&mut self, element: &Self::Element, visible: bool);
}

/// Outcome of a single application of the selection-change protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleReport {
    /// Number of prefixed blocks found.
    pub scanned: usize,
    /// Number of blocks left visible.
    pub revealed: usize,
}

/// Whether `id` carries the technology tag `tag`.
pub fn has_tag(id: &str, tag: &str) -> bool {
    id.contains(&format!("-{tag}"))
}

/// Applies selection changes to a [`TechPage`].
#[derive(Debug, Clone)]
pub struct VisibilityToggler {
    prefix: String,
}

impl Default for VisibilityToggler {
    fn default() -> Self {
        Self::new(TECH_SWITCH_PREFIX)
    }
}

impl VisibilityToggler {
    /// Create a toggler for blocks identified by `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether a block identified by `id` survives a change of `axis` to
    /// `technology`.
    ///
    /// When the other axis has an enabled switcher, the block must also carry
    /// the currently selected technology of that axis.
    pub fn survives(
        &self,
        id: &str,
        axis: TechAxis,
        technology: &str,
        selection: &Selection,
        switchers: Switchers,
    ) -> bool {
        let other = axis.other();
        has_tag(id, technology)
            && (!switchers.enabled(other) || has_tag(id, selection.get(other)))
    }

    /// Hide every prefixed block, then reveal those matching the change of
    /// `axis` to `technology`.
    ///
    /// `selection` holds the current value of the other axis; it is not
    /// updated here.
    pub fn apply_change<P: TechPage>(
        &self,
        page: &mut P,
        axis: TechAxis,
        technology: &str,
        selection: &Selection,
        switchers: Switchers,
    ) -> ToggleReport {
        let elements = page.scan(&self.prefix);
        for element in &elements {
            page.set_visible(element, false);
        }

        let mut revealed = 0;
        for element in &elements {
            let id = page.element_id(element);
            if self.survives(&id, axis, technology, selection, switchers) {
                page.set_visible(element, true);
                revealed += 1;
            }
        }

        let report = ToggleReport {
            scanned: elements.len(),
            revealed,
        };
        debug!(
            axis = %axis,
            technology,
            scanned = report.scanned,
            revealed = report.revealed,
            "applied technology selection"
        );
        report
    }

    /// Bring the page in line with `selection` for the enabled switchers.
    ///
    /// The language branch runs before the database branch. Returns the
    /// report of the last branch applied, or `None` when no switcher is
    /// enabled.
    pub fn synchronize<P: TechPage>(
        &self,
        page: &mut P,
        selection: &Selection,
        switchers: Switchers,
    ) -> Option<ToggleReport> {
        let mut report = None;
        for axis in [TechAxis::Lang, TechAxis::Db] {
            if switchers.enabled(axis) {
                report = Some(self.apply_change(
                    page,
                    axis,
                    selection.get(axis),
                    selection,
                    switchers,
                ));
            }
        }
        report
    }
}

/// In-memory [`TechPage`] holding identifiers and their visibility.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    blocks: Vec<(String, bool)>,
}

impl MemoryPage {
    /// Create a page with the given block identifiers, all hidden.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks: ids.into_iter().map(|id| (id.into(), false)).collect(),
        }
    }

    /// Add a block with an explicit visibility.
    pub fn with_block(mut self, id: impl Into<String>, visible: bool) -> Self {
        self.blocks.push((id.into(), visible));
        self
    }

    /// Whether the first block identified by `id` is visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.blocks
            .iter()
            .find(|(block, _)| block == id)
            .is_some_and(|(_, visible)| *visible)
    }

    /// Identifiers of all visible blocks, in page order.
    pub fn visible(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

impl TechPage for MemoryPage {
    type Element = usize;

    fn scan(&self, prefix: &str) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, (id, _))| id.starts_with(prefix))
            .map(|(index, _)| index)
            .collect()
    }

    fn element_id(&self, element: &usize) -> String {
        self.blocks[*element].0.clone()
    }

    fn set_visible(&mut self, element: &usize, visible: bool) {
        self.blocks[*element].1 = visible;
    }
}
