//! [`TechPage`] over the live browser document.

use techdocs_core::TechPage;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// The current document, toggling `visible_class` on tagged elements.
pub struct DomPage {
    document: Document,
    visible_class: String,
}

impl DomPage {
    /// The page of the current window, if there is one.
    pub fn current(visible_class: impl Into<String>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self {
            document,
            visible_class: visible_class.into(),
        })
    }
}

impl TechPage for DomPage {
    type Element = Element;

    fn scan(&self, prefix: &str) -> Vec<Element> {
        let selector = format!("[id^=\"{prefix}\"]");
        let nodes = match self.document.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("querying {selector} failed: {err:?}");
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_id(&self, element: &Element) -> String {
        element.id()
    }

    fn set_visible(&mut self, element: &Element, visible: bool) {
        let classes = element.class_list();
        let result = if visible {
            classes.add_1(&self.visible_class)
        } else {
            classes.remove_1(&self.visible_class)
        };
        if let Err(err) = result {
            log::warn!("toggling class on #{} failed: {err:?}", element.id());
        }
    }
}
