//! Techdocs Core Library
//!
//! Technology selection, visibility toggling, configuration, and error
//! handling for the techdocs page header.

pub mod config;
pub mod error;
pub mod tech;
pub mod visibility;

pub use config::{Config, SwitcherConfig};
pub use error::{CoreError, Result};
pub use tech::{Selection, Switchers, TechAxis, Technology};
pub use visibility::{MemoryPage, TechPage, ToggleReport, VisibilityToggler};
