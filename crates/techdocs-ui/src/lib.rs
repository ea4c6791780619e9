//! Techdocs UI Components
//!
//! Leptos components for documentation page headers.
//!
//! # Components
//!
//! - [`TopSection`] - Breadcrumb, title, divider, switchers and TOC
//! - [`TechnologySwitch`] - Dropdown for one technology axis
//! - [`Toc`] - Table of contents for the current location
//! - [`TechBlock`] - Content following the shared [`TechSelection`]
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use techdocs_ui::{PageLocation, TopSection};
//!
//! #[component]
//! fn InstallationPage() -> impl IntoView {
//!     let location = Signal::derive(|| PageLocation::new("/guides/installation"));
//!
//!     view! {
//!         <TopSection location=location title="Installation" parent_title="Guides" lang_switcher=true />
//!         <div id="techswitch-typescript">"npm install --save-dev typescript"</div>
//!     }
//! }
//! ```

pub mod context;
pub mod dom;
pub mod layout;
pub mod tech_switch;
pub mod toc;
pub mod top_section;

pub use context::{TechBlock, TechSelection, provide_config, use_config};
pub use dom::DomPage;
pub use layout::{Divider, TopSectionLayout};
pub use tech_switch::{TechnologySwitch, find_technology};
pub use toc::{PageLocation, Toc, TocEntry};
pub use top_section::TopSection;
