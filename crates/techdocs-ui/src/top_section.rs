//! Page header with breadcrumb, title, technology switchers, and TOC.

use leptos::prelude::*;
use techdocs_core::{Config, Switchers, TechAxis, Technology};

#[cfg(target_arch = "wasm32")]
use crate::dom::DomPage;
use crate::{
    context::{TechSelection, use_config},
    layout::TopSectionLayout,
    tech_switch::TechnologySwitch,
    toc::{PageLocation, Toc, TocEntry},
};

/// Header of a documentation page.
///
/// When a switcher is enabled, content blocks whose id starts with the
/// configured prefix (`techswitch` by default) are shown or hidden to match
/// the selection, on mount and whenever the selection changes.
#[component]
pub fn TopSection(
    /// Current page location, passed to the table of contents.
    #[prop(into)]
    location: Signal<PageLocation>,
    /// Page title.
    #[prop(into)]
    title: String,
    /// Title of the parent section, shown as breadcrumb.
    #[prop(optional, into)]
    parent_title: String,
    /// Landing pages get neither breadcrumb, divider, nor TOC.
    #[prop(optional)]
    index_page: bool,
    /// Show the language switcher.
    #[prop(optional)]
    lang_switcher: bool,
    /// Show the database switcher.
    #[prop(optional)]
    db_switcher: bool,
    /// Headings listed in the table of contents.
    #[prop(into, default = Vec::new().into())]
    toc: Signal<Vec<TocEntry>>,
) -> impl IntoView {
    let layout = TopSectionLayout::new(index_page, lang_switcher, db_switcher);
    let switchers = layout.switchers();
    let config = use_config();
    let selection = TechSelection::use_or_provide(&config);
    sync_tech_blocks(&config, selection, switchers);

    let switch_for = move |axis: TechAxis| {
        let signal = selection.signal(axis);
        view! {
          <TechnologySwitch
            axis=axis
            options=config.technologies(axis).to_vec()
            selected=signal
            on_change=move |tech: Technology| {
              log::debug!("{axis} switched to {}", tech.id);
              signal.set(tech.id);
            }
          />
        }
    };
    let lang_switch = layout.lang.then(|| switch_for(TechAxis::Lang).into_any());
    let db_switch = layout.db.then(|| switch_for(TechAxis::Db).into_any());
    let breadcrumb = layout.breadcrumb.then(|| {
        view! { <h4 class="top-section-breadcrumb">{parent_title}</h4> }.into_any()
    });
    let divider = layout
        .divider
        .map(|divider| view! { <hr class=divider.class() /> }.into_any());
    let contents = layout
        .toc
        .then(|| view! { <Toc location=location entries=toc /> }.into_any());

    view! {
      <div class="top-section">
        {breadcrumb}
        <h1 class="top-section-title">{title}</h1>
        {divider}
        <div class="top-section-switchers">{lang_switch}{db_switch}</div>
        {contents}
      </div>
    }
}

/// Keep `techswitch` blocks in line with the selection, on mount and after
/// every selection change.
#[cfg(target_arch = "wasm32")]
fn sync_tech_blocks(config: &Config, selection: TechSelection, switchers: Switchers) {
    if !switchers.any() {
        return;
    }
    let toggler = config.toggler();
    let visible_class = config.switcher.visible_class.clone();

    // Reads only the two selection signals.
    Effect::new(move |_| {
        let current = selection.snapshot();
        match DomPage::current(visible_class.as_str()) {
            Some(mut page) => {
                toggler.synchronize(&mut page, &current, switchers);
            }
            None => log::warn!("no document available, technology blocks left untouched"),
        }
    });
}

/// Off the browser there is no document to toggle.
#[cfg(not(target_arch = "wasm32"))]
fn sync_tech_blocks(_config: &Config, _selection: TechSelection, _switchers: Switchers) {}
