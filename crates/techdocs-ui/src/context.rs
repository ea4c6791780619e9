//! Shared technology selection and the blocks that follow it.

use leptos::prelude::*;
use techdocs_core::{Config, Selection, TechAxis};

/// Reactive language and database selection shared through context.
///
/// A page provides one so that content blocks anywhere on it follow the
/// switchers of its `TopSection`.
#[derive(Debug, Clone, Copy)]
pub struct TechSelection {
    pub language: RwSignal<String>,
    pub database: RwSignal<String>,
}

impl TechSelection {
    pub fn new(initial: Selection) -> Self {
        Self {
            language: RwSignal::new(initial.language),
            database: RwSignal::new(initial.database),
        }
    }

    /// Create a selection and provide it to the current owner's children.
    pub fn provide(initial: Selection) -> Self {
        let selection = Self::new(initial);
        provide_context(selection);
        selection
    }

    /// The selection in context, or a fresh one seeded from `config`.
    pub fn use_or_provide(config: &Config) -> Self {
        use_context::<Self>().unwrap_or_else(|| Self::provide(config.initial_selection()))
    }

    /// Signal holding the selection on `axis`.
    pub fn signal(&self, axis: TechAxis) -> RwSignal<String> {
        match axis {
            TechAxis::Lang => self.language,
            TechAxis::Db => self.database,
        }
    }

    /// Current selection, tracking both signals.
    pub fn snapshot(&self) -> Selection {
        Selection::new(self.language.get(), self.database.get())
    }
}

/// Provide the site configuration to the component tree.
pub fn provide_config(config: Config) {
    provide_context(config);
}

/// The configuration in context, or the built-in defaults.
pub fn use_config() -> Config {
    use_context::<Config>().unwrap_or_default()
}

/// Content shown only while the selection matches its tags.
///
/// Untagged axes place no constraint. Outside a [`TechSelection`] context
/// the block is always shown.
#[component]
pub fn TechBlock(
    /// Language this block applies to.
    #[prop(optional, into)]
    lang: Option<String>,
    /// Database dialect this block applies to.
    #[prop(optional, into)]
    db: Option<String>,
    /// Block content.
    children: Children,
) -> impl IntoView {
    let selection = use_context::<TechSelection>();
    let visible = move || {
        selection.is_none_or(|selection| {
            selection
                .snapshot()
                .admits(lang.as_deref(), db.as_deref())
        })
    };

    view! {
      <div class="tech-block" hidden=move || !visible()>
        {children()}
      </div>
    }
}
