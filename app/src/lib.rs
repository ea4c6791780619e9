use leptos::prelude::*;
use leptos_meta::{Style, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use techdocs_core::Config;
use techdocs_ui::provide_config;

mod pages;

use pages::{ConnectionUrlsPage, HomePage, InstallationPage};

/// Switcher settings compiled into the bundle.
const SITE_CONFIG: &str = include_str!("../../techdocs.toml");

/// Parse the embedded configuration, falling back to the defaults.
pub fn site_config() -> Config {
    Config::from_toml_str(SITE_CONFIG).unwrap_or_else(|err| {
        log::error!("invalid techdocs.toml, using defaults: {err}");
        Config::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let config = site_config();
    // Block visibility rules follow the configured prefix and class.
    let visibility_css = config.visibility_css();
    provide_config(config);

    view! {
      <Title text="Documentation" />
      <Style id="techswitch-visibility">{visibility_css}</Style>

      <Router>
        <main class="docs">
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage />
            <Route
              path=(StaticSegment("guides"), StaticSegment("installation"))
              view=InstallationPage
            />
            <Route
              path=(StaticSegment("reference"), StaticSegment("connection-urls"))
              view=ConnectionUrlsPage
            />
          </Routes>
        </main>
      </Router>
    }
}
