//! Technology switcher control.

use leptos::prelude::*;
use techdocs_core::{TechAxis, Technology};

/// Find the technology with the given id.
pub fn find_technology(options: &[Technology], id: &str) -> Option<Technology> {
    options.iter().find(|tech| tech.id == id).cloned()
}

/// Dropdown for picking one technology along `axis`.
///
/// `on_change` receives the chosen technology; the caller owns the
/// selection and feeds it back through `selected`.
#[component]
pub fn TechnologySwitch(
    /// Axis this switcher selects along.
    axis: TechAxis,
    /// Selectable technologies, in display order.
    options: Vec<Technology>,
    /// Currently selected technology id.
    #[prop(into)]
    selected: Signal<String>,
    /// Invoked when the user picks a technology.
    #[prop(into)]
    on_change: Callback<Technology>,
) -> impl IntoView {
    let options = StoredValue::new(options);

    let on_select = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        match options.with_value(|options| find_technology(options, &id)) {
            Some(tech) => on_change.run(tech),
            None => log::warn!("ignoring unknown {axis} technology '{id}'"),
        }
    };

    view! {
      <div class=format!("tech-switch tech-switch-{axis}")>
        <label class="tech-switch-label">
          <span class="tech-switch-axis">{axis.label()}</span>
          <select
            class="tech-switch-select"
            aria-label=axis.label()
            prop:value=move || selected.get()
            on:change=on_select
          >
            <For
              each=move || options.get_value()
              key=|tech| tech.id.clone()
              children=move |tech| {
                let id = tech.id.clone();
                let is_selected = move || selected.get() == id;
                view! {
                  <option value=tech.id.clone() selected=is_selected>
                    {tech.label.clone()}
                  </option>
                }
              }
            />

          </select>
        </label>
      </div>
    }
}
