use dioxus::prelude::*;

use services::PreferenceStore;

use crate::vm::PreferenceToggle;

#[component]
pub fn PreferencesPanel() -> Element {
    let mut store = use_context::<Signal<PreferenceStore>>();
    let preferences = store.read().preferences();
    let font_label = preferences.font_size.label();

    rsx! {
        details { class: "preferences",
            summary { class: "preferences-summary", "⚙️ Preferences" }
            div { class: "preferences-body",
                for toggle in PreferenceToggle::ALL {
                    PreferenceSwitch {
                        key: "{toggle.id()}",
                        toggle,
                        on: toggle.is_on(&preferences),
                        on_toggle: move |toggle: PreferenceToggle| toggle.apply(&mut store.write()),
                    }
                }
                button {
                    class: "preference-row",
                    id: "pref-font-size",
                    r#type: "button",
                    onclick: move |_| {
                        store.write().cycle_font_size();
                    },
                    span { "Text size" }
                    span { class: "preference-value", "{font_label}" }
                }
                button {
                    class: "btn btn-secondary preferences-reset",
                    id: "pref-reset",
                    r#type: "button",
                    onclick: move |_| store.write().reset_to_defaults(),
                    "Reset to defaults"
                }
            }
        }
    }
}

#[component]
fn PreferenceSwitch(
    toggle: PreferenceToggle,
    on: bool,
    on_toggle: EventHandler<PreferenceToggle>,
) -> Element {
    let state = if on { "On" } else { "Off" };
    rsx! {
        button {
            class: if on { "preference-row preference-row--on" } else { "preference-row" },
            id: "{toggle.id()}",
            r#type: "button",
            role: "switch",
            aria_checked: "{on}",
            onclick: move |_| on_toggle.call(toggle),
            span { "{toggle.label()}" }
            span { class: "preference-value", "{state}" }
        }
    }
}
