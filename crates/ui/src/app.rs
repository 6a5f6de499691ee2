use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::Router;
use tracing::debug;

use services::PreferenceStore;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::root_classes;

/// Sends the host's `prefers-reduced-motion` value now and on every change.
const MOTION_PROBE_JS: &str = r#"
    const query = window.matchMedia("(prefers-reduced-motion: reduce)");
    dioxus.send(query.matches);
    query.addEventListener("change", (event) => dioxus.send(event.matches));
"#;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    // The host's own value arrives through the motion probe below.
    let preferences = use_context_provider(|| {
        Signal::new(
            PreferenceStore::new(false).with_launch_reduced_motion(ctx.launch_reduced_motion()),
        )
    });

    use_hook(move || {
        let mut preferences = preferences;
        spawn(async move {
            let mut probe = eval(MOTION_PROBE_JS);
            while let Ok(reduced) = probe.recv::<bool>().await {
                let applied = preferences.write().environment_motion_changed(reduced);
                debug!(reduced, applied, "host motion preference reported");
            }
        });
    });

    let classes = root_classes(&preferences.read().preferences());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "River Adventure" }

        // Preference classes live on the root so every view inherits them.
        div { class: "{classes}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
