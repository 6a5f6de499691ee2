use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, PlayView, PreferencesPanel};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/play", PlayView)] Play {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                Link { class: "app-title", to: Route::Home {}, "🐸 River Adventure" }
                PreferencesPanel {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
