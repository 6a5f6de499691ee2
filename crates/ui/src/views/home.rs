use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let rules = ctx.rules();
    let question_count = rules.question_count();
    let max_lives = rules.max_lives();
    let question_secs = rules.question_time_secs();

    rsx! {
        div { class: "page home-page",
            h1 { class: "home-title", "Professor Dave's River Adventure" }
            p { class: "home-subtitle",
                "Help Professor Dave cross the river by answering questions!"
            }
            ul { class: "home-rules",
                li { "Answer {question_count} water conservation questions to hop across the lily pads." }
                if rules.lives_enabled() {
                    li { "You have {max_lives} lives. A wrong answer or running out of time costs one." }
                }
                if rules.timer_enabled() {
                    li { "Each question has {question_secs} seconds on the clock." }
                }
                li { class: "home-keys", "Keys: 1-4 to answer, P or Space to pause, R to restart, Esc for home." }
            }
            button {
                class: "btn btn-primary home-start",
                id: "home-start",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Play {});
                },
                "Start Adventure"
            }
        }
    }
}
