use dioxus::prelude::*;

use crate::vm::SummaryVm;

#[component]
pub fn SummaryCard(
    summary: SummaryVm,
    on_play_again: EventHandler<()>,
    on_home: EventHandler<()>,
) -> Element {
    let class = if summary.won {
        "summary-card summary-card--won"
    } else {
        "summary-card summary-card--lost"
    };
    let score_line = summary.score_line();

    rsx! {
        section { class: "{class}", role: "status",
            div { class: "summary-trophy", aria_hidden: "true",
                if summary.won { "🏆" } else { "🌊" }
            }
            h1 { class: "summary-title", "{summary.title}" }
            p { class: "summary-headline", "{summary.headline}" }
            p { class: "summary-score", "{score_line}" }

            dl { class: "summary-stats",
                dt { "Wrong answers" }
                dd { "{summary.wrong}" }

                dt { "Timed out" }
                dd { "{summary.timed_out}" }

                dt { "Lives left" }
                dd { "{summary.lives_left}" }

                dt { "Time" }
                dd { "{summary.duration_str}" }
            }

            p { class: "summary-closing", "{summary.closing}" }

            div { class: "summary-actions",
                button {
                    class: "btn btn-primary",
                    id: "summary-play-again",
                    r#type: "button",
                    onclick: move |_| on_play_again.call(()),
                    "Play Again"
                }
                button {
                    class: "btn btn-secondary",
                    id: "summary-home",
                    r#type: "button",
                    onclick: move |_| on_home.call(()),
                    "Home"
                }
            }
        }
    }
}
