use dioxus::prelude::*;

use crate::vm::{FrogMotion, PadVm};

fn frog_class(motion: FrogMotion) -> &'static str {
    match motion {
        FrogMotion::Resting => "frog",
        FrogMotion::Jumping => "frog frog--jumping",
        FrogMotion::Falling => "frog frog--falling",
    }
}

/// Riverbanks, water and the lily pads with Professor Dave on one of them.
#[component]
pub(super) fn River(pads: Vec<PadVm>) -> Element {
    rsx! {
        div { class: "river", aria_hidden: "true",
            div { class: "bank bank--left",
                span { "🌳" }
                span { "🌲" }
                span { "🌳" }
                span { "🌿" }
            }
            div { class: "water",
                for pad in pads {
                    div { key: "{pad.index}", class: "{pad.class()}", style: "{pad.style()}",
                        if pad.is_start {
                            span { class: "pad-flag pad-flag--start", "🏠" }
                        }
                        if let Some(motion) = pad.frog {
                            span { class: frog_class(motion), "🐸" }
                        }
                        if pad.is_goal {
                            span { class: "pad-flag pad-flag--goal", "🏁" }
                        }
                    }
                }
            }
            div { class: "bank bank--right",
                span { "🌳" }
                span { "🌿" }
                span { "🌲" }
                span { "🌳" }
            }
        }
    }
}
