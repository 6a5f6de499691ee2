use dioxus::prelude::*;

use crate::vm::{FeedbackVm, HudVm, OptionState, OptionVm, QuestionVm};

#[component]
pub(super) fn Hud(
    hud: HudVm,
    on_pause: EventHandler<()>,
    on_reset: EventHandler<()>,
    on_home: EventHandler<()>,
) -> Element {
    let pause_label = if hud.paused { "Resume" } else { "Pause" };
    let timer_class = if hud.time_low {
        "hud-timer hud-timer--low"
    } else {
        "hud-timer"
    };

    rsx! {
        header { class: "hud",
            div { class: "hud-progress",
                div { class: "hud-progress__labels",
                    span { "Progress" }
                    span { id: "hud-score", "{hud.score_label}" }
                }
                div { class: "hud-progress__track",
                    div { class: "hud-progress__fill", style: "width: {hud.progress_percent}%;" }
                }
            }
            if let Some(lives) = hud.lives {
                span { class: "hud-lives", id: "hud-lives", aria_label: "{lives.left} lives left",
                    "{lives.hearts()}"
                }
            }
            if let Some(time) = hud.time_label.as_deref() {
                span { class: "{timer_class}", id: "hud-timer", role: "timer", "{time}" }
            }
            div { class: "hud-actions",
                button {
                    class: "btn btn-secondary",
                    id: "hud-pause",
                    r#type: "button",
                    onclick: move |_| on_pause.call(()),
                    "{pause_label}"
                }
                button {
                    class: "btn btn-secondary",
                    id: "hud-reset",
                    r#type: "button",
                    onclick: move |_| on_reset.call(()),
                    "Restart"
                }
                button {
                    class: "btn btn-secondary",
                    id: "hud-home",
                    r#type: "button",
                    onclick: move |_| on_home.call(()),
                    "Home"
                }
            }
        }
    }
}

#[component]
pub(super) fn QuestionCard(
    question: QuestionVm,
    feedback: Option<FeedbackVm>,
    paused: bool,
    on_choose: EventHandler<usize>,
) -> Element {
    let locked = question.locked;
    rsx! {
        section { class: "question-card", aria_live: "polite",
            div { class: "question-meta",
                span { class: "question-label", "{question.label}" }
                span { class: "question-category", "{question.category}" }
            }
            h2 { class: "question-text", "{question.text}" }
            div { class: "question-options",
                for option in question.options {
                    OptionButton {
                        key: "{option.id}",
                        option,
                        disabled: locked,
                        on_choose,
                    }
                }
            }
            if paused {
                p { class: "paused-banner", id: "paused-banner", "Paused. Press P or Space to resume." }
            }
            if let Some(feedback) = feedback {
                div { class: "{feedback.class()}", role: "status",
                    p { class: "feedback-message", "{feedback.message}" }
                    if let Some(explanation) = feedback.explanation.as_deref() {
                        p { class: "feedback-explanation", "{explanation}" }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, disabled: bool, on_choose: EventHandler<usize>) -> Element {
    let class = match option.state {
        OptionState::Idle => "option",
        OptionState::Correct => "option option--correct",
        OptionState::Wrong => "option option--wrong",
    };
    let index = option.index;
    rsx! {
        button {
            class,
            id: "{option.id}",
            r#type: "button",
            disabled,
            onclick: move |_| on_choose.call(index),
            span { class: "option-key", "{option.key_hint}" }
            span { class: "option-text", "{option.text}" }
        }
    }
}
