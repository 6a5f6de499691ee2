use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use services::{
    CountdownToken, NarrationController, PendingTransition, PreferenceStore, SessionError,
};

use super::board::{Hud, QuestionCard};
use super::river::River;
use super::scripts::{FOCUS_PLAY_ROOT_JS, WebNarrator, tone_script};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{SummaryCard, ViewError, ViewState, view_state_from_resource};
use crate::vm::{AudioCue, Followup, GameIntent, GameVm, TickFollowup, intent_for_key};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK: Duration = Duration::from_secs(1);

fn view_error(err: &SessionError) -> ViewError {
    match err {
        SessionError::BankTooSmall { .. } => ViewError::EmptyBank,
        _ => ViewError::Unknown,
    }
}

/// Error to show after a restart; a successful restart clears the last one.
fn reset_error(result: Option<Result<(), SessionError>>) -> Option<ViewError> {
    match result {
        Some(Err(err)) => {
            warn!(error = %err, "could not restart the game");
            Some(view_error(&err))
        }
        Some(Ok(())) | None => None,
    }
}

#[component]
pub fn PlayView() -> Element {
    let ctx = use_context::<AppContext>();
    let preferences = use_context::<Signal<PreferenceStore>>();
    let navigator = use_navigator();

    let mut vm = use_signal(|| None::<GameVm>);
    let mut error = use_signal(|| None::<ViewError>);
    let mut active_countdown = use_signal(|| None::<CountdownToken>);
    let mut narration = use_signal(|| NarrationController::new(WebNarrator, false));
    let mut narrated = use_signal(|| None::<(u64, usize)>);

    let resource = use_resource(move || {
        let ctx = ctx.clone();
        let mut vm = vm;
        async move {
            let mut game = GameVm::new(ctx.new_game_loop());
            game.start().map_err(|err| {
                warn!(error = %err, "could not start a game");
                view_error(&err)
            })?;
            vm.set(Some(game));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(resource);

    let play_cue = use_callback(move |cue: AudioCue| {
        if preferences.peek().preferences().audio_enabled {
            let _ = eval(&tone_script(cue.tone()));
        }
    });

    let schedule_feedback = use_callback(move |pending: PendingTransition| {
        spawn(async move {
            let mut vm = vm;
            tokio::time::sleep(pending.delay).await;
            let followup = vm
                .write()
                .as_mut()
                .map(|game| game.resolve(pending.token))
                .unwrap_or_default();
            if let Some(cue) = followup.cue {
                play_cue.call(cue);
            }
        });
    });

    let apply = use_callback(move |followup: Followup| {
        if let Some(cue) = followup.cue {
            play_cue.call(cue);
        }
        if let Some(pending) = followup.schedule {
            schedule_feedback.call(pending);
        }
    });

    // One tick loop per countdown token; a new token (answer, pause, next
    // question) retires the previous loop.
    use_effect(move || {
        let token = vm.read().as_ref().and_then(GameVm::countdown_token);
        if *active_countdown.peek() == token {
            return;
        }
        active_countdown.set(token);
        let Some(token) = token else {
            return;
        };
        spawn(async move {
            let mut vm = vm;
            loop {
                tokio::time::sleep(TICK).await;
                let step = match vm.write().as_mut() {
                    Some(game) => game.tick(token),
                    None => break,
                };
                match step {
                    TickFollowup::Continue => {}
                    TickFollowup::Stop(followup) => {
                        apply.call(followup);
                        break;
                    }
                }
            }
        });
    });

    use_effect(move || {
        let enabled = preferences.read().preferences().narration_enabled;
        let request = vm.read().as_ref().and_then(GameVm::narration);
        let mut controller = narration.write();
        controller.set_enabled(enabled);
        let Some(request) = request else {
            controller.cancel();
            return;
        };
        controller.on_question_changed(request.question_index);
        if *narrated.peek() != Some(request.key)
            && controller.narrate(&request.text, request.question_index)
        {
            narrated.set(Some(request.key));
        }
    });

    use_drop(move || {
        if let Ok(mut controller) = narration.try_write() {
            controller.cancel();
        }
    });

    use_effect(move || {
        let _ = eval(FOCUS_PLAY_ROOT_JS);
    });

    let dispatch = use_callback(move |intent: GameIntent| match intent {
        GameIntent::Choose(option) => {
            let followup = vm
                .write()
                .as_mut()
                .map(|game| game.choose(option))
                .unwrap_or_default();
            apply.call(followup);
        }
        GameIntent::TogglePause => {
            let followup = vm
                .write()
                .as_mut()
                .map(GameVm::toggle_pause)
                .unwrap_or_default();
            apply.call(followup);
        }
        GameIntent::Reset => {
            let result = vm.write().as_mut().map(GameVm::reset);
            error.set(reset_error(result));
        }
        GameIntent::Home => {
            if let Some(game) = vm.write().as_mut() {
                game.go_home();
            }
            narration.write().cancel();
            let _ = navigator.push(Route::Home {});
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PlayTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if let Some(intent) = intent_for_key(&evt.data.key().to_string()) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    });

    let vm_guard = vm.read();
    let summary = vm_guard.as_ref().and_then(GameVm::summary);
    let question = vm_guard.as_ref().and_then(GameVm::question);
    let hud = vm_guard.as_ref().and_then(GameVm::hud);
    let feedback = vm_guard.as_ref().and_then(GameVm::feedback);
    let pads = vm_guard.as_ref().map(GameVm::pads).unwrap_or_default();
    drop(vm_guard);

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "play-loading", "Loading..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "play-error", "{err.message()}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Home {});
                },
                "Back"
            }
        },
        ViewState::Ready(()) => match (summary, question, hud) {
            (Some(summary), _, _) => rsx! {
                SummaryCard {
                    summary,
                    on_play_again: move |()| dispatch.call(GameIntent::Reset),
                    on_home: move |()| dispatch.call(GameIntent::Home),
                }
            },
            (None, Some(question), Some(hud)) => {
                let paused = hud.paused;
                rsx! {
                    Hud {
                        hud,
                        on_pause: move |()| dispatch.call(GameIntent::TogglePause),
                        on_reset: move |()| dispatch.call(GameIntent::Reset),
                        on_home: move |()| dispatch.call(GameIntent::Home),
                    }
                    div { class: "play-grid",
                        River { pads }
                        QuestionCard {
                            question,
                            feedback,
                            paused,
                            on_choose: move |option| dispatch.call(GameIntent::Choose(option)),
                        }
                    }
                }
            }
            _ => rsx! {
                p { class: "play-loading", "No game in progress." }
            },
        },
    };

    rsx! {
        div { class: "page play-page", id: "play-root", tabindex: "0", onkeydown: on_key,
            if let Some(err) = *error.read() {
                p { class: "play-error", "{err.message()}" }
            }
            {body}
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PlayTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<GameVm>>>>>,
}

#[cfg(test)]
impl PlayTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, vm: Signal<Option<GameVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("play dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<GameVm>> {
        (*self.vm.borrow()).expect("play vm registered")
    }
}
