use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use river_core::model::GameRules;
use river_core::time::fixed_now;
use services::{Clock, GameSession, PreferenceStore};

use crate::context::{UiApp, build_app_context};
use crate::views::play::PlayTestHandles;
use crate::views::{HomeView, PlayView, PreferencesPanel, SummaryCard};
use crate::vm::{GameIntent, SummaryVm};

const HARNESS_SEED: u64 = 11;

struct TestApp {
    rules: GameRules,
}

impl UiApp for TestApp {
    fn rules(&self) -> GameRules {
        self.rules.clone()
    }

    fn seed(&self) -> Option<u64> {
        Some(HARNESS_SEED)
    }

    fn launch_reduced_motion(&self) -> bool {
        false
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Home,
    Play,
    Preferences,
    Summary(SummaryVm),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    play_handles: Option<PlayTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(PreferenceStore::new(false)));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.play_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Play => rsx! { PlayView {} },
        ViewKind::Preferences => rsx! { PreferencesPanel {} },
        ViewKind::Summary(summary) => rsx! {
            SummaryCard { summary, on_play_again: |()| {}, on_home: |()| {} }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub play_handles: Option<PlayTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: GameIntent) {
        let dispatch = self
            .play_handles
            .as_ref()
            .expect("play handles registered")
            .dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Reads the running game session, if any.
    pub fn with_session<T>(&self, f: impl FnOnce(&GameSession) -> T) -> Option<T> {
        let vm = self.play_handles.as_ref()?.vm();
        self.dom
            .in_runtime(|| vm.peek().as_ref().and_then(|game| game.session().map(f)))
    }

    pub fn correct_option(&self) -> usize {
        self.with_session(|session| {
            session
                .current_question()
                .map(|question| question.correct_index())
        })
        .flatten()
        .expect("question on screen")
    }

    pub fn wrong_option(&self) -> usize {
        let option_count = self
            .with_session(|session| {
                session
                    .current_question()
                    .map(|question| question.option_count())
            })
            .flatten()
            .expect("question on screen");
        (self.correct_option() + 1) % option_count
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Default rules with the shortest allowed feedback delay.
pub fn quick_rules() -> GameRules {
    GameRules::new(8, 3, 3, 30, Duration::from_millis(100)).expect("valid rules")
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_rules(view, GameRules::default())
}

pub fn setup_view_harness_with_rules(view: ViewKind, rules: GameRules) -> ViewHarness {
    let play_handles = match view {
        ViewKind::Play => Some(PlayTestHandles::default()),
        _ => None,
    };
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { rules }),
            view,
            play_handles: play_handles.clone(),
        },
    );
    ViewHarness { dom, play_handles }
}
