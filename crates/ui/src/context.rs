use std::sync::Arc;

use river_core::model::{GameRules, QuestionBank};
use services::{Clock, GameLoopService};

pub trait UiApp: Send + Sync {
    fn rules(&self) -> GameRules;
    fn seed(&self) -> Option<u64>;
    /// Reduced motion forced on at launch, regardless of the host setting.
    fn launch_reduced_motion(&self) -> bool;

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::new(QuestionBank::standard())
    }
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    rules: GameRules,
    seed: Option<u64>,
    launch_reduced_motion: bool,
    bank: Arc<QuestionBank>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            rules: app.rules(),
            seed: app.seed(),
            launch_reduced_motion: app.launch_reduced_motion(),
            bank: app.question_bank(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn launch_reduced_motion(&self) -> bool {
        self.launch_reduced_motion
    }

    /// A fresh game loop; seeded when the host asked for repeatable games.
    #[must_use]
    pub fn new_game_loop(&self) -> GameLoopService {
        let game = GameLoopService::new(self.clock, self.rules.clone(), Arc::clone(&self.bank));
        match self.seed {
            Some(seed) => game.with_seed(seed),
            None => game,
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
