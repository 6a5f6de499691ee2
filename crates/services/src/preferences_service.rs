use tracing::debug;

use river_core::model::{FontSize, Preferences};

/// Who decided the current reduced-motion value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionSource {
    Environment,
    /// Forced on when the app was launched.
    Launch,
    User,
}

/// In-memory preference state for one run of the app.
///
/// Reduced motion starts from the host's setting and keeps following it
/// until the user toggles it explicitly or the launch forces it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    preferences: Preferences,
    env_reduced_motion: bool,
    launch_reduced_motion: bool,
    motion_source: MotionSource,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(env_reduced_motion: bool) -> Self {
        Self {
            preferences: Preferences {
                reduced_motion: env_reduced_motion,
                ..Preferences::default()
            },
            env_reduced_motion,
            launch_reduced_motion: false,
            motion_source: MotionSource::Environment,
        }
    }

    /// Pins reduced motion on for this run; host reports no longer change it.
    #[must_use]
    pub fn with_launch_reduced_motion(mut self, forced: bool) -> Self {
        if forced {
            self.launch_reduced_motion = true;
            self.preferences.reduced_motion = true;
            self.motion_source = MotionSource::Launch;
        }
        self
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    #[must_use]
    pub fn motion_source(&self) -> MotionSource {
        self.motion_source
    }

    pub fn toggle_reduced_motion(&mut self) {
        self.set_reduced_motion(!self.preferences.reduced_motion);
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.preferences.reduced_motion = enabled;
        self.motion_source = MotionSource::User;
    }

    /// Apply a change reported by the host. Returns false when a launch or
    /// user override keeps the current value.
    pub fn environment_motion_changed(&mut self, reduced: bool) -> bool {
        self.env_reduced_motion = reduced;
        if self.motion_source != MotionSource::Environment {
            debug!(reduced, source = ?self.motion_source, "environment motion change ignored");
            return false;
        }
        self.preferences.reduced_motion = reduced;
        true
    }

    pub fn toggle_high_contrast(&mut self) {
        self.preferences.high_contrast = !self.preferences.high_contrast;
    }

    pub fn toggle_dyslexia_font(&mut self) {
        self.preferences.dyslexia_font = !self.preferences.dyslexia_font;
    }

    pub fn toggle_audio(&mut self) {
        self.preferences.audio_enabled = !self.preferences.audio_enabled;
    }

    pub fn toggle_narration(&mut self) {
        self.preferences.narration_enabled = !self.preferences.narration_enabled;
    }

    pub fn cycle_font_size(&mut self) -> FontSize {
        self.preferences.font_size = self.preferences.font_size.next();
        self.preferences.font_size
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.preferences.font_size = size;
    }

    /// Back to defaults, with reduced motion following the host again unless
    /// the launch forced it on.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::new(self.env_reduced_motion)
            .with_launch_reduced_motion(self.launch_reduced_motion);
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(false)
    }
}
