use river_core::model::{FontSize, Preferences};
use services::PreferenceStore;

/// Root element classes for the active preferences.
#[must_use]
pub fn root_classes(preferences: &Preferences) -> String {
    let mut classes = vec!["app-root", font_class(preferences.font_size)];
    if preferences.reduced_motion {
        classes.push("reduced-motion");
    }
    if preferences.high_contrast {
        classes.push("high-contrast");
    }
    if preferences.dyslexia_font {
        classes.push("dyslexia-font");
    }
    classes.join(" ")
}

fn font_class(size: FontSize) -> &'static str {
    match size {
        FontSize::Small => "font-small",
        FontSize::Medium => "font-medium",
        FontSize::Large => "font-large",
        FontSize::ExtraLarge => "font-xlarge",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceToggle {
    ReducedMotion,
    HighContrast,
    DyslexiaFont,
    Audio,
    Narration,
}

impl PreferenceToggle {
    pub const ALL: [PreferenceToggle; 5] = [
        PreferenceToggle::ReducedMotion,
        PreferenceToggle::HighContrast,
        PreferenceToggle::DyslexiaFont,
        PreferenceToggle::Audio,
        PreferenceToggle::Narration,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PreferenceToggle::ReducedMotion => "Reduced motion",
            PreferenceToggle::HighContrast => "High contrast",
            PreferenceToggle::DyslexiaFont => "Dyslexia-friendly font",
            PreferenceToggle::Audio => "Sound effects",
            PreferenceToggle::Narration => "Read questions aloud",
        }
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            PreferenceToggle::ReducedMotion => "pref-reduced-motion",
            PreferenceToggle::HighContrast => "pref-high-contrast",
            PreferenceToggle::DyslexiaFont => "pref-dyslexia-font",
            PreferenceToggle::Audio => "pref-audio",
            PreferenceToggle::Narration => "pref-narration",
        }
    }

    #[must_use]
    pub fn is_on(self, preferences: &Preferences) -> bool {
        match self {
            PreferenceToggle::ReducedMotion => preferences.reduced_motion,
            PreferenceToggle::HighContrast => preferences.high_contrast,
            PreferenceToggle::DyslexiaFont => preferences.dyslexia_font,
            PreferenceToggle::Audio => preferences.audio_enabled,
            PreferenceToggle::Narration => preferences.narration_enabled,
        }
    }

    pub fn apply(self, store: &mut PreferenceStore) {
        match self {
            PreferenceToggle::ReducedMotion => store.toggle_reduced_motion(),
            PreferenceToggle::HighContrast => store.toggle_high_contrast(),
            PreferenceToggle::DyslexiaFont => store.toggle_dyslexia_font(),
            PreferenceToggle::Audio => store.toggle_audio(),
            PreferenceToggle::Narration => store.toggle_narration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classes_only_carry_font_size() {
        assert_eq!(root_classes(&Preferences::default()), "app-root font-medium");
    }

    #[test]
    fn toggles_add_classes() {
        let mut store = PreferenceStore::default();
        PreferenceToggle::ReducedMotion.apply(&mut store);
        PreferenceToggle::HighContrast.apply(&mut store);
        store.set_font_size(FontSize::ExtraLarge);

        let classes = root_classes(&store.preferences());
        assert_eq!(classes, "app-root font-xlarge reduced-motion high-contrast");
        assert!(PreferenceToggle::HighContrast.is_on(&store.preferences()));
        assert!(!PreferenceToggle::DyslexiaFont.is_on(&store.preferences()));
    }
}
