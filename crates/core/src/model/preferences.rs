/// Text size tier for the whole view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    /// Next tier, wrapping from `ExtraLarge` back to `Small`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FontSize::Small => FontSize::Medium,
            FontSize::Medium => FontSize::Large,
            FontSize::Large => FontSize::ExtraLarge,
            FontSize::ExtraLarge => FontSize::Small,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
            FontSize::ExtraLarge => "Extra large",
        }
    }
}

/// Display, accessibility and audio choices.
///
/// None of these feed back into game progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Preferences {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub dyslexia_font: bool,
    pub font_size: FontSize,
    pub audio_enabled: bool,
    pub narration_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            high_contrast: false,
            dyslexia_font: false,
            font_size: FontSize::Medium,
            audio_enabled: true,
            narration_enabled: false,
        }
    }
}
