//! Theme state and class helpers. Colours are CSS variables in
//! `assets/main.css`; the light palette overrides them under `.light-theme`.

use crate::domain::ProfitTone;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

// ============================================
// ROOT / CONTROLS
// ============================================

pub fn root_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "app dark-theme",
        Theme::Light => "app light-theme",
    }
}

/// Label for the button that switches to the other theme.
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀ Light",
        Theme::Light => "☾ Dark",
    }
}

// ============================================
// VALUE STYLES
// ============================================

pub fn tone_class(tone: ProfitTone) -> &'static str {
    match tone {
        ProfitTone::Positive => "tone-positive",
        ProfitTone::Negative => "tone-negative",
        ProfitTone::Undefined => "tone-undefined",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn preference_maps_to_theme() {
        assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
        assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
    }

    #[test]
    fn light_root_enables_palette_override() {
        assert!(root_class(Theme::Light).contains("light-theme"));
        assert!(!root_class(Theme::Dark).contains("light-theme"));
    }
}
