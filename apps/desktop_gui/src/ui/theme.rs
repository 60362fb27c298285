//! Theme presets and persisted window settings.

use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

use catalog::parse_hex_rgb;

pub const SETTINGS_STORAGE_KEY: &str = "catalog_editor.settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    SlateDark,
    PaperLight,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::SlateDark => "Slate (Dark)",
            ThemePreset::PaperLight => "Paper (Light)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub accent_color: egui::Color32,
    pub panel_rounding: u8,
}

impl ThemeSettings {
    pub fn slate_default() -> Self {
        Self {
            preset: ThemePreset::SlateDark,
            accent_color: egui::Color32::from_rgb(79, 70, 229),
            panel_rounding: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiReadabilitySettings {
    pub text_scale: f32,
    pub compact_density: bool,
}

impl UiReadabilitySettings {
    pub fn defaults() -> Self {
        Self {
            text_scale: 1.0,
            compact_density: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PersistedThemePreset {
    SlateDark,
    PaperLight,
}

impl From<ThemePreset> for PersistedThemePreset {
    fn from(value: ThemePreset) -> Self {
        match value {
            ThemePreset::SlateDark => Self::SlateDark,
            ThemePreset::PaperLight => Self::PaperLight,
        }
    }
}

impl From<PersistedThemePreset> for ThemePreset {
    fn from(value: PersistedThemePreset) -> Self {
        match value {
            PersistedThemePreset::SlateDark => Self::SlateDark,
            PersistedThemePreset::PaperLight => Self::PaperLight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedUiSettings {
    theme_preset: PersistedThemePreset,
    accent_color: [u8; 4],
    panel_rounding: u8,
    text_scale: f32,
    compact_density: bool,
}

impl Default for PersistedUiSettings {
    fn default() -> Self {
        let theme = ThemeSettings::slate_default();
        let readability = UiReadabilitySettings::defaults();
        Self {
            theme_preset: theme.preset.into(),
            accent_color: [
                theme.accent_color.r(),
                theme.accent_color.g(),
                theme.accent_color.b(),
                theme.accent_color.a(),
            ],
            panel_rounding: theme.panel_rounding,
            text_scale: readability.text_scale,
            compact_density: readability.compact_density,
        }
    }
}

impl PersistedUiSettings {
    pub fn into_runtime(self) -> (ThemeSettings, UiReadabilitySettings) {
        (
            ThemeSettings {
                preset: self.theme_preset.into(),
                accent_color: egui::Color32::from_rgba_unmultiplied(
                    self.accent_color[0],
                    self.accent_color[1],
                    self.accent_color[2],
                    self.accent_color[3],
                ),
                panel_rounding: self.panel_rounding.min(16),
            },
            UiReadabilitySettings {
                text_scale: self.text_scale.clamp(0.8, 1.4),
                compact_density: self.compact_density,
            },
        )
    }

    pub fn from_runtime(theme: ThemeSettings, readability: UiReadabilitySettings) -> Self {
        Self {
            theme_preset: theme.preset.into(),
            accent_color: [
                theme.accent_color.r(),
                theme.accent_color.g(),
                theme.accent_color.b(),
                theme.accent_color.a(),
            ],
            panel_rounding: theme.panel_rounding,
            text_scale: readability.text_scale,
            compact_density: readability.compact_density,
        }
    }
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = match theme.preset {
        ThemePreset::SlateDark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(226, 232, 240));
            v.window_fill = egui::Color32::from_rgb(30, 41, 59);
            v.panel_fill = egui::Color32::from_rgb(15, 23, 42);
            v.extreme_bg_color = egui::Color32::from_rgb(2, 6, 23);
            v.faint_bg_color = egui::Color32::from_rgb(30, 41, 59);
            v
        }
        ThemePreset::PaperLight => egui::Visuals::light(),
    };

    visuals.hyperlink_color = theme.accent_color;
    visuals.selection.bg_fill = theme.accent_color;
    visuals.widgets.active.bg_fill = theme.accent_color;
    visuals.widgets.hovered.bg_fill = theme.accent_color.gamma_multiply(0.85);
    visuals.window_corner_radius = egui::CornerRadius::same(theme.panel_rounding);
    visuals.menu_corner_radius = egui::CornerRadius::same(theme.panel_rounding.clamp(4, 16));
    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

/// Color for a palette swatch or a product color dot. Tags that fail to
/// parse render as a neutral gray instead of being dropped.
pub fn swatch_color(tag: &str) -> egui::Color32 {
    match parse_hex_rgb(tag) {
        Ok([r, g, b]) => egui::Color32::from_rgb(r, g, b),
        Err(_) => egui::Color32::from_rgb(107, 114, 128),
    }
}
