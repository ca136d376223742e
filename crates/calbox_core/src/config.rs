use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_WINDOW_SIZE: usize = 60;
pub const DEFAULT_DOT_COLOR: &str = "#6366F1";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn palette(self) -> SelectionPalette {
        match self {
            Appearance::Light => SelectionPalette {
                selected_color: "#1A1A1A".to_string(),
                selected_text_color: "#FFFFFF".to_string(),
            },
            Appearance::Dark => SelectionPalette {
                selected_color: "#FFFFFF".to_string(),
                selected_text_color: "#0A0A0A".to_string(),
            },
        }
    }
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            other => Err(format!("unknown appearance `{other}`")),
        }
    }
}

/// Colors applied to the selected calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPalette {
    pub selected_color: String,
    pub selected_text_color: String,
}

impl Default for SelectionPalette {
    fn default() -> Self {
        Appearance::default().palette()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaConfig {
    pub window_size: usize,
    pub appearance: Appearance,
    pub default_dot_color: String,
}

impl AgendaConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(days) = std::env::var("CALBOX_TIMELINE_DAYS") {
            config.apply_window_size(&days);
        }
        if let Ok(appearance) = std::env::var("CALBOX_APPEARANCE") {
            match appearance.parse() {
                Ok(value) => config.appearance = value,
                Err(err) => warn!(%err, "ignoring CALBOX_APPEARANCE"),
            }
        }
        if let Ok(color) = std::env::var("CALBOX_DOT_COLOR") {
            let color = color.trim();
            if color.is_empty() {
                warn!("ignoring empty CALBOX_DOT_COLOR");
            } else {
                config.default_dot_color = color.to_string();
            }
        }
        info!(
            window_size = config.window_size,
            appearance = ?config.appearance,
            "agenda configuration resolved"
        );
        config
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = if window_size == 0 {
            DEFAULT_WINDOW_SIZE
        } else {
            window_size
        };
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn palette(&self) -> SelectionPalette {
        self.appearance.palette()
    }

    fn apply_window_size(&mut self, raw: &str) {
        match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => self.window_size = value,
            _ => warn!(value = raw, "ignoring CALBOX_TIMELINE_DAYS"),
        }
    }
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            appearance: Appearance::Light,
            default_dot_color: DEFAULT_DOT_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_window_falls_back_to_default() {
        assert_eq!(
            AgendaConfig::default().with_window_size(0).window_size,
            DEFAULT_WINDOW_SIZE
        );
        assert_eq!(AgendaConfig::default().with_window_size(14).window_size, 14);
    }

    #[test]
    fn window_size_parsing_ignores_garbage() {
        let mut config = AgendaConfig::default();
        config.apply_window_size("abc");
        config.apply_window_size("0");
        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
        config.apply_window_size(" 30 ");
        assert_eq!(config.window_size, 30);
    }

    #[test]
    fn appearance_selects_palette() {
        assert_eq!("Dark".parse::<Appearance>(), Ok(Appearance::Dark));
        assert!("sepia".parse::<Appearance>().is_err());
        let dark = Appearance::Dark.palette();
        assert_eq!(dark.selected_color, "#FFFFFF");
        assert_eq!(dark.selected_text_color, "#0A0A0A");
        assert_eq!(SelectionPalette::default().selected_color, "#1A1A1A");
    }
}
