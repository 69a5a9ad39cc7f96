//! Theme system for Summit Prep
//!
//! Two themes are defined, light and dark. The marketing pages pin the light
//! theme: on activation they run [`ThemeProvider::force_light`], which
//! overrides whatever preference was stored or inherited from the system.
//! Forcing is idempotent; re-running it on every re-render changes nothing
//! after the first effective switch.

use serde::{Deserialize, Serialize};

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Semantic colors for a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Main background color
    pub background: Color,
    /// Elevated surface background (cards, tiles)
    pub surface: Color,
    /// Primary text color
    pub text: Color,
    /// Secondary/muted text color
    pub text_light: Color,
    /// Text color on primary-colored surfaces
    pub text_inverted: Color,
    /// Link color
    pub link: Color,
    /// Border color
    pub border: Color,
    /// Primary action color
    pub primary: Color,
    /// Accent/highlight color
    pub accent: Color,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color scheme ("light" or "dark")
    pub color_scheme: String,
    /// Semantic theme colors
    pub colors: ThemeColors,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        color_scheme: "light".to_string(),
        colors: ThemeColors {
            background: app_core::branding::colors::BACKGROUND_LIGHT.to_string(),
            surface: "#F6F8FA".to_string(),
            text: "#14181D".to_string(),
            text_light: "#4B5563".to_string(),
            text_inverted: "#FFFFFF".to_string(),
            link: app_core::branding::colors::PRIMARY.to_string(),
            border: "#E3E7EB".to_string(),
            primary: app_core::branding::colors::PRIMARY.to_string(),
            accent: app_core::branding::colors::SECONDARY.to_string(),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        color_scheme: "dark".to_string(),
        colors: ThemeColors {
            background: app_core::branding::colors::BACKGROUND_DARK.to_string(),
            surface: "#1B2530".to_string(),
            text: "#F2F5F8".to_string(),
            text_light: "#9AA7B4".to_string(),
            text_inverted: "#101820".to_string(),
            link: "#7FA8CC".to_string(),
            border: "#2A3744".to_string(),
            primary: "#2E7A91".to_string(),
            accent: app_core::branding::colors::SECONDARY.to_string(),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

// =============================================================================
// Theme State
// =============================================================================

/// Theme state with change tracking
///
/// `revision` advances only when a set actually changes the theme, which is
/// what makes the bootstrap observably idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current theme (regenerated on deserialization)
    #[serde(skip, default = "light_theme")]
    pub theme: Theme,
    /// Number of observable theme changes since construction
    #[serde(default)]
    pub revision: u64,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            theme_name: ThemeName::Light,
            theme: light_theme(),
            revision: 0,
        }
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self {
            theme_name,
            theme: get_theme(theme_name),
            revision: 0,
        }
    }

    /// Set the current theme; returns whether an observable change occurred
    pub fn set_theme(&mut self, theme_name: ThemeName) -> bool {
        if self.theme_name == theme_name {
            return false;
        }
        self.theme_name = theme_name;
        self.theme = get_theme(theme_name);
        self.revision += 1;
        true
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Process-wide theme provider
///
/// Owns the active [`ThemeState`] behind a lock so UI subtrees can read and
/// switch the theme. The provider itself never consults system preferences;
/// callers decide what to set.
pub struct ThemeProvider {
    state: parking_lot::RwLock<ThemeState>,
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeProvider {
    /// Create a provider with the given initial theme
    pub fn new(initial: ThemeName) -> Self {
        Self {
            state: parking_lot::RwLock::new(ThemeState::new(initial)),
        }
    }

    /// Current theme name
    pub fn current_name(&self) -> ThemeName {
        self.state.read().theme_name
    }

    /// Snapshot of the current theme
    pub fn current_theme(&self) -> Theme {
        self.state.read().theme.clone()
    }

    /// Number of observable theme changes so far
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// Set the active theme; returns whether an observable change occurred
    pub fn set_theme(&self, name: ThemeName) -> bool {
        let changed = self.state.write().set_theme(name);
        if changed {
            tracing::debug!(theme = %name, "theme changed");
        }
        changed
    }

    /// Theme bootstrap for the marketing pages
    ///
    /// Unconditionally pins the light theme, overriding any stored or system
    /// preference. Safe to run on every activation: only the first effective
    /// call changes anything.
    pub fn force_light(&self) -> bool {
        self.set_theme(ThemeName::Light)
    }
}
