//! Summit Prep branding
//!
//! This module contains the branding constants shared by the website and the
//! mobile shell: names, taglines, brand colors, and contact endpoints.

/// Application name
pub const APP_NAME: &str = "Summit Prep";

/// Application name short form
pub const APP_NAME_SHORT: &str = "Summit";

/// Application tagline
pub const APP_TAGLINE: &str = "Every exam has a summit. We get you there.";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Brand colors used across the site and the mobile shell
pub mod colors {
    /// Primary brand color (deep teal)
    pub const PRIMARY: &str = "#0F4C5C";

    /// Secondary brand color (saffron)
    pub const SECONDARY: &str = "#E9A820";

    /// Accent color (slate blue)
    pub const ACCENT: &str = "#5B7DB1";

    /// Background color (light theme)
    pub const BACKGROUND_LIGHT: &str = "#FFFFFF";

    /// Background color (dark theme)
    pub const BACKGROUND_DARK: &str = "#101820";
}

/// Public endpoints for the service
pub mod contact {
    /// Official website
    pub const WEBSITE: &str = "https://summit-prep.example.com";

    /// Admissions email
    pub const ADMISSIONS_EMAIL: &str = "admissions@summit-prep.example.com";

    /// Support phone line
    pub const PHONE: &str = "+1 555 010 4477";
}

/// Copyright information
pub mod copyright {
    /// Copyright year
    pub const YEAR: &str = "2024-2026";

    /// Copyright holder
    pub const HOLDER: &str = "Summit Prep Team";

    /// License
    pub const LICENSE: &str = "MIT";

    /// Full copyright notice
    pub fn notice() -> String {
        format!("© {} {}. Licensed under {}.", YEAR, HOLDER, LICENSE)
    }
}
