//! Typed props for the external math-rendering component
//!
//! Course material embeds rendered formulas through a third-party math view.
//! This module declares the component's prop shape so composing code gets
//! compile-time checking; serialization matches the component's camelCase
//! option names. No rendering happens here.

use serde::{Deserialize, Serialize};

/// Props accepted by the external math view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MathViewProps {
    /// The TeX source to render
    pub math: String,
    /// Render as display (block) math instead of inline
    #[serde(default)]
    pub display_mode: bool,
    /// Color used when rendering fails
    #[serde(default = "default_error_color")]
    pub error_color: String,
    /// Raise instead of rendering partial output on invalid input
    #[serde(default)]
    pub throw_on_error: bool,
}

fn default_error_color() -> String {
    "#CC0000".to_string()
}

impl MathViewProps {
    /// Inline math with default options
    pub fn inline(math: impl Into<String>) -> Self {
        Self {
            math: math.into(),
            display_mode: false,
            error_color: default_error_color(),
            throw_on_error: false,
        }
    }

    /// Display (block) math with default options
    pub fn display(math: impl Into<String>) -> Self {
        Self {
            display_mode: true,
            ..Self::inline(math)
        }
    }

    /// Set the error color
    pub fn error_color(mut self, color: impl Into<String>) -> Self {
        self.error_color = color.into();
        self
    }

    /// Raise on invalid input instead of rendering partial output
    pub fn throw_on_error(mut self) -> Self {
        self.throw_on_error = true;
        self
    }
}
