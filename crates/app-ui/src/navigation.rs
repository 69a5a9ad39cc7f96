//! Navigation screen descriptors for the mobile shell
//!
//! The shell declares a stack of named screens; each entry names a routing key
//! and its presentation/animation options. This is configuration handed to the
//! host navigation runtime - the descriptors perform no transition logic,
//! gesture handling, or state tracking themselves.

use serde::{Deserialize, Serialize};

// =============================================================================
// Screen Options
// =============================================================================

/// How a screen is presented by the host navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ScreenPresentation {
    /// Regular full-screen push
    #[default]
    Card,
    /// Modal sheet over the current screen
    Modal,
    /// Modal with the screen behind still visible
    TransparentModal,
}

/// Transition animation for a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScreenAnimation {
    /// Platform default
    #[default]
    Default,
    /// Slide in from the right
    SlideFromRight,
    /// Slide up from the bottom
    SlideFromBottom,
    /// Cross-fade
    Fade,
    /// No animation
    None,
}

/// Presentation options for a screen entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenOptions {
    /// Whether the host navigator renders a header bar
    pub header_shown: bool,
    /// Transition animation
    pub animation: ScreenAnimation,
    /// Presentation style
    pub presentation: ScreenPresentation,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            header_shown: true,
            animation: ScreenAnimation::Default,
            presentation: ScreenPresentation::Card,
        }
    }
}

// =============================================================================
// Screen Descriptors
// =============================================================================

/// One navigable screen: routing key plus presentation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenDescriptor {
    /// Routing key, unique within the stack
    pub name: String,
    /// Presentation options
    pub options: ScreenOptions,
}

impl ScreenDescriptor {
    /// Create a descriptor with default options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: ScreenOptions::default(),
        }
    }

    /// Hide the host navigator's header bar
    pub fn header_hidden(mut self) -> Self {
        self.options.header_shown = false;
        self
    }

    /// Set the transition animation
    pub fn animation(mut self, animation: ScreenAnimation) -> Self {
        self.options.animation = animation;
        self
    }

    /// Set the presentation style
    pub fn presentation(mut self, presentation: ScreenPresentation) -> Self {
        self.options.presentation = presentation;
        self
    }
}

/// The mobile shell's screen stack, in registration order
///
/// The shell draws its own headers, so the root screens hide the navigator
/// bar; the enquiry screen opens as a bottom-sheet modal.
pub fn app_screens() -> Vec<ScreenDescriptor> {
    vec![
        ScreenDescriptor::new("index").header_hidden(),
        ScreenDescriptor::new("courses")
            .header_hidden()
            .animation(ScreenAnimation::SlideFromRight),
        ScreenDescriptor::new("course-detail")
            .header_hidden()
            .animation(ScreenAnimation::SlideFromRight),
        ScreenDescriptor::new("login")
            .header_hidden()
            .animation(ScreenAnimation::Fade),
        ScreenDescriptor::new("register")
            .header_hidden()
            .animation(ScreenAnimation::Fade),
        ScreenDescriptor::new("dashboard").header_hidden(),
        ScreenDescriptor::new("enquiry")
            .animation(ScreenAnimation::SlideFromBottom)
            .presentation(ScreenPresentation::Modal),
    ]
}

/// Look up a screen descriptor by routing key
pub fn find_screen(name: &str) -> Option<ScreenDescriptor> {
    app_screens().into_iter().find(|s| s.name == name)
}
