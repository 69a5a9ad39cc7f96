//! User interface layer for Summit Prep
//!
//! This crate provides the declarative presentation layer shared by the
//! marketing site and the mobile shell:
//!
//! - [`theme`] - Theme definitions, the shared theme provider, and the
//!   light-theme bootstrap the marketing pages run on activation
//! - [`page`] - Page and layout composition with fixed section order and
//!   static head metadata
//! - [`navigation`] - Declarative screen descriptors consumed by the host
//!   navigation runtime in the mobile shell
//! - [`math`] - Typed props for the external math-rendering component
//!
//! # Example
//!
//! ```rust
//! use app_ui::page::{home_page, SectionKind};
//! use app_ui::theme::{ThemeName, ThemeProvider};
//!
//! let page = home_page();
//! assert_eq!(page.section_kinds()[0], SectionKind::Header);
//!
//! let provider = ThemeProvider::new(ThemeName::Dark);
//! provider.force_light();
//! assert_eq!(provider.current_name(), ThemeName::Light);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod math;
pub mod navigation;
pub mod page;
pub mod theme;

pub use math::MathViewProps;
pub use navigation::{app_screens, ScreenAnimation, ScreenDescriptor, ScreenOptions, ScreenPresentation};
pub use page::{courses_page, home_page, Document, Layout, Page, PageMetadata, Section, SectionKind};
pub use theme::{dark_theme, get_theme, light_theme, Theme, ThemeName, ThemeProvider, ThemeState};
