//! Core domain content for Summit Prep
//!
//! This crate holds the branding constants and the static page content the
//! presentation layer composes: hero slides, exam categories, statistics,
//! testimonials, informational sections, and the course catalog. All of it is
//! declarative data constructed once and never mutated.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod content;

pub use content::{
    course_catalog, home_content, ContentSection, Course, CourseMode, ExamCategory, HeroSlide,
    HomeContent, Statistic, Testimonial,
};
