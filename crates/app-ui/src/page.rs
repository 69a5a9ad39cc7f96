//! Page and layout composition
//!
//! A page is a pure function from nothing to an ordered tree of presentational
//! sections; the order is literal and defines the rendered document order. A
//! layout wraps a page with shared chrome metadata read by the hosting
//! renderer for document-head population. Neither fetches data nor holds
//! state.

use app_core::branding;
use app_core::content::{
    course_catalog, home_content, ContentSection, Course, ExamCategory, HeroSlide, Statistic,
    Testimonial,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// Metadata
// =============================================================================

/// Static head metadata attached to a page or layout subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Document title
    pub title: String,
    /// Document description
    pub description: String,
}

impl PageMetadata {
    /// Create a metadata record
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// The kind of a presentational section, used to assert render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    /// Site header with navigation links
    Header,
    /// Rotating hero banner
    HeroCarousel,
    /// Exam category tiles
    ExamCategories,
    /// Headline statistics band
    Statistics,
    /// Student testimonials
    Testimonials,
    /// Informational content blocks
    ContentSections,
    /// Course catalog listing
    CoursesContent,
    /// Site footer
    Footer,
}

/// A navigation link in the header or footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link label
    pub label: String,
    /// Link target path
    pub href: String,
}

/// Props for the site header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderProps {
    /// Brand name shown in the header
    pub brand: String,
    /// Navigation links, in display order
    pub links: Vec<NavLink>,
}

/// Props for the site footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterProps {
    /// Copyright notice
    pub copyright: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
}

/// A presentational section with its typed props
///
/// Sections carry everything the host renderer needs; rendering them in
/// sequence yields the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "props")]
pub enum Section {
    /// Site header
    Header(HeaderProps),
    /// Rotating hero banner
    HeroCarousel {
        /// Slides in rotation order
        slides: Vec<HeroSlide>,
    },
    /// Exam category tiles
    ExamCategories {
        /// Categories in display order
        categories: Vec<ExamCategory>,
    },
    /// Headline statistics band
    Statistics {
        /// Statistics in display order
        statistics: Vec<Statistic>,
    },
    /// Student testimonials
    Testimonials {
        /// Testimonials in display order
        testimonials: Vec<Testimonial>,
    },
    /// Informational content blocks
    ContentSections {
        /// Blocks in display order
        sections: Vec<ContentSection>,
    },
    /// Course catalog listing
    CoursesContent {
        /// Courses in display order
        courses: Vec<Course>,
    },
    /// Site footer
    Footer(FooterProps),
}

impl Section {
    /// The kind of this section
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Header(_) => SectionKind::Header,
            Section::HeroCarousel { .. } => SectionKind::HeroCarousel,
            Section::ExamCategories { .. } => SectionKind::ExamCategories,
            Section::Statistics { .. } => SectionKind::Statistics,
            Section::Testimonials { .. } => SectionKind::Testimonials,
            Section::ContentSections { .. } => SectionKind::ContentSections,
            Section::CoursesContent { .. } => SectionKind::CoursesContent,
            Section::Footer(_) => SectionKind::Footer,
        }
    }
}

fn header() -> Section {
    Section::Header(HeaderProps {
        brand: branding::APP_NAME.to_string(),
        links: vec![
            NavLink {
                label: "Home".to_string(),
                href: "/".to_string(),
            },
            NavLink {
                label: "Courses".to_string(),
                href: "/courses".to_string(),
            },
            NavLink {
                label: "Results".to_string(),
                href: "/results".to_string(),
            },
            NavLink {
                label: "Contact".to_string(),
                href: "/contact".to_string(),
            },
        ],
    })
}

fn footer() -> Section {
    Section::Footer(FooterProps {
        copyright: branding::copyright::notice(),
        email: branding::contact::ADMISSIONS_EMAIL.to_string(),
        phone: branding::contact::PHONE.to_string(),
    })
}

// =============================================================================
// Pages
// =============================================================================

/// A composed page: metadata plus an ordered, literal sequence of sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page name (routing key)
    pub name: String,
    /// Head metadata for this page
    pub metadata: PageMetadata,
    /// Sections in render order
    pub sections: Vec<Section>,
}

impl Page {
    /// Head metadata for this page
    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    /// The section kinds in render order
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(Section::kind).collect()
    }
}

/// Compose the home page
///
/// Section order is fixed: header, hero carousel, exam categories,
/// statistics, testimonials, content sections, footer.
pub fn home_page() -> Page {
    let content = home_content();

    Page {
        name: "home".to_string(),
        metadata: PageMetadata::new(
            branding::APP_NAME,
            branding::APP_TAGLINE,
        ),
        sections: vec![
            header(),
            Section::HeroCarousel {
                slides: content.hero_slides,
            },
            Section::ExamCategories {
                categories: content.exam_categories,
            },
            Section::Statistics {
                statistics: content.statistics,
            },
            Section::Testimonials {
                testimonials: content.testimonials,
            },
            Section::ContentSections {
                sections: content.sections,
            },
            footer(),
        ],
    }
}

/// Compose the courses page: header, course catalog, footer
pub fn courses_page() -> Page {
    Page {
        name: "courses".to_string(),
        metadata: PageMetadata::new(
            "Courses",
            "Classroom, online, and self-paced programs for every major entrance exam",
        ),
        sections: vec![
            header(),
            Section::CoursesContent {
                courses: course_catalog(),
            },
            footer(),
        ],
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Shared chrome wrapping a page subtree
///
/// The layout contributes the site-level metadata; it holds no state and does
/// no fetching. Wrapping preserves the child section order exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Site-level head metadata
    pub metadata: PageMetadata,
}

impl Default for Layout {
    fn default() -> Self {
        Self::root()
    }
}

impl Layout {
    /// Create a layout with explicit metadata
    pub fn new(metadata: PageMetadata) -> Self {
        Self { metadata }
    }

    /// The root layout for the marketing site
    pub fn root() -> Self {
        Self::new(PageMetadata::new(
            branding::APP_NAME,
            branding::APP_TAGLINE,
        ))
    }

    /// Wrap a page into a renderable document
    pub fn wrap(&self, page: Page) -> Document {
        Document {
            site: self.metadata.clone(),
            page: page.metadata.clone(),
            sections: page.sections,
        }
    }
}

/// A page wrapped in its layout, ready for the host renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Site-level metadata from the layout
    pub site: PageMetadata,
    /// Page-level metadata
    pub page: PageMetadata,
    /// Sections in render order
    pub sections: Vec<Section>,
}

impl Document {
    /// The document title: "<page> | <site>", or just the site title on the
    /// page whose title equals the site title
    pub fn head_title(&self) -> String {
        if self.page.title == self.site.title {
            self.site.title.clone()
        } else {
            format!("{} | {}", self.page.title, self.site.title)
        }
    }

    /// The document description (page-level wins)
    pub fn head_description(&self) -> &str {
        &self.page.description
    }
}
