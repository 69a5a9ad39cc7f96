//! Static page content for the marketing site
//!
//! Every collection here is declarative data rendered in source order by the
//! page composition layer. The constructor functions are pure: they return the
//! same value on every call and nothing mutates the results.

use serde::{Deserialize, Serialize};

/// A slide in the home page hero carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    /// Slide headline
    pub title: String,
    /// Supporting line under the headline
    pub subtitle: String,
    /// Image asset path
    pub image: String,
    /// Call-to-action label
    pub cta_label: String,
    /// Call-to-action target path
    pub cta_href: String,
}

/// An exam category tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamCategory {
    /// Display name
    pub name: String,
    /// URL slug (unique within the catalog)
    pub slug: String,
    /// Short description
    pub description: String,
    /// Number of courses offered in this category
    pub course_count: u32,
}

/// A headline statistic shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    /// Statistic label (e.g. "Students coached")
    pub label: String,
    /// Display value (e.g. "12,000+")
    pub value: String,
}

/// A student testimonial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Student name
    pub student: String,
    /// Exam the student prepared for
    pub exam: String,
    /// Quote text
    pub quote: String,
    /// Score or rank achieved
    pub result: String,
}

/// An informational content block on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Section heading
    pub heading: String,
    /// Section body text
    pub body: String,
}

/// Delivery mode for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseMode {
    /// In-person classroom batches
    Classroom,
    /// Live online batches
    Online,
    /// Recorded, self-paced material
    SelfPaced,
}

impl CourseMode {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CourseMode::Classroom => "Classroom",
            CourseMode::Online => "Live Online",
            CourseMode::SelfPaced => "Self-Paced",
        }
    }
}

/// A course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course title
    pub title: String,
    /// URL slug (unique within the catalog)
    pub slug: String,
    /// Slug of the exam category this course belongs to
    pub category: String,
    /// Duration description (e.g. "12 months")
    pub duration: String,
    /// Delivery mode
    pub mode: CourseMode,
    /// One-paragraph summary
    pub summary: String,
}

/// The complete content bundle for the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    /// Hero carousel slides, in display order
    pub hero_slides: Vec<HeroSlide>,
    /// Exam category tiles, in display order
    pub exam_categories: Vec<ExamCategory>,
    /// Headline statistics, in display order
    pub statistics: Vec<Statistic>,
    /// Student testimonials, in display order
    pub testimonials: Vec<Testimonial>,
    /// Informational sections, in display order
    pub sections: Vec<ContentSection>,
}

/// Build the home page content bundle
pub fn home_content() -> HomeContent {
    HomeContent {
        hero_slides: vec![
            HeroSlide {
                title: "Crack your entrance exam with mentors who have done it".to_string(),
                subtitle: "Small batches, daily practice, weekly mock tests".to_string(),
                image: "/images/hero/classroom.jpg".to_string(),
                cta_label: "Explore Courses".to_string(),
                cta_href: "/courses".to_string(),
            },
            HeroSlide {
                title: "New engineering batch starts this month".to_string(),
                subtitle: "Two-year foundation program for grades 11 and 12".to_string(),
                image: "/images/hero/engineering.jpg".to_string(),
                cta_label: "Book a Free Demo".to_string(),
                cta_href: "/enquiry".to_string(),
            },
            HeroSlide {
                title: "Scholarship test every Sunday".to_string(),
                subtitle: "Up to 90% fee waiver for top scorers".to_string(),
                image: "/images/hero/scholarship.jpg".to_string(),
                cta_label: "Register Now".to_string(),
                cta_href: "/scholarship".to_string(),
            },
        ],
        exam_categories: vec![
            ExamCategory {
                name: "Engineering Entrance".to_string(),
                slug: "engineering".to_string(),
                description: "Foundation and crash programs for national engineering entrances"
                    .to_string(),
                course_count: 4,
            },
            ExamCategory {
                name: "Medical Entrance".to_string(),
                slug: "medical".to_string(),
                description: "Biology-first coaching with weekly clinical context sessions"
                    .to_string(),
                course_count: 3,
            },
            ExamCategory {
                name: "Civil Services".to_string(),
                slug: "civil-services".to_string(),
                description: "Prelims to interview, with daily answer-writing review".to_string(),
                course_count: 2,
            },
            ExamCategory {
                name: "School Foundation".to_string(),
                slug: "foundation".to_string(),
                description: "Concept building for grades 8-10 across maths and science"
                    .to_string(),
                course_count: 3,
            },
        ],
        statistics: vec![
            Statistic {
                label: "Students coached".to_string(),
                value: "12,000+".to_string(),
            },
            Statistic {
                label: "Selection rate".to_string(),
                value: "68%".to_string(),
            },
            Statistic {
                label: "Expert faculty".to_string(),
                value: "45".to_string(),
            },
            Statistic {
                label: "Years of coaching".to_string(),
                value: "14".to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                student: "Ananya R.".to_string(),
                exam: "Medical Entrance".to_string(),
                quote: "The weekly mock tests felt harder than the real paper. Walking into \
                        the exam hall, nothing surprised me."
                    .to_string(),
                result: "AIR 412".to_string(),
            },
            Testimonial {
                student: "Dev M.".to_string(),
                exam: "Engineering Entrance".to_string(),
                quote: "My mentor rebuilt my maths from the ground up in six months."
                    .to_string(),
                result: "99.2 percentile".to_string(),
            },
            Testimonial {
                student: "Sara K.".to_string(),
                exam: "Civil Services".to_string(),
                quote: "Daily answer-writing review is the single reason I cleared mains."
                    .to_string(),
                result: "Rank 87".to_string(),
            },
        ],
        sections: vec![
            ContentSection {
                heading: "Why Summit Prep".to_string(),
                body: "Batches capped at thirty students, printed and digital study material, \
                       and a mentor who tracks every test you take."
                    .to_string(),
            },
            ContentSection {
                heading: "How we teach".to_string(),
                body: "Concept lecture, solved examples, timed practice, and a doubt session \
                       in every cycle. Nothing moves forward until the class average clears \
                       the bar."
                    .to_string(),
            },
            ContentSection {
                heading: "Beyond the classroom".to_string(),
                body: "Recorded lectures, a question bank with ten thousand problems, and \
                       parent progress reports every month."
                    .to_string(),
            },
        ],
    }
}

/// Build the course catalog backing the courses page
pub fn course_catalog() -> Vec<Course> {
    vec![
        Course {
            title: "Engineering Foundation (2-Year)".to_string(),
            slug: "engineering-foundation".to_string(),
            category: "engineering".to_string(),
            duration: "24 months".to_string(),
            mode: CourseMode::Classroom,
            summary: "Grade 11 start. Full syllabus coverage with board exam alignment."
                .to_string(),
        },
        Course {
            title: "Engineering Crash Course".to_string(),
            slug: "engineering-crash".to_string(),
            category: "engineering".to_string(),
            duration: "4 months".to_string(),
            mode: CourseMode::Online,
            summary: "Revision sprints and twenty full-length mock tests.".to_string(),
        },
        Course {
            title: "Medical Entrance Intensive".to_string(),
            slug: "medical-intensive".to_string(),
            category: "medical".to_string(),
            duration: "12 months".to_string(),
            mode: CourseMode::Classroom,
            summary: "Biology-first pacing with weekly cumulative tests.".to_string(),
        },
        Course {
            title: "Medical Repeater Batch".to_string(),
            slug: "medical-repeater".to_string(),
            category: "medical".to_string(),
            duration: "10 months".to_string(),
            mode: CourseMode::Classroom,
            summary: "Designed for second attempts: diagnostics first, then targeted drilling."
                .to_string(),
        },
        Course {
            title: "Civil Services Prelims + Mains".to_string(),
            slug: "civil-services-full".to_string(),
            category: "civil-services".to_string(),
            duration: "15 months".to_string(),
            mode: CourseMode::Online,
            summary: "Current affairs digests, essay review, and interview preparation."
                .to_string(),
        },
        Course {
            title: "Foundation Maths & Science".to_string(),
            slug: "foundation-maths-science".to_string(),
            category: "foundation".to_string(),
            duration: "12 months".to_string(),
            mode: CourseMode::SelfPaced,
            summary: "Concept videos and graded worksheets for grades 8-10.".to_string(),
        },
    ]
}
