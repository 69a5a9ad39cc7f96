//! Application shell integration tests
//!
//! End-to-end checks across the crates: theme bootstrap, page composition
//! through the root layout, the mobile screen stack, and the shared backend
//! client with file-backed session persistence.

use app_ui::navigation::app_screens;
use app_ui::page::{courses_page, home_page, Layout, SectionKind};
use app_ui::theme::{ThemeName, ThemeProvider};
use backend_client::session::SESSION_STORAGE_KEY;
use backend_client::{shared, AuthOptions, BackendConfig, Session, UserInfo};
use std::sync::Arc;
use storage::{FileStorage, FileStorageConfig, StorageAdapter};
use tempfile::TempDir;

/// The marketing pages pin the light theme regardless of the stored
/// preference, and re-running the bootstrap is observably idempotent
#[test]
fn test_theme_bootstrap_forces_light() {
    let provider = ThemeProvider::new(ThemeName::Dark);

    provider.force_light();
    assert_eq!(provider.current_name(), ThemeName::Light);

    let revision = provider.revision();
    provider.force_light();
    provider.force_light();
    assert_eq!(provider.current_name(), ThemeName::Light);
    assert_eq!(provider.revision(), revision);
}

/// Both pages render their sections in the literal, fixed order through the
/// root layout
#[test]
fn test_page_composition_through_layout() {
    let layout = Layout::root();

    let home = layout.wrap(home_page());
    let home_kinds: Vec<SectionKind> = home.sections.iter().map(|s| s.kind()).collect();
    assert_eq!(
        home_kinds,
        vec![
            SectionKind::Header,
            SectionKind::HeroCarousel,
            SectionKind::ExamCategories,
            SectionKind::Statistics,
            SectionKind::Testimonials,
            SectionKind::ContentSections,
            SectionKind::Footer,
        ]
    );
    assert_eq!(home.head_title(), "Summit Prep");

    let courses = layout.wrap(courses_page());
    let courses_kinds: Vec<SectionKind> = courses.sections.iter().map(|s| s.kind()).collect();
    assert_eq!(
        courses_kinds,
        vec![
            SectionKind::Header,
            SectionKind::CoursesContent,
            SectionKind::Footer,
        ]
    );
    assert_eq!(courses.head_title(), "Courses | Summit Prep");

    // The courses page lists the full catalog
    match &courses.sections[1] {
        app_ui::page::Section::CoursesContent { courses } => {
            assert_eq!(courses, &app_core::content::course_catalog());
        }
        other => panic!("expected courses content, got {:?}", other.kind()),
    }
}

/// The mobile shell declares a stable screen stack with unique routing keys
#[test]
fn test_mobile_screen_stack() {
    let screens = app_screens();
    assert!(screens.len() >= 5);
    assert_eq!(screens[0].name, "index");

    let mut names: Vec<&str> = screens.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), screens.len());
}

/// A session persisted by one client instance is restored by the next one
/// through the same device-local file
#[tokio::test]
async fn test_session_survives_client_restart() {
    use backend_client::BackendClient;
    use chrono::{Duration, Utc};

    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().join("auth.json");

    let session = Session {
        access_token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
        token_type: "bearer".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
        user: UserInfo {
            id: "user-1".to_string(),
            email: "student@example.com".to_string(),
        },
    };

    // First run: persist a session through the adapter
    {
        let storage = FileStorage::open(FileStorageConfig::new(&storage_path))
            .await
            .unwrap();
        storage
            .set(SESSION_STORAGE_KEY, &serde_json::to_string(&session).unwrap())
            .await
            .unwrap();
    }

    // Second run: a fresh client restores it
    {
        let storage = Arc::new(
            FileStorage::open(FileStorageConfig::new(&storage_path))
                .await
                .unwrap(),
        );
        let config = BackendConfig::new("https://project.backend.example.com", "anon-key")
            .auth(AuthOptions::new(storage));
        let client = BackendClient::new(config).unwrap();

        let restored = client.restore_session().await.unwrap().unwrap();
        assert_eq!(restored.access_token, "access-token");
        assert_eq!(restored.user.email, "student@example.com");
    }
}

/// Exactly one shared client per process; every consumer gets the same
/// instance
#[tokio::test]
async fn test_shared_client_identity() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(
        FileStorage::open(FileStorageConfig::new(temp_dir.path().join("auth.json")))
            .await
            .unwrap(),
    );

    let config = BackendConfig::new("https://project.backend.example.com", "anon-key")
        .auth(AuthOptions::new(storage));

    let first = shared::init(config).unwrap();
    let second = shared::client().unwrap();
    let third = shared::client().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&second, &third));

    // Re-initialization is rejected and leaves the instance untouched
    let err = shared::init(BackendConfig::new("https://other.example.com", "anon"));
    assert!(err.is_err());
    assert_eq!(
        shared::client().unwrap().url(),
        "https://project.backend.example.com"
    );
}
