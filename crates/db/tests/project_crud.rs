//! Integration tests for project CRUD against a real database.
//!
//! Exercises the repository layer:
//! - Create / get / list / delete with owner scoping
//! - Recency ordering
//! - Cascade delete of file rows

use codeforge_db::models::project::CreateProject;
use codeforge_db::models::project_file::FileEntry;
use codeforge_db::models::user::CreateUser;
use codeforge_db::repositories::{ProjectFileRepo, ProjectRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        credits: None,
    }
}

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: Some("A test project".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_starts_as_empty_draft(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("a@example.com"))
        .await
        .unwrap();

    let project = ProjectRepo::create(&pool, user.id, &new_project("My App"))
        .await
        .unwrap();

    assert_eq!(project.name, "My App");
    assert_eq!(project.status, "draft");
    assert_eq!(project.owner_id, user.id);
    assert!(project.deployed_url.is_none());

    let files = ProjectFileRepo::list(&pool, project.id).await.unwrap();
    assert!(files.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_is_owner_scoped(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("owner@example.com"))
        .await
        .unwrap();
    let other = UserRepo::create(&pool, &new_user("other@example.com"))
        .await
        .unwrap();

    let project = ProjectRepo::create(&pool, owner.id, &new_project("Private"))
        .await
        .unwrap();

    assert!(ProjectRepo::find_for_owner(&pool, project.id, owner.id)
        .await
        .unwrap()
        .is_some());
    // A foreign project behaves exactly like a missing one.
    assert!(ProjectRepo::find_for_owner(&pool, project.id, other.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_by_recency(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("a@example.com"))
        .await
        .unwrap();

    let first = ProjectRepo::create(&pool, user.id, &new_project("First"))
        .await
        .unwrap();
    let _second = ProjectRepo::create(&pool, user.id, &new_project("Second"))
        .await
        .unwrap();

    // Touching the older project's files bumps it back to the front.
    ProjectFileRepo::replace_all(
        &pool,
        first.id,
        &[FileEntry {
            filename: "App.jsx".to_string(),
            content: "export default () => null;".to_string(),
        }],
    )
    .await
    .unwrap();

    let listed = ProjectRepo::list_for_owner(&pool, user.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "First");
    assert_eq!(listed[1].name, "Second");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cascades_files(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("a@example.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, user.id, &new_project("Doomed"))
        .await
        .unwrap();
    ProjectFileRepo::replace_all(
        &pool,
        project.id,
        &[FileEntry {
            filename: "App.jsx".to_string(),
            content: "x".to_string(),
        }],
    )
    .await
    .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id, user.id).await.unwrap());

    assert!(ProjectRepo::find_for_owner(&pool, project.id, user.id)
        .await
        .unwrap()
        .is_none());
    let orphans: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM project_files WHERE project_id = $1")
            .bind(project.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(orphans.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_project_reports_false(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("a@example.com"))
        .await
        .unwrap();
    assert!(!ProjectRepo::delete(&pool, 999_999, user.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn claim_artifact_seq_is_monotonic(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("a@example.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, user.id, &new_project("Seq"))
        .await
        .unwrap();

    let first = ProjectRepo::claim_artifact_seq(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    let second = ProjectRepo::claim_artifact_seq(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    // Missing project claims nothing.
    assert!(ProjectRepo::claim_artifact_seq(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_deployed_overwrites_url(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("a@example.com"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, user.id, &new_project("Live"))
        .await
        .unwrap();

    let deployed = ProjectRepo::set_deployed(&pool, project.id, "https://one.codeforge.app")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(deployed.status, "deployed");
    assert_eq!(
        deployed.deployed_url.as_deref(),
        Some("https://one.codeforge.app")
    );

    // Re-deploying replaces the URL and leaves the status in place.
    let redeployed = ProjectRepo::set_deployed(&pool, project.id, "https://two.codeforge.app")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(redeployed.status, "deployed");
    assert_eq!(
        redeployed.deployed_url.as_deref(),
        Some("https://two.codeforge.app")
    );
}
