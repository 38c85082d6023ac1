//! Integration tests for file artifact storage.
//!
//! - Full-replace semantics (exactly the supplied set, in order)
//! - Append positioning for the generation merge path
//! - Filename uniqueness within a project

use codeforge_db::models::project::CreateProject;
use codeforge_db::models::project_file::FileEntry;
use codeforge_db::models::user::CreateUser;
use codeforge_db::repositories::{ProjectFileRepo, ProjectRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn entry(filename: &str, content: &str) -> FileEntry {
    FileEntry {
        filename: filename.to_string(),
        content: content.to_string(),
    }
}

async fn seed_project(pool: &PgPool) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: "files@example.com".to_string(),
            name: "Test User".to_string(),
            credits: None,
        },
    )
    .await
    .unwrap();
    ProjectRepo::create(
        pool,
        user.id,
        &CreateProject {
            name: "Files".to_string(),
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_all_is_a_full_replacement(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    ProjectFileRepo::replace_all(
        &pool,
        project_id,
        &[entry("App.jsx", "v1"), entry("styles.css", "body {}")],
    )
    .await
    .unwrap();

    // Replacing with a different set discards everything not supplied.
    let replaced = ProjectFileRepo::replace_all(
        &pool,
        project_id,
        &[entry("index.html", "<html></html>"), entry("App.jsx", "v2")],
    )
    .await
    .unwrap();
    assert_eq!(replaced.len(), 2);

    let files = ProjectFileRepo::list(&pool, project_id).await.unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["index.html", "App.jsx"]);
    assert_eq!(files[1].content, "v2");
    assert_eq!(files[0].position, 0);
    assert_eq!(files[1].position, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_all_with_empty_set_clears_files(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    ProjectFileRepo::replace_all(&pool, project_id, &[entry("App.jsx", "x")])
        .await
        .unwrap();

    ProjectFileRepo::replace_all(&pool, project_id, &[]).await.unwrap();
    assert!(ProjectFileRepo::list(&pool, project_id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_all_is_idempotent_on_same_input(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let set = [entry("b.jsx", "bee"), entry("a.jsx", "ay")];

    ProjectFileRepo::replace_all(&pool, project_id, &set).await.unwrap();
    ProjectFileRepo::replace_all(&pool, project_id, &set).await.unwrap();

    let files = ProjectFileRepo::list(&pool, project_id).await.unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
    // Exactly the supplied set, in supplied (not lexicographic) order.
    assert_eq!(names, vec!["b.jsx", "a.jsx"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn append_lands_after_existing_files(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    ProjectFileRepo::replace_all(&pool, project_id, &[entry("App.jsx", "entry")])
        .await
        .unwrap();

    let appended = ProjectFileRepo::append(&pool, project_id, "generated_1.jsx", "more")
        .await
        .unwrap();
    assert_eq!(appended.position, 1);

    let files = ProjectFileRepo::list(&pool, project_id).await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].filename, "App.jsx");
    assert_eq!(files[1].filename, "generated_1.jsx");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn append_into_empty_project_takes_position_zero(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let appended = ProjectFileRepo::append(&pool, project_id, "App.jsx", "first")
        .await
        .unwrap();
    assert_eq!(appended.position, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_filename_violates_unique_constraint(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    ProjectFileRepo::append(&pool, project_id, "App.jsx", "one")
        .await
        .unwrap();

    let err = ProjectFileRepo::append(&pool, project_id, "App.jsx", "two")
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}
