//! Integration tests for the record store.
//!
//! Exercises the repository layer against a throw-away SQLite database:
//! - Project create / read / list / partial update / delete
//! - Child inserts and per-project listing
//! - Cascade delete behaviour
//! - Foreign key violations

use assert_matches::assert_matches;
use foundry_db::models::document::CreateDocument;
use foundry_db::models::manufacturing_plan::CreateManufacturingPlan;
use foundry_db::models::material::CreateMaterial;
use foundry_db::models::milestone::CreateMilestone;
use foundry_db::models::project::{CreateProject, UpdateProject};
use foundry_db::models::team_member::CreateTeamMember;
use foundry_db::repositories::{
    DocumentRepo, ManufacturingPlanRepo, MaterialRepo, MilestoneRepo, ProjectRepo, TeamMemberRepo,
};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        ..Default::default()
    }
}

fn new_milestone(title: &str) -> CreateMilestone {
    CreateMilestone {
        title: title.to_string(),
        ..Default::default()
    }
}

fn new_material(name: &str, quantity: Option<i64>) -> CreateMaterial {
    CreateMaterial {
        name: name.to_string(),
        quantity,
        ..Default::default()
    }
}

/// Insert one row of every child kind for `project_id`.
async fn seed_children(pool: &SqlitePool, project_id: i64) {
    MilestoneRepo::create(pool, project_id, &new_milestone("Design"))
        .await
        .unwrap();
    MaterialRepo::create(pool, project_id, &new_material("Steel", Some(10)))
        .await
        .unwrap();
    DocumentRepo::create(
        pool,
        project_id,
        &CreateDocument {
            title: "Drawings".into(),
            file_path: Some("uploads/1-abc.pdf".into()),
            status: None,
        },
    )
    .await
    .unwrap();
    TeamMemberRepo::create(
        pool,
        project_id,
        &CreateTeamMember {
            name: "Ada".into(),
            role: Some("Engineer".into()),
            email: None,
        },
    )
    .await
    .unwrap();
    ManufacturingPlanRepo::create(
        pool,
        project_id,
        &CreateManufacturingPlan {
            title: "Batch 1".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_get_returns_supplied_fields(pool: SqlitePool) {
    let input = CreateProject {
        name: "Bridge A".into(),
        description: Some("Pedestrian bridge".into()),
        start_date: Some("2025-03-01".into()),
        end_date: Some("2025-09-30".into()),
        status: Some("planning".into()),
        cover_image: Some("uploads/1-cover.png".into()),
    };
    let created = ProjectRepo::create(&pool, &input).await.unwrap();
    assert!(created.id > 0);

    let fetched = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Bridge A");
    assert_eq!(fetched.description.as_deref(), Some("Pedestrian bridge"));
    assert_eq!(fetched.start_date.as_deref(), Some("2025-03-01"));
    assert_eq!(fetched.end_date.as_deref(), Some("2025-09-30"));
    assert_eq!(fetched.status.as_deref(), Some("planning"));
    assert_eq!(fetched.cover_image.as_deref(), Some("uploads/1-cover.png"));
    assert_eq!(fetched.created_at, created.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_project_returns_none(pool: SqlitePool) {
    assert!(ProjectRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(!ProjectRepo::exists(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_names_are_allowed(pool: SqlitePool) {
    let a = ProjectRepo::create(&pool, &new_project("Same")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("Same")).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_newest_first(pool: SqlitePool) {
    let first = ProjectRepo::create(&pool, &new_project("First")).await.unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Second")).await.unwrap();
    let third = ProjectRepo::create(&pool, &new_project("Third")).await.unwrap();

    let ids: Vec<i64> = ProjectRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_without_cover_preserves_existing_path(pool: SqlitePool) {
    let created = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Covered".into(),
            cover_image: Some("uploads/1-original.png".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            name: Some("Renamed".into()),
            status: Some("active".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("project should exist");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.status.as_deref(), Some("active"));
    assert_eq!(updated.cover_image.as_deref(), Some("uploads/1-original.png"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_with_cover_replaces_path(pool: SqlitePool) {
    let created = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Covered".into(),
            cover_image: Some("uploads/1-original.png".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            cover_image: Some("uploads/2-new.png".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Covered");
    assert_eq!(updated.cover_image.as_deref(), Some("uploads/2-new.png"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_project_returns_none(pool: SqlitePool) {
    let result = ProjectRepo::update(
        &pool,
        424_242,
        &UpdateProject {
            name: Some("Ghost".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Children
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_children_listed_in_insertion_order(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Ordered")).await.unwrap();

    for title in ["Design", "Build", "Inspect"] {
        MilestoneRepo::create(&pool, project.id, &new_milestone(title))
            .await
            .unwrap();
    }

    let titles: Vec<String> = MilestoneRepo::list_by_project(&pool, project.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, vec!["Design", "Build", "Inspect"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_children_are_scoped_to_their_project(pool: SqlitePool) {
    let a = ProjectRepo::create(&pool, &new_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("B")).await.unwrap();

    MaterialRepo::create(&pool, a.id, &new_material("Steel", Some(10)))
        .await
        .unwrap();

    let for_a = MaterialRepo::list_by_project(&pool, a.id).await.unwrap();
    assert_eq!(for_a.len(), 1);
    assert_eq!(for_a[0].quantity, Some(10));
    assert!(MaterialRepo::list_by_project(&pool, b.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_children_of_empty_project_is_empty(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Empty")).await.unwrap();

    assert!(MilestoneRepo::list_by_project(&pool, project.id).await.unwrap().is_empty());
    assert!(MaterialRepo::list_by_project(&pool, project.id).await.unwrap().is_empty());
    assert!(DocumentRepo::list_by_project(&pool, project.id).await.unwrap().is_empty());
    assert!(TeamMemberRepo::list_by_project(&pool, project.id).await.unwrap().is_empty());
    assert!(ManufacturingPlanRepo::list_by_project(&pool, project.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_document_gets_upload_timestamp(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Docs")).await.unwrap();
    let doc = DocumentRepo::create(
        &pool,
        project.id,
        &CreateDocument {
            title: "Datasheet".into(),
            file_path: None,
            status: Some("draft".into()),
        },
    )
    .await
    .unwrap();

    assert_eq!(doc.file_path, None);
    assert!(doc.uploaded_at >= project.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_child_insert_for_missing_project_is_fk_violation(pool: SqlitePool) {
    let err = MilestoneRepo::create(&pool, 999_999, &new_milestone("Orphan"))
        .await
        .unwrap_err();
    assert!(is_foreign_key_violation(&err), "unexpected error: {err}");

    let err = TeamMemberRepo::create(
        &pool,
        999_999,
        &CreateTeamMember {
            name: "Nobody".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(is_foreign_key_violation(&err), "unexpected error: {err}");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_single_child(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Trim")).await.unwrap();
    let milestone = MilestoneRepo::create(&pool, project.id, &new_milestone("Drop me"))
        .await
        .unwrap();

    assert!(MilestoneRepo::delete(&pool, milestone.id).await.unwrap());
    assert!(!MilestoneRepo::delete(&pool, milestone.id).await.unwrap());
    assert_matches!(MilestoneRepo::find_by_id(&pool, milestone.id).await, Ok(None));
}

// ---------------------------------------------------------------------------
// Cascade delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_cascade_delete_project(pool: SqlitePool) {
    let doomed = ProjectRepo::create(&pool, &new_project("Doomed")).await.unwrap();
    let survivor = ProjectRepo::create(&pool, &new_project("Survivor")).await.unwrap();
    seed_children(&pool, doomed.id).await;
    seed_children(&pool, survivor.id).await;

    assert!(ProjectRepo::delete(&pool, doomed.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, doomed.id).await.unwrap().is_none());

    // Every child table is empty for the deleted project...
    assert!(MilestoneRepo::list_by_project(&pool, doomed.id).await.unwrap().is_empty());
    assert!(MaterialRepo::list_by_project(&pool, doomed.id).await.unwrap().is_empty());
    assert!(DocumentRepo::list_by_project(&pool, doomed.id).await.unwrap().is_empty());
    assert!(TeamMemberRepo::list_by_project(&pool, doomed.id).await.unwrap().is_empty());
    assert!(ManufacturingPlanRepo::list_by_project(&pool, doomed.id)
        .await
        .unwrap()
        .is_empty());

    // ...and untouched for the other one.
    assert_eq!(MilestoneRepo::list_by_project(&pool, survivor.id).await.unwrap().len(), 1);
    assert_eq!(DocumentRepo::list_by_project(&pool, survivor.id).await.unwrap().len(), 1);

    // Deleting again reports nothing removed.
    assert!(!ProjectRepo::delete(&pool, doomed.id).await.unwrap());
}
