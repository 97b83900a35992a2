//! Integration tests for staff assignments and fulfillment inputs.
//!
//! - Uniqueness invariant: one (production, person, talent name) triple
//! - Referential integrity on bogus production/person references
//! - Update/delete behavior for missing rows
//! - End-to-end fulfillment over live rows (derived, never persisted)

use chrono::{TimeZone, Utc};
use sqlx::PgPool;

use callsheet_core::fulfillment::{self, AssignmentStatus};
use callsheet_db::models::assignment::{NewStaffAssignment, UpdateStaffAssignment};
use callsheet_db::models::demand::NewTalentDemand;
use callsheet_db::models::person::CreatePerson;
use callsheet_db::models::production::CreateProduction;
use callsheet_db::repositories::{AssignmentRepo, DemandRepo, PersonRepo, ProductionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_production(pool: &PgPool, name: &str) -> i64 {
    ProductionRepo::create(
        pool,
        &CreateProduction {
            name: name.to_string(),
            starts_at: Utc.with_ymd_and_hms(2025, 12, 1, 19, 0, 0).unwrap(),
            description: None,
            location: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_person(pool: &PgPool, name: &str) -> i64 {
    PersonRepo::create(
        pool,
        &CreatePerson {
            full_name: name.to_string(),
            email: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn assignment(
    production_id: i64,
    person_id: i64,
    talent_name: &str,
    status: AssignmentStatus,
) -> NewStaffAssignment {
    NewStaffAssignment {
        production_id,
        person_id,
        talent_id: None,
        talent_name: talent_name.to_string(),
        talent_category_path: "Sound → Live Production".to_string(),
        note: None,
        status,
    }
}

fn demand(production_id: i64, talent_name: &str, required: i32) -> NewTalentDemand {
    NewTalentDemand {
        production_id,
        talent_id: None,
        talent_name: talent_name.to_string(),
        talent_category_path: "Sound → Live Production".to_string(),
        required_count: required,
        note: None,
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint()
                    == Some("uq_staff_assignments_production_person_talent")
    )
}

// ---------------------------------------------------------------------------
// Test: Uniqueness invariant
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_assignment_rejected(pool: PgPool) {
    let production_id = seed_production(&pool, "Gala").await;
    let person_id = seed_person(&pool, "Alex Rivera").await;

    AssignmentRepo::create(
        &pool,
        &assignment(production_id, person_id, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap();

    // Same triple again: rejected, not merged.
    let err = AssignmentRepo::create(
        &pool,
        &assignment(production_id, person_id, "FOH Sound", AssignmentStatus::Confirmed),
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err));

    let rows = AssignmentRepo::list_by_production(&pool, production_id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, "planned");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_same_person_different_talent_allowed(pool: PgPool) {
    let production_id = seed_production(&pool, "Gala").await;
    let person_id = seed_person(&pool, "Alex Rivera").await;

    AssignmentRepo::create(
        &pool,
        &assignment(production_id, person_id, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap();
    AssignmentRepo::create(
        &pool,
        &assignment(production_id, person_id, "Monitor Tech", AssignmentStatus::Planned),
    )
    .await
    .unwrap();

    let rows = AssignmentRepo::list_by_production(&pool, production_id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_same_triple_on_other_production_allowed(pool: PgPool) {
    let first = seed_production(&pool, "Gala").await;
    let second = seed_production(&pool, "Matinee").await;
    let person_id = seed_person(&pool, "Alex Rivera").await;

    AssignmentRepo::create(
        &pool,
        &assignment(first, person_id, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap();
    AssignmentRepo::create(
        &pool,
        &assignment(second, person_id, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Test: Referential integrity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_requires_existing_production_and_person(pool: PgPool) {
    let production_id = seed_production(&pool, "Gala").await;
    let person_id = seed_person(&pool, "Alex Rivera").await;

    let err = AssignmentRepo::create(
        &pool,
        &assignment(9999, person_id, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap_err();
    assert!(matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503")
    ));

    let err = AssignmentRepo::create(
        &pool,
        &assignment(production_id, 9999, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap_err();
    assert!(matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503")
    ));
}

// ---------------------------------------------------------------------------
// Test: Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_note_and_status(pool: PgPool) {
    let production_id = seed_production(&pool, "Gala").await;
    let person_id = seed_person(&pool, "Alex Rivera").await;

    let created = AssignmentRepo::create(
        &pool,
        &assignment(production_id, person_id, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap();

    let updated = AssignmentRepo::update(
        &pool,
        created.id,
        &UpdateStaffAssignment {
            note: Some("confirmed by phone".to_string()),
            status: Some("confirmed".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("row exists");

    assert_eq!(updated.note.as_deref(), Some("confirmed by phone"));
    assert_eq!(updated.status, "confirmed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_missing_assignment(pool: PgPool) {
    let updated = AssignmentRepo::update(
        &pool,
        424242,
        &UpdateStaffAssignment {
            note: None,
            status: Some("cancelled".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(updated.is_none());

    assert!(!AssignmentRepo::delete(&pool, 424242).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_assignment_leaves_siblings(pool: PgPool) {
    let production_id = seed_production(&pool, "Gala").await;
    let alex = seed_person(&pool, "Alex Rivera").await;
    let sam = seed_person(&pool, "Sam Chen").await;

    let first = AssignmentRepo::create(
        &pool,
        &assignment(production_id, alex, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap();
    AssignmentRepo::create(
        &pool,
        &assignment(production_id, sam, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap();

    assert!(AssignmentRepo::delete(&pool, first.id).await.unwrap());

    let rows = AssignmentRepo::list_by_production(&pool, production_id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].person_id, sam);
}

// ---------------------------------------------------------------------------
// Test: Fulfillment over live rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fulfillment_recomputed_from_live_rows(pool: PgPool) {
    let production_id = seed_production(&pool, "Gala").await;
    let alex = seed_person(&pool, "Alex Rivera").await;
    let sam = seed_person(&pool, "Sam Chen").await;

    DemandRepo::insert(&pool, &demand(production_id, "FOH Sound", 2))
        .await
        .unwrap();

    AssignmentRepo::create(
        &pool,
        &assignment(production_id, alex, "FOH Sound", AssignmentStatus::Planned),
    )
    .await
    .unwrap();
    let cancelled = AssignmentRepo::create(
        &pool,
        &assignment(production_id, sam, "FOH Sound", AssignmentStatus::Cancelled),
    )
    .await
    .unwrap();

    let demands = DemandRepo::list_by_production(&pool, production_id)
        .await
        .unwrap();
    let assignments = AssignmentRepo::list_by_production(&pool, production_id)
        .await
        .unwrap();

    let slots = fulfillment::compute_fulfillment(
        &demands.iter().map(|d| d.to_slot()).collect::<Vec<_>>(),
        &assignments.iter().map(|a| a.to_record()).collect::<Vec<_>>(),
    );
    assert_eq!(slots.len(), 1);
    // Cancelled assignment is listed but does not fill the slot.
    assert_eq!(slots[0].filled_count, 1);
    assert!(!slots[0].is_filled);
    assert_eq!(slots[0].assignment_ids.len(), 2);

    // Removing the cancelled row and re-reading changes nothing persisted:
    // fulfillment is always derived.
    AssignmentRepo::delete(&pool, cancelled.id).await.unwrap();
    let assignments = AssignmentRepo::list_by_production(&pool, production_id)
        .await
        .unwrap();
    let slots = fulfillment::compute_fulfillment(
        &demands.iter().map(|d| d.to_slot()).collect::<Vec<_>>(),
        &assignments.iter().map(|a| a.to_record()).collect::<Vec<_>>(),
    );
    assert_eq!(slots[0].filled_count, 1);
    assert_eq!(slots[0].assignment_ids.len(), 1);
}
