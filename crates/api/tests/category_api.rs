//! HTTP-level integration tests for the read-only `/categories` and
//! `/talents` endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, build_test_app, get};
use sqlx::PgPool;

use callsheet_db::models::category::CreateCategory;
use callsheet_db::models::talent::{CreateTalent, CreateTalentCategory};
use callsheet_db::models::template::{
    CreateCheckInTemplate, CreatePlanTemplateNode, CreateTalentDemandTemplate,
};
use callsheet_db::repositories::{CategoryRepo, TalentCategoryRepo, TalentRepo, TemplateRepo};

// ---------------------------------------------------------------------------
// Test: GET /categories and /categories/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_and_get_categories(pool: PgPool) {
    let concert = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Concert".to_string(),
            default_location: Some("Main Hall".to_string()),
            description: None,
        },
    )
    .await
    .unwrap();
    CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Conference".to_string(),
            default_location: None,
            description: Some("Multi-day".to_string()),
        },
    )
    .await
    .unwrap();
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get(app.clone(), &format!("/api/v1/categories/{}", concert.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Concert");
    assert_eq!(json["data"]["default_location"], "Main Hall");

    let response = get(app, "/api/v1/categories/9999").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: GET /categories/{id}/templates returns all three collections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn template_bundle_exposes_all_three_collections(pool: PgPool) {
    let talent = TalentRepo::create(
        &pool,
        &CreateTalent {
            name: "Rigger".to_string(),
            category_id: None,
        },
    )
    .await
    .unwrap();
    let category = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Concert".to_string(),
            default_location: None,
            description: None,
        },
    )
    .await
    .unwrap();

    TemplateRepo::create_demand_template(
        &pool,
        &CreateTalentDemandTemplate {
            category_id: category.id,
            talent_id: talent.id,
            required_count: 4,
            note: None,
        },
    )
    .await
    .unwrap();
    TemplateRepo::create_plan_template_node(
        &pool,
        &CreatePlanTemplateNode {
            category_id: category.id,
            kind: "heading".to_string(),
            name: "Setup".to_string(),
            duration_minutes: None,
            parent_id: None,
            sort_order: Some(0),
        },
    )
    .await
    .unwrap();
    TemplateRepo::create_check_in_template(
        &pool,
        &CreateCheckInTemplate {
            category_id: category.id,
            name: "Crew call".to_string(),
            note: None,
            minutes_before_start: 60,
            sort_order: Some(0),
        },
    )
    .await
    .unwrap();
    let app = build_test_app(pool);

    let response = get(app.clone(), &format!("/api/v1/categories/{}/templates", category.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["demand_templates"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["demand_templates"][0]["required_count"], 4);
    assert_eq!(json["data"]["plan_template_nodes"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["check_in_templates"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/categories/9999/templates").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: GET /talents computes taxonomy display paths
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn talents_list_includes_computed_paths(pool: PgPool) {
    let sound = TalentCategoryRepo::create(
        &pool,
        &CreateTalentCategory {
            name: "Sound".to_string(),
            parent_id: None,
        },
    )
    .await
    .unwrap();
    let live = TalentCategoryRepo::create(
        &pool,
        &CreateTalentCategory {
            name: "Live Production".to_string(),
            parent_id: Some(sound.id),
        },
    )
    .await
    .unwrap();
    TalentRepo::create(
        &pool,
        &CreateTalent {
            name: "FOH Sound".to_string(),
            category_id: Some(live.id),
        },
    )
    .await
    .unwrap();
    TalentRepo::create(
        &pool,
        &CreateTalent {
            name: "Runner".to_string(),
            category_id: None,
        },
    )
    .await
    .unwrap();
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/talents").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    let foh = items.iter().find(|t| t["name"] == "FOH Sound").unwrap();
    assert_eq!(foh["category_path"], "Sound → Live Production");

    let runner = items.iter().find(|t| t["name"] == "Runner").unwrap();
    assert_eq!(runner["category_path"], "");
}
