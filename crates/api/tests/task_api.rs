//! HTTP-level integration tests for the task endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_returns_201_and_echoes_task(pool: PgPool) {
    let project_id = common::seed_project(&pool, "P").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/tasks/create",
        common::task_body(project_id, "Write spec", "2030-05-01"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let task = body_json(response).await["task"].clone();
    assert!(task["id"].is_number());
    assert_eq!(task["projectId"], project_id);
    assert_eq!(task["name"], "Write spec");
    assert_eq!(task["description"], "Some *markdown*");
    assert_eq!(task["deadline"], "2030-05-01");
    assert_eq!(task["status"], "IN_PROGRESS");
    assert_eq!(task["authorId"], "ada@example.com");
    assert_eq!(task["authorName"], "ada");
    assert_eq!(task["authorAvatar"], "https://img.example.com/ada.png");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_for_missing_project_returns_500_with_raw_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/tasks/create",
        common::task_body(999_999, "Orphan", "2030-05-01"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "DATABASE_ERROR");
    assert!(json["error"].as_str().unwrap().contains("fk_tasks_project"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_accepts_blank_name(pool: PgPool) {
    // Name validation happens client-side; the server stores what it gets.
    let project_id = common::seed_project(&pool, "P").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/tasks/create",
        common::task_body(project_id, "", "2030-05-01"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_without_deadline_returns_500(pool: PgPool) {
    let project_id = common::seed_project(&pool, "P").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/tasks/create",
        serde_json::json!({"id": project_id, "task": {"name": "x"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BODY");
    assert!(json["error"].as_str().unwrap().contains("missing field `deadline`"));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_task(pool: PgPool) {
    let project_id = common::seed_project(&pool, "P").await;
    let task = common::create_task(&pool, project_id, "Find me", "2030-01-01").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/tasks/{}", task["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Find me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_applies_only_given_fields(pool: PgPool) {
    let project_id = common::seed_project(&pool, "P").await;
    let task = common::create_task(&pool, project_id, "Before", "2030-01-01").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/tasks/update/{}", task["id"]),
        serde_json::json!({"deadline": "2030-02-02", "status": "COMPLETED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await["updatedTask"].clone();
    assert_eq!(updated["id"], task["id"]);
    assert_eq!(updated["name"], "Before");
    assert_eq!(updated["deadline"], "2030-02-02");
    assert_eq!(updated["status"], "COMPLETED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_rejects_unknown_status(pool: PgPool) {
    let project_id = common::seed_project(&pool, "P").await;
    let task = common::create_task(&pool, project_id, "T", "2030-01-01").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/tasks/update/{}", task["id"]),
        serde_json::json!({"status": "DONE"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INVALID_BODY");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/tasks/{}", task["id"])).await;
    assert_eq!(body_json(response).await["status"], "IN_PROGRESS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_null_description_clears_it(pool: PgPool) {
    let project_id = common::seed_project(&pool, "P").await;
    let task = common::create_task(&pool, project_id, "T", "2030-01-01").await;
    assert_eq!(task["description"], "Some *markdown*");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/tasks/update/{}", task["id"]),
        serde_json::json!({"description": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await["updatedTask"].clone();
    assert!(updated["description"].is_null());
    assert_eq!(updated["name"], "T");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_task_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/tasks/update/999999",
        serde_json::json!({"name": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_task_returns_deleted_task_and_removes_exactly_one(pool: PgPool) {
    let project_id = common::seed_project(&pool, "P").await;
    let keep = common::create_task(&pool, project_id, "Keep", "2030-01-01").await;
    let gone = common::create_task(&pool, project_id, "Gone", "2030-01-01").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/tasks/delete/{}", gone["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deletedTask"]["id"], gone["id"]);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects/{project_id}/tasks")).await;
    let json = body_json(response).await;
    let tasks = json.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], keep["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_task_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/tasks/delete/999999").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Entity not found: Task with id 999999");
}
