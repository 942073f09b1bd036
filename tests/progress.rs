mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::common::{Action, Flow, login_demo_action, setup_server, setup_test_db};

async fn seeded_lesson_id(pool: &sqlx::PgPool) -> Uuid {
    sqlx::query_scalar("SELECT id FROM lessons WHERE title = 'Introduction to Integers'")
        .fetch_one(pool)
        .await
        .expect("seeded lesson missing")
}

#[tokio::test]
async fn route_progress_requires_token_test() {
    let db = setup_test_db().await;
    db.seed().await;
    let mut server = setup_server(&db).await;

    Flow::new()
        // no Authorization header at all
        .step(
            Action::new("progress_no_token", "POST", "/api/progress")
                .with_body(json!({ "lessonId": Uuid::new_v4(), "completed": true, "score": 50 }))
                .with_expect(StatusCode::UNAUTHORIZED),
        )
        .step(
            Action::new("progress_list_no_token", "GET", "/api/user/progress")
                .with_expect(StatusCode::UNAUTHORIZED),
        )
        // header present but useless
        .step(
            Action::new("progress_bad_token", "POST", "/api/progress")
                .with_body(json!({ "lessonId": Uuid::new_v4(), "completed": true, "score": 50 }))
                .with_bearer("garbage")
                .with_expect(StatusCode::FORBIDDEN),
        )
        .step(
            Action::new("progress_list_bad_token", "GET", "/api/user/progress")
                .with_bearer("garbage")
                .with_expect(StatusCode::FORBIDDEN),
        )
        .run(&mut server, &db)
        .await;
}

#[tokio::test]
async fn route_progress_upsert_test() {
    let db = setup_test_db().await;
    db.seed().await;
    let mut server = setup_server(&db).await;

    let lesson_id = seeded_lesson_id(&db.pool).await;

    Flow::new()
        .step(login_demo_action().with_save_as("login"))
        .step(
            Action::new("progress_first", "POST", "/api/progress")
                .with_dyn_bearer(|ctx| ctx.token("login"))
                .with_body(json!({ "lessonId": lesson_id, "completed": false, "score": 40 }))
                .assert_body(|body| {
                    let v: Value = serde_json::from_str(body).expect("Invalid body format");
                    assert_eq!(v["score"], 40);
                    assert_eq!(v["completed"], false);
                })
                .with_save_as("first"),
        )
        // same (user, lesson) again: overwrites, never a second row
        .step(
            Action::new("progress_second", "POST", "/api/progress")
                .with_dyn_bearer(|ctx| ctx.token("login"))
                .with_body(json!({ "lessonId": lesson_id, "completed": true, "score": 95 }))
                .assert_body(|body| {
                    let v: Value = serde_json::from_str(body).expect("Invalid body format");
                    assert_eq!(v["score"], 95);
                    assert_eq!(v["completed"], true);
                })
                .with_save_as("second"),
        )
        .step(
            Action::new("progress_list", "GET", "/api/user/progress")
                .with_dyn_bearer(|ctx| ctx.token("login"))
                .assert_body(|body| {
                    let v: Value = serde_json::from_str(body).expect("Invalid body format");
                    let entries = v.as_array().expect("expected a progress array");
                    assert_eq!(entries.len(), 1);
                    assert_eq!(entries[0]["score"], 95);
                    // joined display context comes along
                    assert_eq!(entries[0]["lesson"]["title"], "Introduction to Integers");
                    assert_eq!(
                        entries[0]["lesson"]["subtopic"]["name"],
                        "Numbers & Operations"
                    );
                    assert_eq!(
                        entries[0]["lesson"]["subtopic"]["subject"]["name"],
                        "Mathematics"
                    );
                }),
        )
        .run(&mut server, &db)
        .await;

    // the upsert reused the row
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM progress")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let score: i32 = sqlx::query_scalar("SELECT score FROM progress")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(score, 95);
}

#[tokio::test]
async fn route_progress_score_range_test() {
    let db = setup_test_db().await;
    db.seed().await;
    let mut server = setup_server(&db).await;

    let lesson_id = seeded_lesson_id(&db.pool).await;

    Flow::new()
        .step(login_demo_action().with_save_as("login"))
        .step(
            Action::new("progress_too_high", "POST", "/api/progress")
                .with_dyn_bearer(|ctx| ctx.token("login"))
                .with_body(json!({ "lessonId": lesson_id, "completed": true, "score": 101 }))
                .with_expect(StatusCode::BAD_REQUEST),
        )
        .step(
            Action::new("progress_negative", "POST", "/api/progress")
                .with_dyn_bearer(|ctx| ctx.token("login"))
                .with_body(json!({ "lessonId": lesson_id, "completed": true, "score": -1 }))
                .with_expect(StatusCode::BAD_REQUEST),
        )
        .run(&mut server, &db)
        .await;

    // nothing was stored
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM progress")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
