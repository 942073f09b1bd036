mod common;

use axum::http::StatusCode;
use learnhub::auth::process_token;
use learnhub::model::seed::{DEMO_EMAIL, DEMO_NAME};
use serde_json::Value;

use crate::common::{
    Action, Flow, login_action, login_demo_action, register_action, setup_server, setup_test_db,
};

// the value in config.toml, which the test server reads
static TEST_JWT_SECRET: &str = "supersecret";

#[tokio::test]
async fn route_register_test() {
    let db = setup_test_db().await;
    let mut server = setup_server(&db).await;

    Flow::new()
        .step(
            register_action("foobar@example.com", "foobaz", "Foo Bar")
                .assert_body(|body| {
                    let v: Value = serde_json::from_str(body).expect("Invalid body format");
                    assert!(v["token"].as_str().is_some_and(|t| !t.is_empty()));
                    assert_eq!(v["user"]["email"], "foobar@example.com");
                    assert_eq!(v["user"]["name"], "Foo Bar");
                    // the hash must never cross the wire
                    assert!(v["user"].get("password").is_none());
                    assert!(v["user"].get("passwordHash").is_none());
                })
                .with_save_as("first")
                .with_expect(StatusCode::OK),
        )
        // registering the same email twice fails with a generic 400
        .step(
            register_action("foobar@example.com", "other-password", "Somebody Else")
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| {
                    let v: Value = serde_json::from_str(body).expect("Invalid body format");
                    // same client message as any other bad registration
                    assert_eq!(
                        v["message"],
                        "Registration error, user already exists or input is invalid."
                    );
                }),
        )
        // the first account's token still works on a protected route
        .step(
            Action::new("progress_probe", "GET", "/api/user/progress")
                .with_dyn_bearer(|ctx| ctx.token("first"))
                .with_expect(StatusCode::OK),
        )
        // malformed input fails the same way
        .step(
            register_action("not-an-email", "pw", "No At Sign")
                .with_expect(StatusCode::BAD_REQUEST),
        )
        .run(&mut server, &db)
        .await;
}

#[tokio::test]
async fn route_login_test() {
    let db = setup_test_db().await;
    db.seed().await;
    let mut server = setup_server(&db).await;

    Flow::new()
        .step(
            login_demo_action()
                .assert_body(|body| {
                    let v: Value = serde_json::from_str(body).expect("Invalid body format");
                    assert_eq!(v["user"]["email"], DEMO_EMAIL);
                    assert_eq!(v["user"]["name"], DEMO_NAME);

                    // claims must decode to the same identity
                    let token = v["token"].as_str().expect("token missing");
                    let data = process_token(token, TEST_JWT_SECRET).expect("token must verify");
                    assert_eq!(data.claims.sub, v["user"]["id"].as_str().unwrap());
                    assert_eq!(data.claims.email, DEMO_EMAIL);
                })
                .with_expect(StatusCode::OK),
        )
        .run(&mut server, &db)
        .await;
}

#[tokio::test]
async fn route_login_uniform_failure_test() {
    let db = setup_test_db().await;
    db.seed().await;
    let mut server = setup_server(&db).await;

    // wrong password and unknown email must be indistinguishable
    let ctx = Flow::new()
        .step(
            login_action(DEMO_EMAIL, "WRONGPASSWORD")
                .with_expect(StatusCode::UNAUTHORIZED)
                .with_save_as("wrong_password"),
        )
        .step(
            login_action("nobody@example.com", "password123")
                .with_expect(StatusCode::UNAUTHORIZED)
                .with_save_as("unknown_email"),
        )
        .run(&mut server, &db)
        .await;

    assert_eq!(ctx.get("wrong_password"), ctx.get("unknown_email"));
}
