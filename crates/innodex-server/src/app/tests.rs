use super::create_router;
use crate::data::seed;
use crate::db;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use innodex_test_helpers::{SqliteDb, TestDb};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{Value, json};
use test_log::test;
use tower::ServiceExt;
use url::Url;

struct TestApp {
    router: Router,
    // Dropping it deletes the database file
    _db: SqliteDb,
}

async fn setup() -> TestApp {
    let db = SqliteDb::new().unwrap();
    db::migration(&Url::parse(&db.db_uri()).unwrap()).unwrap();
    let conn: DatabaseConnection = Database::connect(db.db_uri().as_ref()).await.unwrap();
    seed::seed_if_empty(&conn, seed::load_questions(None).await.unwrap())
        .await
        .unwrap();
    TestApp {
        router: create_router(conn, &[]).unwrap(),
        _db: db,
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &TestApp, body: &Value) -> (StatusCode, Value) {
    let request = Request::post("/api/v0/assessments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn submission(email: &str, responses: Value) -> Value {
    json!({
        "userData": {"name": "Robin", "email": email, "company": "Acme", "companySize": "10-50"},
        "responses": responses
    })
}

#[test(tokio::test)]
async fn test_health_and_status() {
    let app = setup().await;
    assert_eq!(get(&app, "/health").await, (StatusCode::OK, json!({"status": "ok"})));
    assert_eq!(
        get(&app, "/api/v0/status").await,
        (StatusCode::OK, json!({"database": "ok"}))
    );
}

#[test(tokio::test)]
async fn test_list_questions() {
    let app = setup().await;
    let (status, body) = get(&app, "/api/v0/questions").await;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 8);
    assert_eq!(questions[0]["id"], json!(1));
    assert_eq!(questions[0]["category"], json!("Problem Identification"));
    assert_eq!(questions[3]["category"], json!("Collaboration"));
    assert_eq!(questions[7]["maxScore"], json!(5));
}

#[test(tokio::test)]
async fn test_submit_and_read_back() {
    let app = setup().await;

    let (status, body) = post(
        &app,
        &submission("robin@example.com", json!({"1": 4, "2": 5, "3": 5, "4": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["user"]["email"], json!("robin@example.com"));
    assert_eq!(body["user"]["companySize"], json!("10-50"));
    let assessment = &body["assessment"];
    assert_eq!(assessment["totalScore"], json!(18));
    assert_eq!(assessment["averageScore"], json!(4.5));
    assert_eq!(assessment["category"], json!("Advanced"));
    assert_eq!(
        assessment["categoryScores"],
        json!({
            "Collaboration": {"score": 4, "average": 4.0},
            "Problem Identification": {"score": 14, "average": 4.67}
        })
    );

    let id = assessment["id"].as_str().unwrap().to_owned();
    let (status, details) = get(&app, &format!("/api/v0/assessments/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["id"], json!(id));
    assert_eq!(details["user"]["name"], json!("Robin"));
    let answers = details["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 4);
    assert_eq!(answers[3]["value"], json!(4));
    assert_eq!(answers[3]["question"]["category"], json!("Collaboration"));

    let (status, report) = get(&app, &format!("/api/v0/assessments/{id}/report")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["overallScore"], json!(9.0));
    assert_eq!(report["category"], json!("Advanced"));
    assert_eq!(report["categoryScores"][0]["name"], json!("Collaboration"));
    assert_eq!(report["categoryScores"][0]["maxScore"], json!(5));
    assert_eq!(report["categoryScores"][0]["percentage"], json!(80.0));
    assert_eq!(report["categoryScores"][1]["percentage"], json!(93.33));
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 2);
}

#[test(tokio::test)]
async fn test_returning_user_keeps_profile() {
    let app = setup().await;
    let (_, first) = post(&app, &submission("robin@example.com", json!({"1": 1}))).await;

    let mut second = submission("robin@example.com", json!({"2": 3}));
    second["userData"]["name"] = json!("Someone Else");
    let (status, second) = post(&app, &second).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["user"]["id"], second["user"]["id"]);
    assert_eq!(second["user"]["name"], json!("Robin"));
    assert_ne!(first["assessment"]["id"], second["assessment"]["id"]);
}

#[test(tokio::test)]
async fn test_unknown_question_is_rejected() {
    let app = setup().await;
    let (status, body) = post(&app, &submission("robin@example.com", json!({"1": 4, "99": 2, "42": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("unknown_question"));
    assert_eq!(body["data"]["questionIds"], json!([42, 99]));

    // Nothing was stored, so the address is still free for a fresh profile
    let mut retry = submission("robin@example.com", json!({"1": 4}));
    retry["userData"]["name"] = json!("Robin Again");
    let (status, body) = post(&app, &retry).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], json!("Robin Again"));
}

#[test(tokio::test)]
async fn test_invalid_submissions() {
    let app = setup().await;

    let cases = [
        submission("", json!({"1": 4})),
        submission("not-an-address", json!({"1": 4})),
        submission("robin@example.com", json!({})),
        submission("robin@example.com", json!({"one": 4})),
        submission("robin@example.com", json!({"1": 6})),
        json!({"userData": {"email": "robin@example.com"}, "responses": {"1": 4}}),
        json!({"userData": {"name": "Robin", "email": "robin@example.com"}, "responses": {"1": -1}}),
    ];
    for case in cases {
        let (status, body) = post(&app, &case).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert_eq!(body["error"], json!("invalid_request"), "{case}");
    }

    let request = Request::post("/api/v0/assessments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_request"));
}

#[test(tokio::test)]
async fn test_unknown_assessment() {
    let app = setup().await;

    let (status, body) = get(&app, "/api/v0/assessments/6f1c1c55-4a8e-4d0b-9f55-33c8f2b7c1aa").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("not_found"));

    let (status, _) = get(&app, "/api/v0/assessments/6f1c1c55-4a8e-4d0b-9f55-33c8f2b7c1aa/report").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/api/v0/assessments/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_request"));
}
