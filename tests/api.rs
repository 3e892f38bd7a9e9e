use aussieeat_backend_rs::{
    app::App,
    types::{database::DatabaseConnection, AppContext, AppEnvironment, Context},
};
use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

fn server_with(
    pool: PgPool,
    environment: AppEnvironment,
    cors_allowed_origins: Option<Vec<String>>,
) -> TestServer {
    let ctx = Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            environment,
            port: 8000,
            cors_allowed_origins,
        },
        db_conn: DatabaseConnection { pool },
    };

    TestServer::new(App::from_context(Arc::new(ctx)).router()).unwrap()
}

fn server(pool: PgPool) -> TestServer {
    server_with(pool, AppEnvironment::Development, None)
}

/// A pool that never connects, for routes that do not touch the database.
fn unconnected_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/aussieeat")
        .unwrap()
}

async fn allowed_origin(server: &TestServer, origin: &'static str) -> Option<HeaderValue> {
    let response = server
        .get("/api/health")
        .add_header(header::ORIGIN, HeaderValue::from_static(origin))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .cloned()
}

async fn register(server: &TestServer, email: &str, role: Option<&str>) -> i64 {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": email, "password": "password1", "role": role }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

async fn create_order(
    server: &TestServer,
    maker_id: i64,
    eater_id: Option<i64>,
    order_code: &str,
) -> Value {
    let response = server
        .post("/api/orders")
        .json(&order_payload(maker_id, eater_id, order_code))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

async fn create_meal(server: &TestServer, maker_id: i64, title: &str) -> Value {
    let response = server
        .post("/api/meals")
        .json(&json!({
            "maker_id": maker_id,
            "title": title,
            "description": "Made to order",
            "price": 12.5,
            "image_data": "data:image/png;base64,AAAA"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

async fn create_review(server: &TestServer, order_id: &Value, rating: i32) -> Value {
    let response = server
        .post("/api/reviews")
        .json(&json!({ "order_id": order_id, "rating": rating, "comment": "Tasty" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

fn order_payload(maker_id: i64, eater_id: Option<i64>, order_code: &str) -> Value {
    json!({
        "maker_id": maker_id,
        "eater_id": eater_id,
        "order_code": order_code,
        "eater_name": "Alex",
        "meal_name": "Laksa",
        "image_data": "data:image/png;base64,AAAA",
        "price": 9.5
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let server = server(unconnected_pool());

    let response = server.get("/api/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn marketplace_flow(pool: PgPool) {
    let server = server(pool);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@x.com", "password": "password1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let eater = response.json::<Value>();
    assert_eq!(eater["role"], "eater");
    let eater_id = eater["id"].as_i64().unwrap();

    let maker_id = register(&server, "b@x.com", Some("maker")).await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "b@x.com", "password": "password1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["role"], "maker");

    let response = server
        .post("/api/meals")
        .json(&json!({
            "maker_id": maker_id,
            "title": "Laksa",
            "description": "Coconut curry noodle soup",
            "price": 9.5,
            "image_data": "data:image/png;base64,AAAA"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["price"], 9.5);

    let order = create_order(&server, maker_id, Some(eater_id), "ORD1").await;
    assert_eq!(order["status"], "pending");

    let response = server
        .post("/api/reviews")
        .json(&json!({ "order_id": order["id"], "rating": 5, "comment": "Delicious" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let review_id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/reviews/{}", review_id))
        .json(&json!({ "reply": "thanks" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["reply"], "thanks");

    let response = server
        .post("/api/reviews")
        .json(&json!({ "order_id": order["id"], "rating": 4, "comment": "Again" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = server
        .get(&format!("/api/eater/orders?eater_id={}", eater_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let orders = response.json::<Value>();
    assert_eq!(orders[0]["order_code"], "ORD1");
    assert_eq!(orders[0]["review"]["rating"], 5);
    assert_eq!(orders[0]["review"]["reply"], "thanks");

    let response = server
        .get(&format!("/api/maker/profile?maker_id={}", maker_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get("/api/makers").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let makers = response.json::<Value>();
    assert_eq!(makers[0]["maker_id"], maker_id);
    assert_eq!(makers[0]["meal_count"], 1);
    assert_eq!(makers[0]["featured_meal_name"], "Laksa");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn duplicate_email_is_a_conflict(pool: PgPool) {
    let server = server(pool);
    register(&server, "a@x.com", None).await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@x.com", "password": "password2", "role": "maker" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn wrong_password_is_unauthorized(pool: PgPool) {
    let server = server(pool);
    register(&server, "a@x.com", None).await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "password2" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn maker_profile_is_created_once(pool: PgPool) {
    let server = server(pool);
    let maker_id = register(&server, "chef@x.com", Some("maker")).await;
    let uri = format!("/api/maker/profile?maker_id={}", maker_id);

    let first = server.get(&uri).await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let first = first.json::<Value>();
    assert_eq!(first["email"], "chef@x.com");

    let second = server.get(&uri).await;
    assert_eq!(second.status_code(), StatusCode::OK);
    assert_eq!(second.json::<Value>(), first);

    let response = server
        .get(&format!("/api/eater/profile?eater_id={}", maker_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn eater_profile_can_be_replaced(pool: PgPool) {
    let server = server(pool);
    let eater_id = register(&server, "alex@x.com", None).await;

    let response = server
        .get(&format!("/api/eater/profile?eater_id={}", eater_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["display_name"], "alex");

    let response = server
        .put("/api/eater/profile")
        .json(&json!({
            "eater_id": eater_id,
            "display_name": "Alex",
            "favorite_cuisine": "Malaysian"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let profile = response.json::<Value>();
    assert_eq!(profile["display_name"], "Alex");
    assert_eq!(profile["favorite_cuisine"], "Malaysian");
    assert_eq!(profile["phone"], Value::Null);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn duplicate_order_code_is_a_conflict(pool: PgPool) {
    let server = server(pool);
    let maker_id = register(&server, "chef@x.com", Some("maker")).await;
    create_order(&server, maker_id, None, "ORD1").await;

    let mut payload = order_payload(maker_id, None, "ORD1");
    payload["meal_name"] = json!("Rendang");
    payload["price"] = json!(12.0);

    let response = server.post("/api/orders").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn review_requires_an_eater_on_the_order(pool: PgPool) {
    let server = server(pool);
    let maker_id = register(&server, "chef@x.com", Some("maker")).await;
    let order = create_order(&server, maker_id, None, "WALKIN").await;

    let response = server
        .post("/api/reviews")
        .json(&json!({ "order_id": order["id"], "rating": 3, "comment": "Fine" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn any_status_may_follow_any_other(pool: PgPool) {
    let server = server(pool);
    let maker_id = register(&server, "chef@x.com", Some("maker")).await;
    let order = create_order(&server, maker_id, None, "ORD1").await;
    let uri = format!("/api/orders/{}", order["id"]);

    for status in ["completed", "ready", "PENDING"] {
        let response = server.patch(&uri).json(&json!({ "status": status })).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], status.to_lowercase());
    }

    let pending = server
        .get(&format!("/api/orders?maker_id={}&status_filter=pending", maker_id))
        .await
        .json::<Value>();
    assert_eq!(pending.as_array().map(Vec::len), Some(1));

    let unknown = server
        .get(&format!("/api/orders?maker_id={}&status_filter=cancelled", maker_id))
        .await
        .json::<Value>();
    assert_eq!(unknown, json!([]));

    let response = server
        .patch(&uri)
        .json(&json!({ "status": "cancelled" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn development_allows_any_origin_by_default() {
    let server = server(unconnected_pool());

    assert_eq!(
        allowed_origin(&server, "http://localhost:3000").await,
        Some(HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn production_refuses_unlisted_origins() {
    let server = server_with(unconnected_pool(), AppEnvironment::Production, None);

    assert_eq!(allowed_origin(&server, "http://localhost:3000").await, None);
}

#[tokio::test]
async fn configured_origins_are_echoed() {
    let server = server_with(
        unconnected_pool(),
        AppEnvironment::Production,
        Some(vec!["https://aussieeat.example".to_string()]),
    );

    assert_eq!(
        allowed_origin(&server, "https://aussieeat.example").await,
        Some(HeaderValue::from_static("https://aussieeat.example"))
    );
    assert_eq!(allowed_origin(&server, "https://elsewhere.example").await, None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn reused_order_code_conflicts_before_the_eater_is_checked(pool: PgPool) {
    let server = server(pool);
    let maker_id = register(&server, "chef@x.com", Some("maker")).await;
    create_order(&server, maker_id, None, "ORD1").await;

    let response = server
        .post("/api/orders")
        .json(&order_payload(maker_id, Some(999_999), "ORD1"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = server
        .post("/api/orders")
        .json(&order_payload(maker_id, Some(999_999), "ORD2"))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn meals_are_listed_newest_first(pool: PgPool) {
    let server = server(pool);
    let first_maker = register(&server, "chef@x.com", Some("maker")).await;
    let second_maker = register(&server, "cook@x.com", Some("maker")).await;
    create_meal(&server, first_maker, "Laksa").await;
    create_meal(&server, second_maker, "Pavlova").await;
    create_meal(&server, first_maker, "Rendang").await;

    let all = server.get("/api/meals").await;
    assert_eq!(all.status_code(), StatusCode::OK);
    let titles = all
        .json::<Value>()
        .as_array()
        .unwrap()
        .iter()
        .map(|meal| meal["title"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["Rendang", "Pavlova", "Laksa"]);

    let mine = server
        .get(&format!("/api/meals?maker_id={}", first_maker))
        .await
        .json::<Value>();
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0]["title"], "Rendang");
    assert!(mine.iter().all(|meal| meal["maker_id"] == first_maker));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn only_makers_may_list_meals_for_sale(pool: PgPool) {
    let server = server(pool);
    let eater_id = register(&server, "alex@x.com", None).await;

    let response = server
        .post("/api/meals")
        .json(&json!({
            "maker_id": eater_id,
            "title": "Laksa",
            "description": "Coconut curry noodle soup",
            "price": 9.5,
            "image_data": "data:image/png;base64,AAAA"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn maker_profile_update_replaces_every_field(pool: PgPool) {
    let server = server(pool);
    let maker_id = register(&server, "chef@x.com", Some("maker")).await;
    let eater_id = register(&server, "alex@x.com", None).await;
    let uri = format!("/api/maker/profile?maker_id={}", maker_id);

    let original = server.get(&uri).await.json::<Value>();
    assert_eq!(original["name"], "Chef's Corner");
    assert_eq!(original["country"], "Australia");

    let replacement = json!({
        "maker_id": maker_id,
        "name": "Laksa House",
        "email": "hello@laksa.example",
        "phone": "+61 400 000 000",
        "country": "Malaysia",
        "location": "Jalan Alor, Kuala Lumpur"
    });
    let response = server.put("/api/maker/profile").json(&replacement).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let stored = server.get(&uri).await.json::<Value>();
    for field in ["name", "email", "phone", "country", "location"] {
        assert_eq!(stored[field], replacement[field]);
    }

    let mut as_eater = replacement.clone();
    as_eater["maker_id"] = json!(eater_id);
    let response = server.put("/api/maker/profile").json(&as_eater).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn unknown_ids_are_not_found(pool: PgPool) {
    let server = server(pool);

    let response = server
        .patch("/api/orders/999999")
        .json(&json!({ "status": "ready" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .patch("/api/reviews/999999")
        .json(&json!({ "reply": "thanks" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.get("/api/reviews?maker_id=999999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn reviews_are_listed_per_maker_and_replies_overwrite(pool: PgPool) {
    let server = server(pool);
    let maker_id = register(&server, "chef@x.com", Some("maker")).await;
    let other_maker = register(&server, "cook@x.com", Some("maker")).await;
    let eater_id = register(&server, "alex@x.com", None).await;

    let first = create_order(&server, maker_id, Some(eater_id), "ORD1").await;
    let second = create_order(&server, maker_id, Some(eater_id), "ORD2").await;
    let elsewhere = create_order(&server, other_maker, Some(eater_id), "ORD3").await;
    create_review(&server, &first["id"], 4).await;
    let review = create_review(&server, &second["id"], 5).await;
    create_review(&server, &elsewhere["id"], 2).await;

    let response = server
        .get(&format!("/api/reviews?maker_id={}", maker_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let reviews = response.json::<Value>();
    let reviews = reviews.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["order_code"], "ORD2");
    assert_eq!(reviews[0]["eater_id"], eater_id);
    assert!(reviews.iter().all(|review| review["maker_id"] == maker_id));

    let uri = format!("/api/reviews/{}", review["id"]);
    for reply in ["Thanks!", "Thanks, see you soon"] {
        let response = server.patch(&uri).json(&json!({ "reply": reply })).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["reply"], reply);
    }

    let reviews = server
        .get(&format!("/api/reviews?maker_id={}", maker_id))
        .await
        .json::<Value>();
    assert_eq!(reviews[0]["reply"], "Thanks, see you soon");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn eater_orders_honour_the_status_filter(pool: PgPool) {
    let server = server(pool);
    let maker_id = register(&server, "chef@x.com", Some("maker")).await;
    let eater_id = register(&server, "alex@x.com", None).await;

    create_order(&server, maker_id, Some(eater_id), "ORD1").await;
    let ready = create_order(&server, maker_id, Some(eater_id), "ORD2").await;
    let response = server
        .patch(&format!("/api/orders/{}", ready["id"]))
        .json(&json!({ "status": "ready" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let uri = format!("/api/eater/orders?eater_id={}", eater_id);

    let all = server.get(&uri).await.json::<Value>();
    assert_eq!(all.as_array().map(Vec::len), Some(2));

    let only_ready = server
        .get(&format!("{}&status_filter=READY", uri))
        .await
        .json::<Value>();
    let only_ready = only_ready.as_array().unwrap();
    assert_eq!(only_ready.len(), 1);
    assert_eq!(only_ready[0]["order_code"], "ORD2");
    assert_eq!(only_ready[0]["review"], Value::Null);

    let padded = server
        .get(&format!("{}&status_filter=%20pending%20", uri))
        .await
        .json::<Value>();
    assert_eq!(padded, json!([]));

    let response = server
        .get(&format!("/api/eater/orders?eater_id={}", maker_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
