use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use clientele::mediator::Mediator;
use clientele::repository::DieselRepository;
use clientele::routes;
use clientele::services::register_handlers;

mod common;

fn build_mediator(test_db: &common::TestDb) -> Mediator {
    let repo = DieselRepository::new(test_db.pool().clone());
    register_handlers(repo).unwrap()
}

#[actix_web::test]
async fn client_endpoints_map_outcomes_to_status_codes() {
    let test_db = common::TestDb::new("routes_clients.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(build_mediator(&test_db)))
            .configure(routes::configure),
    )
    .await;

    // Empty store lists fine.
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/clients").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    // Unknown id is a 404.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/clients/999")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Invalid payload is rejected before dispatch.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/clients")
            .set_json(json!({ "first_name": "", "last_name": "Lee" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Create returns the stored record with its id.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/clients")
            .set_json(json!({ "first_name": "Ann", "last_name": "Lee" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["first_name"], "Ann");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/clients/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Path and body ids must agree on update.
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/clients/{id}"))
            .set_json(json!({ "id": id + 1, "first_name": "Anne", "last_name": "Lee" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/clients/{id}"))
            .set_json(json!({ "id": id, "first_name": "Anne", "last_name": "Lee" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["first_name"], "Anne");

    // Delete succeeds once, then the id is gone.
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/clients/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/clients/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn client_search_distinguishes_bad_input_from_misses() {
    let test_db = common::TestDb::new("routes_client_search.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(build_mediator(&test_db)))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/clients")
            .set_json(json!({ "first_name": "Jane", "last_name": "Doe" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/clients/search?name=Jane%20Doe")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Value = test::read_body_json(resp).await;
    assert_eq!(found["first_name"], "Jane");
    assert_eq!(found["last_name"], "Doe");

    // A one-token name is a validation failure, not a miss.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/clients/search?name=Madonna")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/clients/search?name=Jane%20Bloggs")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn employee_endpoints_cover_lookup_and_store_failures() {
    let test_db = common::TestDb::new("routes_employees.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(build_mediator(&test_db)))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/departments")
            .set_json(json!({ "name": "Engineering" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let department: Value = test::read_body_json(resp).await;
    let department_id = department["id"].as_i64().unwrap();

    let employee = json!({
        "department_id": department_id,
        "first_name": "Ann",
        "last_name": "Lee",
        "email": "ann.lee@example.com",
        "dob": "1990-04-01"
    });
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(employee.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // The unique-email constraint surfaces as a server-side failure.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(employee)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/employees/search?email=ann.lee@example.com")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/employees/search?email=nobody@example.com")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
