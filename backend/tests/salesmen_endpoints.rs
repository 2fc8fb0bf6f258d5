//! End-to-end behaviour of the salesmen REST API against a fresh seeded
//! store per test.

mod support;

use actix_web::http::StatusCode;
use actix_web::test::{self as actix_test, TestRequest};
use rstest::rstest;
use serde_json::json;
use support::{Reply, seeded_app};

#[actix_web::test]
async fn created_salesman_is_listed_last_and_retrievable() {
    let app = actix_test::init_service(seeded_app()).await;

    let req = TestRequest::post()
        .uri("/salesmen")
        .set_json(json!({ "sid": 104, "firstname": "Jane", "lastname": "Roe" }))
        .to_request();
    let created = Reply::read(actix_test::call_service(&app, req).await).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["socialPerformanceRecords"], json!([]));

    let list = TestRequest::get().uri("/salesmen").to_request();
    let listed = Reply::read(actix_test::call_service(&app, list).await).await;
    assert_eq!(listed.sids(), vec![101, 102, 103, 104]);

    let lookup = TestRequest::get().uri("/salesman/104").to_request();
    let fetched = Reply::read(actix_test::call_service(&app, lookup).await).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[actix_web::test]
async fn deleted_salesman_disappears_everywhere() {
    let app = actix_test::init_service(seeded_app()).await;

    let req = TestRequest::delete().uri("/salesmen/101").to_request();
    let deleted = Reply::read(actix_test::call_service(&app, req).await).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["lastname"], "Doe");

    for uri in ["/salesman/101", "/salesmen/101/records"] {
        let lookup = TestRequest::get().uri(uri).to_request();
        let reply = Reply::read(actix_test::call_service(&app, lookup).await).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(reply.body, json!({ "error": "Salesman not found" }));
    }

    let list = TestRequest::get().uri("/salesmen").to_request();
    let listed = Reply::read(actix_test::call_service(&app, list).await).await;
    assert_eq!(listed.sids(), vec![102, 103]);
}

#[actix_web::test]
async fn record_lifecycle_round_trips_through_listing() {
    let app = actix_test::init_service(seeded_app()).await;

    let req = TestRequest::post()
        .uri("/salesmen/103/records")
        .set_json(json!({ "skill": "Mentoring", "socialScore": 93.5 }))
        .to_request();
    let added = Reply::read(actix_test::call_service(&app, req).await).await;
    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(
        added.skills(),
        vec!["Strategic Thinking", "Leadership", "Problem Solving", "Mentoring"]
    );

    let list = TestRequest::get().uri("/salesmen/103/records").to_request();
    let listed = Reply::read(actix_test::call_service(&app, list).await).await;
    assert_eq!(listed.body[3], json!({ "skill": "Mentoring", "socialScore": 93.5 }));

    let delete = TestRequest::delete()
        .uri("/salesmen/103/records/Mentoring")
        .to_request();
    let removed = Reply::read(actix_test::call_service(&app, delete).await).await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(
        removed.skills(),
        vec!["Strategic Thinking", "Leadership", "Problem Solving"]
    );
}

#[actix_web::test]
async fn deleting_a_skill_removes_every_duplicate() {
    let app = actix_test::init_service(seeded_app()).await;
    for score in [70, 75] {
        let req = TestRequest::post()
            .uri("/salesmen/101/records")
            .set_json(json!({ "skill": "Teamwork", "socialScore": score }))
            .to_request();
        let reply = Reply::read(actix_test::call_service(&app, req).await).await;
        assert_eq!(reply.status, StatusCode::CREATED);
    }

    let req = TestRequest::delete()
        .uri("/salesmen/101/records/Teamwork")
        .to_request();
    let removed = Reply::read(actix_test::call_service(&app, req).await).await;
    assert_eq!(removed.skills(), vec!["Communication", "Negotiation"]);
}

#[rstest]
#[case(TestRequest::get().uri("/salesman/999"), "Salesman not found")]
#[case(TestRequest::delete().uri("/salesmen/999"), "Salesman not found")]
#[case(TestRequest::get().uri("/salesmen/999/records"), "Salesman not found")]
#[case(
    TestRequest::post().uri("/salesmen/999/records").set_json(json!({ "skill": "X", "socialScore": 1 })),
    "Salesman not found"
)]
#[case(
    TestRequest::delete().uri("/salesmen/999/records/X"),
    "Salesman not found or skill not found"
)]
#[actix_web::test]
async fn unknown_salesman_yields_not_found_envelope(
    #[case] request: TestRequest,
    #[case] message: &str,
) {
    let app = actix_test::init_service(seeded_app()).await;

    let reply = Reply::read(actix_test::call_service(&app, request.to_request()).await).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body, json!({ "error": message }));
    assert!(reply.trace_id.is_some(), "error responses carry a trace id");
}

#[rstest]
#[case(
    "/salesmen",
    json!({ "firstname": "No", "lastname": "Sid" }),
    "Missing required fields: sid, firstname, lastname"
)]
#[case(
    "/salesmen/102/records",
    json!({ "skill": "Listening" }),
    "Missing fields: skill, socialScore"
)]
#[actix_web::test]
async fn incomplete_payloads_leave_store_unchanged(
    #[case] uri: &str,
    #[case] payload: serde_json::Value,
    #[case] message: &str,
) {
    let app = actix_test::init_service(seeded_app()).await;
    let req = TestRequest::get().uri("/salesmen").to_request();
    let before = Reply::read(actix_test::call_service(&app, req).await).await;

    let submit = TestRequest::post().uri(uri).set_json(payload).to_request();
    let reply = Reply::read(actix_test::call_service(&app, submit).await).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, json!({ "error": message }));

    let relist = TestRequest::get().uri("/salesmen").to_request();
    let after = Reply::read(actix_test::call_service(&app, relist).await).await;
    assert_eq!(before.body, after.body);
}

#[actix_web::test]
async fn each_app_starts_from_the_same_seed() {
    let first = actix_test::init_service(seeded_app()).await;
    let req = TestRequest::delete().uri("/salesmen/102").to_request();
    actix_test::call_service(&first, req).await;

    let second = actix_test::init_service(seeded_app()).await;
    let list = TestRequest::get().uri("/salesmen").to_request();
    let listed = Reply::read(actix_test::call_service(&second, list).await).await;
    assert_eq!(listed.sids(), vec![101, 102, 103]);
}

#[actix_web::test]
async fn zero_score_record_is_stored_as_zero() {
    let app = actix_test::init_service(seeded_app()).await;
    let req = TestRequest::post()
        .uri("/salesmen/102/records")
        .set_json(json!({ "skill": "Punctuality", "socialScore": 0 }))
        .to_request();
    let added = Reply::read(actix_test::call_service(&app, req).await).await;
    assert_eq!(added.status, StatusCode::CREATED);

    let list = TestRequest::get().uri("/salesmen/102/records").to_request();
    let listed = Reply::read(actix_test::call_service(&app, list).await).await;
    assert_eq!(listed.body[3], json!({ "skill": "Punctuality", "socialScore": 0 }));
}

#[actix_web::test]
async fn repeated_skill_deletion_succeeds_and_touches_only_that_skill() {
    let app = actix_test::init_service(seeded_app()).await;
    for _ in 0..2 {
        let req = TestRequest::delete()
            .uri("/salesmen/101/records/Communication")
            .to_request();
        let reply = Reply::read(actix_test::call_service(&app, req).await).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.skills(), vec!["Teamwork", "Negotiation"]);
    }
}

#[actix_web::test]
async fn null_score_counts_as_supplied() {
    let app = actix_test::init_service(seeded_app()).await;
    let req = TestRequest::post()
        .uri("/salesmen/102/records")
        .set_json(json!({ "skill": "Listening", "socialScore": null }))
        .to_request();
    let added = Reply::read(actix_test::call_service(&app, req).await).await;
    assert_eq!(added.status, StatusCode::CREATED);

    let list = TestRequest::get().uri("/salesmen/102/records").to_request();
    let listed = Reply::read(actix_test::call_service(&app, list).await).await;
    assert_eq!(listed.body[3], json!({ "skill": "Listening", "socialScore": null }));
}

#[actix_web::test]
async fn integral_float_sid_in_body_is_accepted() {
    let app = actix_test::init_service(seeded_app()).await;
    let req = TestRequest::post()
        .uri("/salesmen")
        .set_json(json!({ "sid": 104.0, "firstname": "Jane", "lastname": "Roe" }))
        .to_request();
    let created = Reply::read(actix_test::call_service(&app, req).await).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["sid"], json!(104));

    let lookup = TestRequest::get().uri("/salesman/104").to_request();
    let fetched = Reply::read(actix_test::call_service(&app, lookup).await).await;
    assert_eq!(fetched.status, StatusCode::OK);
}
