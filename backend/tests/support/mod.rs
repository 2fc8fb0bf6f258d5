//! Shared helpers for salesmen integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module keeps app construction and response decoding in one place.

#![expect(
    clippy::expect_used,
    reason = "helpers decode test responses and fail loudly on malformed bodies"
)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use salesmen::Trace;
use salesmen::inbound::http::configure;
use salesmen::inbound::http::state::HttpState;
use salesmen::outbound::memory::InMemorySalesmanStore;
use serde_json::Value;

/// Application serving a fresh store with the example salesmen.
pub fn seeded_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(Arc::new(
            InMemorySalesmanStore::seeded(),
        ))))
        .wrap(Trace)
        .configure(configure)
}

/// Decoded response used by assertions.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    /// Value of the `trace-id` header, when present.
    pub trace_id: Option<String>,
    pub body: Value,
}

impl Reply {
    /// Capture status, trace header and JSON body of `res`.
    pub async fn read<B: MessageBody>(res: ServiceResponse<B>) -> Self {
        let status = res.status();
        let trace_id = res
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = actix_test::read_body(res).await;
        let body = serde_json::from_slice(&bytes).expect("JSON response body");
        Self {
            status,
            trace_id,
            body,
        }
    }

    /// `sid` of every element when the body is an array of salesmen.
    pub fn sids(&self) -> Vec<i64> {
        self.body
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|s| s.get("sid").and_then(Value::as_i64))
            .collect()
    }

    /// Skill names of the records nested in a salesman body, or of a bare
    /// record array.
    pub fn skills(&self) -> Vec<String> {
        let records = self
            .body
            .get("socialPerformanceRecords")
            .unwrap_or(&self.body);
        records
            .as_array()
            .expect("records array")
            .iter()
            .filter_map(|r| r.get("skill").and_then(Value::as_str))
            .map(str::to_owned)
            .collect()
    }
}
