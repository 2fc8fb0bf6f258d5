//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every salesmen, record and health endpoint together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves it in debug builds.

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{SalesmanSchema, SocialPerformanceRecordSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salesmen API",
        description = "In-memory management of salesmen and their social performance records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::salesmen::list_salesmen,
        crate::inbound::http::salesmen::get_salesman,
        crate::inbound::http::salesmen::create_salesman,
        crate::inbound::http::salesmen::delete_salesman,
        crate::inbound::http::records::list_records,
        crate::inbound::http::records::add_record,
        crate::inbound::http::records::delete_record,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(SalesmanSchema, SocialPerformanceRecordSchema, ErrorBody)),
    tags(
        (name = "salesmen", description = "Salesman collection operations"),
        (name = "records", description = "Social performance records of one salesman"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
