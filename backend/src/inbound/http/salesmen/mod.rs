//! Salesman collection handlers.
//!
//! ```text
//! GET    /salesmen
//! GET    /salesman/{sid}
//! POST   /salesmen {"sid":104,"firstname":"Jane","lastname":"Roe"}
//! DELETE /salesmen/{sid}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use tracing::{debug, info};

use crate::domain::{Error, Salesman, Sid, SocialPerformanceRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::SalesmanSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, INVALID_JSON_MESSAGE, Presence, missing_fields_error, parse_sid,
};

/// Message for lookups of a salesman that does not exist.
pub const SALESMAN_NOT_FOUND: &str = "Salesman not found";
/// Message for creation requests lacking an identifier or a name.
pub const MISSING_SALESMAN_FIELDS: &str = "Missing required fields: sid, firstname, lastname";

const SID: FieldName = FieldName::new("sid");
const FIRSTNAME: FieldName = FieldName::new("firstname");
const LASTNAME: FieldName = FieldName::new("lastname");

/// Request body for `POST /salesmen`.
///
/// Every field is optional at the decoding stage so that absent required
/// fields surface as the endpoint's validation message rather than a decode
/// failure. Unknown keys are collected into `attributes` and stored verbatim.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalesmanRequest {
    /// Identifier; integral floats such as `104.0` are accepted.
    pub sid: Option<Number>,
    /// Given name.
    pub firstname: Option<String>,
    /// Family name.
    pub lastname: Option<String>,
    /// Job title.
    pub job_title: Option<String>,
    /// Organisational sub-unit.
    pub sub_unit: Option<String>,
    /// Supervisor's name.
    pub supervisor: Option<String>,
    /// Initial records; an empty list when omitted.
    pub social_performance_records: Option<Vec<SocialPerformanceRecord>>,
    /// Any other keys.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

pub(crate) fn salesman_not_found() -> Error {
    Error::not_found(SALESMAN_NOT_FOUND)
}

fn parse_create_request(payload: CreateSalesmanRequest) -> Result<Salesman, Error> {
    let checked = [
        Presence::of(SID, &payload.sid),
        Presence::of(FIRSTNAME, &payload.firstname),
        Presence::of(LASTNAME, &payload.lastname),
    ];
    let (Some(number), Some(firstname), Some(lastname)) =
        (payload.sid, payload.firstname, payload.lastname)
    else {
        return Err(missing_fields_error(MISSING_SALESMAN_FIELDS, &checked));
    };
    let Some(sid) = Sid::from_number(&number) else {
        debug!(%number, "body sid is not an integral number");
        return Err(Error::invalid_request(INVALID_JSON_MESSAGE));
    };

    Ok(Salesman::new(sid, firstname, lastname)
        .with_job_title(payload.job_title)
        .with_sub_unit(payload.sub_unit)
        .with_supervisor(payload.supervisor)
        .with_records(payload.social_performance_records.unwrap_or_default())
        .with_attributes(payload.attributes))
}

/// List every salesman in creation order.
#[utoipa::path(
    get,
    path = "/salesmen",
    responses(
        (status = 200, description = "All salesmen", body = [SalesmanSchema]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["salesmen"],
    operation_id = "listSalesmen"
)]
#[get("/salesmen")]
pub async fn list_salesmen(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Salesman>>> {
    let salesmen = state.salesmen.list().await?;
    Ok(web::Json(salesmen))
}

/// Fetch one salesman by sid.
///
/// Non-numeric sids are reported as not found.
#[utoipa::path(
    get,
    path = "/salesman/{sid}",
    params(("sid" = String, Path, description = "Numeric salesman identifier")),
    responses(
        (status = 200, description = "The salesman", body = SalesmanSchema),
        (status = 404, description = "Salesman not found", body = ErrorBody)
    ),
    tags = ["salesmen"],
    operation_id = "getSalesman"
)]
#[get("/salesman/{sid}")]
pub async fn get_salesman(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Salesman>> {
    let sid = parse_sid(&path.into_inner(), salesman_not_found)?;
    state
        .salesmen
        .find_by_sid(sid)
        .await?
        .map(web::Json)
        .ok_or_else(salesman_not_found)
}

/// Create a salesman.
///
/// Duplicate sids are accepted; lookups then return the earliest entry.
#[utoipa::path(
    post,
    path = "/salesmen",
    request_body = SalesmanSchema,
    responses(
        (status = 201, description = "Salesman created", body = SalesmanSchema),
        (status = 400, description = "Missing required fields", body = ErrorBody)
    ),
    tags = ["salesmen"],
    operation_id = "createSalesman"
)]
#[post("/salesmen")]
pub async fn create_salesman(
    state: web::Data<HttpState>,
    payload: web::Json<CreateSalesmanRequest>,
) -> ApiResult<HttpResponse> {
    let salesman = parse_create_request(payload.into_inner())?;
    state.salesmen.insert(salesman.clone()).await?;
    info!(sid = %salesman.sid(), "salesman created");
    Ok(HttpResponse::Created().json(salesman))
}

/// Delete a salesman and return the removed record.
#[utoipa::path(
    delete,
    path = "/salesmen/{sid}",
    params(("sid" = String, Path, description = "Numeric salesman identifier")),
    responses(
        (status = 200, description = "Deleted salesman", body = SalesmanSchema),
        (status = 404, description = "Salesman not found", body = ErrorBody)
    ),
    tags = ["salesmen"],
    operation_id = "deleteSalesman"
)]
#[delete("/salesmen/{sid}")]
pub async fn delete_salesman(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Salesman>> {
    let sid = parse_sid(&path.into_inner(), salesman_not_found)?;
    let removed = state.salesmen.remove(sid).await?;
    let salesman = removed.into_iter().next().ok_or_else(salesman_not_found)?;
    info!(%sid, "salesman deleted");
    Ok(web::Json(salesman))
}
