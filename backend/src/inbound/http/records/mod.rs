//! Social performance record handlers.
//!
//! ```text
//! GET    /salesmen/{sid}/records
//! POST   /salesmen/{sid}/records {"skill":"Empathy","socialScore":80}
//! DELETE /salesmen/{sid}/records/{skill}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;
use serde_json::Number;
use tracing::info;

use crate::domain::{Error, Salesman, SocialPerformanceRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::salesmen::salesman_not_found;
use crate::inbound::http::schemas::{SalesmanSchema, SocialPerformanceRecordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, Presence, missing_fields_error, parse_sid, present,
};

/// Message for record payloads lacking a skill or score.
pub const MISSING_RECORD_FIELDS: &str = "Missing fields: skill, socialScore";
/// Message for record deletion against an unknown salesman.
pub const RECORD_TARGET_NOT_FOUND: &str = "Salesman not found or skill not found";

const SKILL: FieldName = FieldName::new("skill");
const SOCIAL_SCORE: FieldName = FieldName::new("socialScore");

/// Request body for `POST /salesmen/{sid}/records`.
///
/// `socialScore` must be present but may be `null`; the outer `Option`
/// tracks presence of the key.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    /// Skill being assessed.
    pub skill: Option<String>,
    /// Score for the skill.
    #[serde(default, deserialize_with = "present")]
    #[expect(
        clippy::option_option,
        reason = "outer Option tracks the key, inner Option a null score"
    )]
    pub social_score: Option<Option<Number>>,
}

fn record_target_not_found() -> Error {
    Error::not_found(RECORD_TARGET_NOT_FOUND)
}

fn parse_record_request(payload: RecordRequest) -> Result<SocialPerformanceRecord, Error> {
    let checked = [
        Presence::of(SKILL, &payload.skill),
        Presence::of(SOCIAL_SCORE, &payload.social_score),
    ];
    let (Some(skill), Some(social_score)) = (payload.skill, payload.social_score) else {
        return Err(missing_fields_error(MISSING_RECORD_FIELDS, &checked));
    };
    Ok(SocialPerformanceRecord::with_score(skill, social_score))
}

/// List a salesman's records in insertion order.
#[utoipa::path(
    get,
    path = "/salesmen/{sid}/records",
    params(("sid" = String, Path, description = "Numeric salesman identifier")),
    responses(
        (status = 200, description = "Records of the salesman", body = [SocialPerformanceRecordSchema]),
        (status = 404, description = "Salesman not found", body = ErrorBody)
    ),
    tags = ["records"],
    operation_id = "listRecords"
)]
#[get("/salesmen/{sid}/records")]
pub async fn list_records(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<SocialPerformanceRecord>>> {
    let sid = parse_sid(&path.into_inner(), salesman_not_found)?;
    let salesman = state
        .salesmen
        .find_by_sid(sid)
        .await?
        .ok_or_else(salesman_not_found)?;
    Ok(web::Json(salesman.records().to_vec()))
}

/// Append a record and return the updated salesman.
///
/// The salesman must exist before the body is validated, so an unknown sid
/// answers 404 even when the payload is incomplete.
#[utoipa::path(
    post,
    path = "/salesmen/{sid}/records",
    params(("sid" = String, Path, description = "Numeric salesman identifier")),
    request_body = SocialPerformanceRecordSchema,
    responses(
        (status = 201, description = "Record added", body = SalesmanSchema),
        (status = 400, description = "Missing skill or socialScore", body = ErrorBody),
        (status = 404, description = "Salesman not found", body = ErrorBody)
    ),
    tags = ["records"],
    operation_id = "addRecord"
)]
#[post("/salesmen/{sid}/records")]
pub async fn add_record(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RecordRequest>,
) -> ApiResult<HttpResponse> {
    let sid = parse_sid(&path.into_inner(), salesman_not_found)?;
    if state.salesmen.find_by_sid(sid).await?.is_none() {
        return Err(salesman_not_found());
    }
    let record = parse_record_request(payload.into_inner())?;
    let skill = record.skill().to_owned();
    let updated = state
        .salesmen
        .add_record(sid, record)
        .await?
        .ok_or_else(salesman_not_found)?;
    info!(%sid, skill = %skill, "record added");
    Ok(HttpResponse::Created().json(updated))
}

/// Remove every record whose skill matches exactly.
///
/// Deleting a skill the salesman does not have still succeeds.
#[utoipa::path(
    delete,
    path = "/salesmen/{sid}/records/{skill}",
    params(
        ("sid" = String, Path, description = "Numeric salesman identifier"),
        ("skill" = String, Path, description = "Skill name, case-sensitive")
    ),
    responses(
        (status = 200, description = "Updated salesman", body = SalesmanSchema),
        (status = 404, description = "Salesman not found", body = ErrorBody)
    ),
    tags = ["records"],
    operation_id = "deleteRecord"
)]
#[delete("/salesmen/{sid}/records/{skill}")]
pub async fn delete_record(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<Salesman>> {
    let (raw_sid, skill) = path.into_inner();
    let sid = parse_sid(&raw_sid, record_target_not_found)?;
    let updated = state
        .salesmen
        .remove_record(sid, &skill)
        .await?
        .ok_or_else(record_target_not_found)?;
    info!(%sid, skill = %skill, "record removed");
    Ok(web::Json(updated))
}
