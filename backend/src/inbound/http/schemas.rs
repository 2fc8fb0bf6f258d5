//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `ToSchema`; the wrappers here mirror their JSON
//! shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::SocialPerformanceRecord`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SocialPerformanceRecord, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SocialPerformanceRecordSchema {
    /// Skill name. Matching on deletion is exact and case-sensitive.
    #[schema(example = "Communication")]
    skill: String,
    /// Score as supplied by the client, integer or fractional. The key is
    /// required on submission but its value may be `null`.
    #[schema(example = 88)]
    social_score: Option<f64>,
}

/// OpenAPI schema for [`crate::domain::Salesman`].
///
/// Keys not listed here are accepted on creation and echoed back unchanged.
#[derive(ToSchema)]
#[schema(as = crate::domain::Salesman, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SalesmanSchema {
    /// Numeric identifier. Uniqueness is not enforced.
    #[schema(example = 101)]
    sid: i64,
    #[schema(example = "John")]
    firstname: String,
    #[schema(example = "Doe")]
    lastname: String,
    #[schema(example = "Senior Sales Executive")]
    job_title: Option<String>,
    #[schema(example = "North Region")]
    sub_unit: Option<String>,
    #[schema(example = "Michael Smith")]
    supervisor: Option<String>,
    /// Defaults to an empty list when omitted on creation.
    social_performance_records: Option<Vec<SocialPerformanceRecordSchema>>,
}
