//! HTTP inbound adapter exposing the salesmen REST endpoints.

pub mod error;
pub mod health;
pub mod records;
pub mod salesmen;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the JSON extractor configuration and every salesmen and record
/// route on `cfg`.
///
/// Health checks are registered separately because they depend on
/// [`health::HealthState`] rather than the store.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(salesmen::list_salesmen)
        .service(salesmen::get_salesman)
        .service(salesmen::create_salesman)
        .service(salesmen::delete_salesman)
        .service(records::list_records)
        .service(records::add_record)
        .service(records::delete_record);
}
