//! Domain primitives, aggregates and ports.
//!
//! Purpose: define the salesman model and the store port independently of
//! HTTP and of any particular storage. Inbound adapters translate requests
//! into these types; outbound adapters implement the ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - Salesman / SocialPerformanceRecord / Sid: the aggregate and its key.
//! - TraceId: request correlation identifier.
//! - example_salesmen: startup seed data.

pub mod error;
pub mod ports;
pub mod salesman;
pub mod seed;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::salesman::{Salesman, Sid, SocialPerformanceRecord};
pub use self::seed::example_salesmen;
pub use self::trace_id::TraceId;
