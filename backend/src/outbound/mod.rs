//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local salesman store backing the REST API.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no request handling logic.

pub mod memory;
