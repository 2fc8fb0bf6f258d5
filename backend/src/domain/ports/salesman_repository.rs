//! Port for the salesman collection store.
//!
//! The store owns every salesman and nested record; callers only ever receive
//! clones. "Not found" is a normal outcome expressed as `None` (or an empty
//! removal) so the inbound adapter decides how to phrase it. The error type is
//! reserved for the store itself becoming unusable.

use async_trait::async_trait;
use tracing::error;

use crate::domain::{Error, Salesman, Sid, SocialPerformanceRecord};

use super::define_port_error;

define_port_error! {
    /// Failures raised by salesman store adapters.
    pub enum SalesmanStoreError {
        /// The store's state can no longer be accessed.
        Unavailable {
            /// What went wrong, for logs only.
            message: String,
        } => "salesman store unavailable: {message}",
    }
}

impl From<SalesmanStoreError> for Error {
    fn from(err: SalesmanStoreError) -> Self {
        error!(error = %err, "salesman store failure");
        Self::internal(err.to_string())
    }
}

/// Ordered, in-process collection of salesmen.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalesmanRepository: Send + Sync {
    /// Every salesman in insertion order.
    async fn list(&self) -> Result<Vec<Salesman>, SalesmanStoreError>;

    /// First salesman whose sid equals `sid`.
    async fn find_by_sid(&self, sid: Sid) -> Result<Option<Salesman>, SalesmanStoreError>;

    /// Append a salesman. Duplicate sids are not rejected.
    async fn insert(&self, salesman: Salesman) -> Result<(), SalesmanStoreError>;

    /// Remove every salesman with `sid`, returning the removed entries in
    /// their former order. An empty result means nothing matched.
    async fn remove(&self, sid: Sid) -> Result<Vec<Salesman>, SalesmanStoreError>;

    /// Append `record` to the salesman's records and return the updated
    /// salesman, or `None` when no salesman has `sid`.
    async fn add_record(
        &self,
        sid: Sid,
        record: SocialPerformanceRecord,
    ) -> Result<Option<Salesman>, SalesmanStoreError>;

    /// Drop every record with `skill` from the salesman and return the
    /// updated salesman, or `None` when no salesman has `sid`. A salesman
    /// without that skill is returned unchanged.
    async fn remove_record(
        &self,
        sid: Sid,
        skill: &str,
    ) -> Result<Option<Salesman>, SalesmanStoreError>;
}
