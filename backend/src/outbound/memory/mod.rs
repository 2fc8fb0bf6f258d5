//! In-process adapters. State lives only as long as the process.

mod salesman_store;

pub use salesman_store::InMemorySalesmanStore;
