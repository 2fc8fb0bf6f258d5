//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod salesman_repository;

#[cfg(test)]
pub use salesman_repository::MockSalesmanRepository;
pub use salesman_repository::{SalesmanRepository, SalesmanStoreError};
