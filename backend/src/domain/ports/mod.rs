//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod product_command;
mod product_query;
mod product_repository;

#[cfg(test)]
pub use product_command::MockProductCommand;
pub use product_command::ProductCommand;
#[cfg(test)]
pub use product_query::MockProductQuery;
pub use product_query::ProductQuery;
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
