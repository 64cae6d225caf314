//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types; row structs (`models.rs`) and the table definition (`schema.rs`)
//! stay private to this module. Connections come from a `bb8` pool managed by
//! `diesel-async`, and every Diesel failure is mapped to
//! [`ProductRepositoryError`](crate::domain::ports::ProductRepositoryError).
//!
//! ```ignore
//! use products_backend::outbound::persistence::{DbPool, DieselProductRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/products")).await?;
//! let repo = DieselProductRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_product_repository;
mod models;
mod pool;
mod schema;
mod schema_bootstrap;

pub use diesel_product_repository::DieselProductRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use schema_bootstrap::{SchemaBootstrapError, apply_schema};
