//! Domain primitives, ports and services.
//!
//! Purpose: hold the product catalogue rules independently of HTTP and
//! storage. Adapters depend on this module; it depends on neither of them.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure taxonomy.
//! - Product, ProductDraft, ProductChanges, ProductId — the catalogue entity.
//! - ProductService — implements the driving ports over a repository.
//! - TraceId — request correlation identifier.

pub mod error;
pub mod ports;
pub mod product;
pub mod product_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::product::{
    Product, ProductChanges, ProductDraft, ProductFields, ProductId, ProductValidationError,
};
pub use self::product_service::{ErrorExposure, ProductService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
