//! Product catalogue backend.
//!
//! Hexagonal layout: `domain` holds the catalogue rules and ports, `inbound`
//! adapts HTTP onto the driving ports, and `outbound` implements the
//! repository port against PostgreSQL or process memory.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
