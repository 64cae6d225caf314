//! Translation of pool and Diesel failures into product repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::ProductRepositoryError;

use super::pool::PoolError;

/// Name of the unique constraint guarding `products.name`.
pub(crate) const NAME_UNIQUE_CONSTRAINT: &str = "products_name_key";

pub(crate) fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ProductRepositoryError::connection(message)
        }
    }
}

pub(crate) fn map_diesel_error(error: DieselError) -> ProductRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProductRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(_, info) => ProductRepositoryError::query(info.message()),
        DieselError::QueryBuilderError(_) => ProductRepositoryError::query("database query error"),
        other => ProductRepositoryError::query(other.to_string()),
    }
}

/// Map failures of statements that write `name`.
///
/// A unique violation on the name constraint becomes `DuplicateName`; drivers
/// that do not report the constraint name are assumed to mean the same thing
/// since `name` is the only user-controlled unique column.
pub(crate) fn map_write_error(error: DieselError, name: &str) -> ProductRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        match info.constraint_name() {
            None | Some(NAME_UNIQUE_CONSTRAINT) => {
                debug!(name, "product name already taken");
                return ProductRepositoryError::duplicate_name(name);
            }
            Some(_) => {}
        }
    }
    map_diesel_error(error)
}
