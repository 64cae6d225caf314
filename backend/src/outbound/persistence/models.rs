//! Diesel row types for the `products` table.
//!
//! These structs never leave the persistence module; repositories convert
//! them to and from domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Product, ProductFields, ProductId};

use super::schema::products;

/// Row read back from `products`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable row for a new product.
#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub image: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> NewProductRow<'a> {
    pub fn new(id: Uuid, fields: &'a ProductFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name(),
            description: fields.description(),
            price: fields.price(),
            image: fields.image(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full replacement of the mutable columns.
///
/// `treat_none_as_null` makes a missing description clear the column rather
/// than leave the previous value in place.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ProductChangeset<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub image: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> ProductChangeset<'a> {
    pub fn new(fields: &'a ProductFields, now: DateTime<Utc>) -> Self {
        Self {
            name: fields.name(),
            description: fields.description(),
            price: fields.price(),
            image: fields.image(),
            updated_at: now,
        }
    }
}
