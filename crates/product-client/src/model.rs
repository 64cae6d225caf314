//! Wire and form types exchanged with the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ProductClientError;

/// Product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier.
    pub id: String,
    /// Unique display name.
    pub name: String,
    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Non-negative price.
    pub price: f64,
    /// Image URL.
    pub image: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Fields as a user typed them; `price` stays text until submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Description; blank means none.
    #[serde(default)]
    pub description: String,
    /// Price as typed.
    #[serde(default)]
    pub price: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// JSON body sent for create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Product name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Numeric price.
    pub price: f64,
    /// Image URL.
    pub image: String,
}

impl TryFrom<&ProductForm> for ProductPayload {
    type Error = ProductClientError;

    /// Coerce the price to a number. A blank description becomes `None`.
    fn try_from(form: &ProductForm) -> Result<Self, Self::Error> {
        let raw_price = form.price.trim();
        let price = raw_price
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ProductClientError::InvalidPrice {
                input: form.price.clone(),
            })?;
        let description = Some(form.description.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        Ok(Self {
            name: form.name.trim().to_owned(),
            description,
            price,
            image: form.image.trim().to_owned(),
        })
    }
}

/// Why a single-product fetch produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// The server answered with this non-success status.
    Status(u16),
    /// Success status with no body.
    EmptyBody,
    /// The body was not a product document.
    Malformed,
    /// The server could not be reached.
    Unreachable,
}

/// Outcome of a read that never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The value was retrieved.
    Found(T),
    /// Nothing usable came back.
    Absent(Absence),
}

impl<T> Fetched<T> {
    /// Collapse to an `Option`, forgetting why the value was absent.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    /// Whether a value was retrieved.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Successful delete. Callers must not rely on either shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Deleted {
    /// The server echoed the removed product.
    Product(Product),
    /// The server confirmed without a product body.
    Acknowledged,
}
