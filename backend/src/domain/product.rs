//! Product catalogue entity and its mutable field sets.
//!
//! Create and update payloads are modelled as distinct types even though they
//! share a shape: [`ProductDraft`] describes a product that does not exist yet,
//! [`ProductChanges`] is the complete replacement field set for an existing
//! one, and [`Product`] is what the store hands back. Server-managed fields
//! (`id`, `created_at`, `updated_at`) only ever appear on [`Product`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while building product field sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductValidationError {
    #[error("product name must not be empty")]
    EmptyName,
    #[error("product price must not be negative")]
    NegativePrice,
    #[error("product price must be a finite number")]
    NonFinitePrice,
}

impl ProductValidationError {
    /// Name of the payload field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NegativePrice | Self::NonFinitePrice => "price",
        }
    }
}

/// Server-generated product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generate a fresh identifier for a new product.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Interpret an externally supplied identifier.
    ///
    /// Only the canonical lowercase hyphenated form names a product, so one
    /// product has exactly one URL. Anything else is `None`, which callers
    /// treat exactly like an unknown id.
    ///
    /// # Examples
    /// ```
    /// use products_backend::domain::ProductId;
    ///
    /// assert!(ProductId::parse("not-a-uuid").is_none());
    /// assert!(ProductId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_some());
    /// assert!(ProductId::parse("3fa85f6457174562b3fc2c963f66afa6").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let uuid = Uuid::try_parse(raw).ok()?;
        (uuid.hyphenated().to_string() == raw).then_some(Self(uuid))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated mutable product fields shared by drafts and changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    name: String,
    description: Option<String>,
    price: f64,
    image: String,
}

impl ProductFields {
    fn try_new(
        name: String,
        description: Option<String>,
        price: f64,
        image: String,
    ) -> Result<Self, ProductValidationError> {
        if name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        if !price.is_finite() {
            return Err(ProductValidationError::NonFinitePrice);
        }
        if price < 0.0 {
            return Err(ProductValidationError::NegativePrice);
        }
        Ok(Self {
            name,
            description,
            price,
            image,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

/// Fields accepted when creating a product.
///
/// # Examples
/// ```
/// use products_backend::domain::ProductDraft;
///
/// let draft = ProductDraft::try_new("Widget", None, 9.99, "http://x/y.png").expect("valid");
/// assert_eq!(draft.fields().name(), "Widget");
/// assert!(ProductDraft::try_new("  ", None, 1.0, "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    fields: ProductFields,
}

impl ProductDraft {
    /// Validate and build a creation payload.
    pub fn try_new(
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Result<Self, ProductValidationError> {
        ProductFields::try_new(name.into(), description, price, image.into())
            .map(|fields| Self { fields })
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }
}

/// Complete replacement field set for an existing product.
///
/// There is no partial-patch form: every mutable field is overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    fields: ProductFields,
}

impl ProductChanges {
    /// Validate and build an update payload.
    pub fn try_new(
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Result<Self, ProductValidationError> {
        ProductFields::try_new(name.into(), description, price, image.into())
            .map(|fields| Self { fields })
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }
}

/// A stored product, as returned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Materialise a draft with server-assigned identity and timestamps.
    pub fn from_draft(id: ProductId, draft: &ProductDraft, now: DateTime<Utc>) -> Self {
        let fields = draft.fields();
        Self {
            id,
            name: fields.name().to_owned(),
            description: fields.description().map(str::to_owned),
            price: fields.price(),
            image: fields.image().to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field and advance `updated_at`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, changes: &ProductChanges, now: DateTime<Utc>) {
        let fields = changes.fields();
        self.name = fields.name().to_owned();
        self.description = fields.description().map(str::to_owned);
        self.price = fields.price();
        self.image = fields.image().to_owned();
        self.updated_at = now;
    }
}
