//! Product record and the inputs that create and modify it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

/// Rejection message for a create input lacking a required field.
pub const MISSING_REQUIRED_FIELDS: &str = "Product must have name, price, and category";

/// Rejection message for a negative or non-finite price.
pub const INVALID_PRICE: &str = "Product price must be a non-negative number";

/// A catalog entry.
///
/// Fields are private so that every instance in a store has passed through
/// [`Product::create`] or a validated [`ProductPatch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    category: String,
    stock_count: u32,
    in_stock: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Validate a create input and build the record under `id`.
    pub fn create(id: ProductId, input: NewProduct, now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self::from_valid(id, input.into_valid()?, now))
    }

    /// Build a record from an input that already passed validation.
    pub(crate) fn from_valid(id: ProductId, valid: ValidNewProduct, now: DateTime<Utc>) -> Self {
        let ValidNewProduct {
            name,
            price,
            category,
            stock_count,
            in_stock,
        } = valid;
        Self {
            id,
            name,
            price,
            category,
            stock_count,
            in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a record from trusted values (seed data).
    pub(crate) fn from_parts(
        id: ProductId,
        name: &str,
        price: f64,
        category: &str,
        stock_count: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            stock_count,
            in_stock: stock_count > 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock_count(&self) -> u32 {
        self.stock_count
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merge `patch` over this record.
    ///
    /// All supplied fields are validated first; on error nothing changes.
    /// An empty patch leaves the record, `updatedAt` included, untouched.
    pub fn apply_patch(&mut self, patch: ProductPatch, now: DateTime<Utc>) -> DomainResult<()> {
        patch.validate()?;
        if patch.is_empty() {
            return Ok(());
        }

        let ProductPatch {
            name,
            price,
            category,
            stock_count,
            in_stock,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(stock_count) = stock_count {
            self.stock_count = stock_count;
        }
        if let Some(in_stock) = in_stock {
            self.in_stock = in_stock;
        }
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Create input. Every field is optional on the wire; [`Product::create`]
/// decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock_count: Option<u32>,
    pub in_stock: Option<bool>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Require a non-blank name and category and a non-zero price, check the
    /// price range, and apply the stock defaults.
    pub(crate) fn into_valid(self) -> DomainResult<ValidNewProduct> {
        let NewProduct {
            name: Some(name),
            price: Some(price),
            category: Some(category),
            stock_count,
            in_stock,
        } = self
        else {
            return Err(DomainError::validation(MISSING_REQUIRED_FIELDS));
        };
        if is_blank(&name) || is_blank(&category) || price == 0.0 || price.is_nan() {
            return Err(DomainError::validation(MISSING_REQUIRED_FIELDS));
        }
        check_price(price)?;

        let stock_count = stock_count.unwrap_or(0);
        Ok(ValidNewProduct {
            name,
            price,
            category,
            stock_count,
            in_stock: in_stock.unwrap_or(stock_count > 0),
        })
    }

    pub fn with_stock_count(mut self, stock_count: u32) -> Self {
        self.stock_count = Some(stock_count);
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }
}

/// A [`NewProduct`] with required fields present and defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidNewProduct {
    name: String,
    price: f64,
    category: String,
    stock_count: u32,
    in_stock: bool,
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock_count: Option<u32>,
    pub in_stock: Option<bool>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Checks only the fields that are present.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.as_deref().is_some_and(is_blank) {
            return Err(DomainError::validation("Product name must not be empty"));
        }
        if self.category.as_deref().is_some_and(is_blank) {
            return Err(DomainError::validation("Product category must not be empty"));
        }
        if let Some(price) = self.price {
            check_price(price)?;
        }
        Ok(())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn check_price(price: f64) -> DomainResult<()> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::validation(INVALID_PRICE))
    }
}
