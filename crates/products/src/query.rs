//! List queries: filter predicates, pagination window, and the parsing that
//! turns raw query-string pairs into both.

use serde::Serialize;

use catalog_core::{DomainError, DomainResult};

use crate::product::Product;

pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";
pub const IN_STOCK: &str = "inStock";
pub const CATEGORY: &str = "category";
pub const LIMIT: &str = "limit";
pub const OFFSET: &str = "offset";

/// AND-composed predicates. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
    /// Exact, case-sensitive match.
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.min_price.is_none_or(|min| product.price() >= min)
            && self.max_price.is_none_or(|max| product.price() <= max)
            && self.in_stock.is_none_or(|flag| product.in_stock() == flag)
            && self
                .category
                .as_deref()
                .is_none_or(|category| product.category() == category)
    }
}

/// `[offset, offset + limit)` window applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// `None` takes everything after `offset`.
    pub limit: Option<usize>,
    pub offset: usize,
}

impl Pagination {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit: Some(limit),
            offset,
        }
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(items.len()),
            None => items.len(),
        };
        &items[start..end]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filter: ProductFilter,
    pub page: Pagination,
}

impl ListQuery {
    /// Parse query-string pairs.
    ///
    /// Keys are case-sensitive; unknown keys are ignored. A value that does not
    /// parse for its key is a validation error naming the key. When a key
    /// repeats, the last value wins.
    pub fn from_params<I, K, V>(params: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ListQuery::default();
        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                MIN_PRICE => query.filter.min_price = Some(parse_price(MIN_PRICE, value)?),
                MAX_PRICE => query.filter.max_price = Some(parse_price(MAX_PRICE, value)?),
                IN_STOCK => query.filter.in_stock = Some(parse_flag(IN_STOCK, value)?),
                CATEGORY => query.filter.category = Some(parse_category(CATEGORY, value)?),
                LIMIT => query.page.limit = Some(parse_count(LIMIT, value)?),
                OFFSET => query.page.offset = parse_count(OFFSET, value)?,
                _ => {}
            }
        }
        Ok(query)
    }

    pub fn with_filter(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

/// One page of a list query.
///
/// `total` counts every match before the window is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: usize,
    pub limit: Option<usize>,
    pub offset: usize,
}

fn parse_price(key: &str, raw: &str) -> DomainResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DomainError::validation(format!(
            "{key} must be a number, got {raw:?}"
        ))),
    }
}

fn parse_flag(key: &str, raw: &str) -> DomainResult<bool> {
    let raw_trimmed = raw.trim();
    if raw_trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw_trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(DomainError::validation(format!(
            "{key} must be \"true\" or \"false\", got {raw:?}"
        )))
    }
}

/// Stored categories are never blank, so a blank filter could match nothing.
fn parse_category(key: &str, raw: &str) -> DomainResult<String> {
    if raw.trim().is_empty() {
        return Err(DomainError::validation(format!(
            "{key} must not be empty, got {raw:?}"
        )));
    }
    Ok(raw.to_string())
}

fn parse_count(key: &str, raw: &str) -> DomainResult<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        DomainError::validation(format!(
            "{key} must be a non-negative integer, got {raw:?}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_mean_no_constraints() {
        let query = ListQuery::from_params(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn parses_every_known_key() {
        let query = ListQuery::from_params([
            ("minPrice", "10.5"),
            ("maxPrice", "500"),
            ("inStock", "TRUE"),
            ("category", "furniture"),
            ("limit", "2"),
            ("offset", "1"),
            ("sort", "ignored"),
        ])
        .unwrap();

        assert_eq!(query.filter.min_price, Some(10.5));
        assert_eq!(query.filter.max_price, Some(500.0));
        assert_eq!(query.filter.in_stock, Some(true));
        assert_eq!(query.filter.category.as_deref(), Some("furniture"));
        assert_eq!(query.page, Pagination::new(2, 1));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let query = ListQuery::from_params([("minprice", "abc"), ("Category", "x")]).unwrap();
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn rejects_malformed_values() {
        let cases = [
            ("minPrice", "cheap"),
            ("maxPrice", ""),
            ("maxPrice", "NaN"),
            ("minPrice", "inf"),
            ("inStock", "yes"),
            ("inStock", "1"),
            ("limit", "-1"),
            ("offset", "2.5"),
            ("category", ""),
            ("category", "   "),
        ];
        for (key, value) in cases {
            let err = ListQuery::from_params([(key, value)]).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{key}={value}");
            assert!(err.message().starts_with(key), "{}", err.message());
        }
    }

    #[test]
    fn window_clamps_to_bounds() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(Pagination::new(2, 1).window(&items), &[2, 3]);
        assert_eq!(Pagination::new(10, 3).window(&items), &[4, 5]);
        assert_eq!(Pagination::new(2, 9).window(&items), &[] as &[i32]);
        assert_eq!(Pagination::new(0, 0).window(&items), &[] as &[i32]);
        assert_eq!(Pagination::default().window(&items), &items);
        assert_eq!(
            Pagination {
                limit: Some(usize::MAX),
                offset: 1
            }
            .window(&items),
            &[2, 3, 4, 5]
        );
    }
}
