//! Default catalog contents loaded on process start.

use chrono::{DateTime, Utc};

use catalog_core::ProductId;

use crate::product::Product;

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    price: f64,
    category: &'static str,
    stock_count: u32,
}

const SEED: [SeedProduct; 5] = [
    SeedProduct {
        id: "1",
        name: "Laptop",
        price: 999.99,
        category: "electronics",
        stock_count: 10,
    },
    SeedProduct {
        id: "2",
        name: "Headphones",
        price: 199.99,
        category: "electronics",
        stock_count: 25,
    },
    SeedProduct {
        id: "3",
        name: "Desk Chair",
        price: 149.99,
        category: "furniture",
        stock_count: 0,
    },
    SeedProduct {
        id: "4",
        name: "Coffee Table",
        price: 249.99,
        category: "furniture",
        stock_count: 5,
    },
    SeedProduct {
        id: "5",
        name: "Wireless Mouse",
        price: 29.99,
        category: "electronics",
        stock_count: 30,
    },
];

/// The fixed seed set, stamped with `now`.
pub fn default_products(now: DateTime<Utc>) -> Vec<Product> {
    SEED.iter()
        .map(|s| {
            Product::from_parts(
                ProductId::from(s.id),
                s.name,
                s.price,
                s.category,
                s.stock_count,
                now,
            )
        })
        .collect()
}
