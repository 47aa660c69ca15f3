// catalog/src/store/seed.rs

//! Demo records loaded at startup when seeding is enabled.

use crate::model::Product;
use chrono::{DateTime, TimeZone, Utc};

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single().unwrap_or_default()
}

pub fn demo_products() -> Vec<Product> {
  vec![
    Product {
      id: 1,
      name: "Laptop".to_string(),
      price: 999.99,
      category: "Electronics".to_string(),
      description: "High-performance laptop".to_string(),
      in_stock: true,
      created_at: seed_date(2023, 1, 15),
      updated_at: None,
    },
    Product {
      id: 2,
      name: "Smartphone".to_string(),
      price: 699.99,
      category: "Electronics".to_string(),
      description: "Latest smartphone model".to_string(),
      in_stock: true,
      created_at: seed_date(2023, 2, 20),
      updated_at: None,
    },
    Product {
      id: 3,
      name: "Desk Chair".to_string(),
      price: 199.99,
      category: "Furniture".to_string(),
      description: "Ergonomic office chair".to_string(),
      in_stock: false,
      created_at: seed_date(2023, 3, 10),
      updated_at: None,
    },
  ]
}
