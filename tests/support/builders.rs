// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use vitrine::domain::article::{Article, ArticleId, ArticleName, Price};
use vitrine::domain::category::{Category, CategoryId, CategoryName};

pub static BASE_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

pub fn dec(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

pub fn price(raw: &str) -> Price {
    Price::new(dec(raw)).unwrap()
}

pub fn article(id: i64, name: &str, price_raw: &str, category: Option<i64>) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        name: ArticleName::new(name).unwrap(),
        price: price(price_raw),
        category_id: category.map(|c| CategoryId::new(c).unwrap()),
        created_at: *BASE_TIME,
        updated_at: *BASE_TIME,
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
    }
}
