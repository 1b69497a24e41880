#![allow(dead_code)]

use chrono::NaiveDate;
use sales_dash::records::{Coordinates, Price, TransactionRecord};

/// Record with the fields aggregation reads
pub fn sale(
    price: f64,
    date: &str,
    state: &str,
    category: &str,
    seller: &str,
) -> TransactionRecord {
    let coordinates = match state {
        "SP" => Coordinates::new(-22.19, -48.79),
        "RJ" => Coordinates::new(-22.25, -42.66),
        "MG" => Coordinates::new(-18.10, -44.38),
        "BA" => Coordinates::new(-13.29, -41.71),
        "RS" => Coordinates::new(-30.17, -53.50),
        _ => Coordinates::new(0.0, 0.0),
    };
    TransactionRecord::new(
        Price::from_decimal(price).unwrap(),
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        state,
        category,
        seller,
        coordinates,
    )
}

/// Three-record scenario: SP/A/X 100, SP/B/Y 50, RJ/A/X 200
pub fn scenario() -> Vec<TransactionRecord> {
    vec![
        sale(100.0, "2023-01-10", "SP", "A", "X"),
        sale(50.0, "2023-01-20", "SP", "B", "Y"),
        sale(200.0, "2023-02-05", "RJ", "A", "X"),
    ]
}

/// A larger mixed set across regions, years and sellers
pub fn mixed() -> Vec<TransactionRecord> {
    vec![
        sale(92.45, "2020-01-01", "BA", "livros", "Thiago Silva"),
        sale(1304.97, "2020-03-15", "SP", "eletronicos", "Mariana Ferreira"),
        sale(33.10, "2021-07-21", "RS", "brinquedos", "Thiago Silva"),
        sale(0.99, "2021-07-30", "SP", "livros", "Camila Ribeiro"),
        sale(250.00, "2022-11-02", "MG", "moveis", "Mariana Ferreira"),
        sale(17.35, "2022-12-24", "RJ", "brinquedos", "Bruno Rodrigues"),
        sale(480.80, "2023-05-06", "SP", "eletronicos", "Camila Ribeiro"),
    ]
}
