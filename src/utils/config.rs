//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default endpoint serving the raw sales records
pub const DEFAULT_SOURCE_URL: &str = "https://labdados.com/produtos";

/// Default timeout for source requests
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Tried in order; the source publishes day-first dates
pub const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d"];

// Seller ranking bounds offered to the caller
pub const MIN_TOP_SELLERS: usize = 2;
pub const MAX_TOP_SELLERS: usize = 10;
pub const DEFAULT_TOP_SELLERS: usize = 5;

pub const DEFAULT_TOP_STATES: usize = 5;

/// Widest month span that monthly views zero-fill; wider spans keep only observed months
pub const MAX_FILLED_MONTHS: i64 = 240;

// Years selectable in the dashboard
pub const MIN_YEAR: i32 = 2020;
pub const MAX_YEAR: i32 = 2023;

/// Region name meaning "every state"
pub const ALL_REGIONS: &str = "Brasil";

// Field names for record parsing (source columns first, English aliases after)
pub const PRICE_FIELDS: &[&str] = &["Preço", "price"];
pub const DATE_FIELDS: &[&str] = &["Data da Compra", "purchase_date"];
pub const STATE_FIELDS: &[&str] = &["Local da compra", "state"];
pub const CATEGORY_FIELDS: &[&str] = &["Categoria do Produto", "category"];
pub const SELLER_FIELDS: &[&str] = &["Vendedor", "seller"];
pub const LATITUDE_FIELDS: &[&str] = &["lat", "latitude"];
pub const LONGITUDE_FIELDS: &[&str] = &["lon", "longitude"];
pub const PRODUCT_FIELDS: &[&str] = &["Produto", "product"];
pub const FREIGHT_FIELDS: &[&str] = &["Frete", "freight"];
pub const RATING_FIELDS: &[&str] = &["Avaliação da compra", "rating"];
pub const PAYMENT_TYPE_FIELDS: &[&str] = &["Tipo de pagamento", "payment_type"];
pub const INSTALLMENTS_FIELDS: &[&str] = &["Quantidade de parcelas", "installments"];
