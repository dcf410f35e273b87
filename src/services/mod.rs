pub mod date_aligner;
pub mod error;
pub mod password;
pub mod record_enricher;
pub mod series_fetcher;
pub mod stock_history;
pub mod stock_lookup;
pub mod stock_store;

#[cfg(test)]
pub mod memory_store;

pub use error::ServiceError;
pub use stock_store::{PgStockStore, StockStore};
