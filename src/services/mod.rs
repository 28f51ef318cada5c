pub mod errors;
pub mod files;
pub mod market_data;
pub mod parsers;
pub mod rates;
pub mod shared;
