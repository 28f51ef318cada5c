/// One currency's buy/sell quote as published in a single rate block.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRecord {
    pub symbol: String,
    pub name: String,
    pub buy_rate: f64,
    pub sell_rate: f64,
}

impl RateRecord {
    pub fn new(symbol: &str, buy_rate: f64, sell_rate: f64) -> Self {
        RateRecord {
            symbol: symbol.to_string(),
            name: currency_name(symbol).to_string(),
            buy_rate,
            sell_rate,
        }
    }
}

const CURRENCY_NAMES: &[(&str, &str)] = &[
    ("USD", "US Dollars"),
    ("EUR", "Euros"),
    ("RUB", "Russian Rubles"),
];

/// Display name for a currency code, falling back to the code itself.
pub fn currency_name(code: &str) -> &str {
    CURRENCY_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}
