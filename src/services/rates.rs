use crate::{
    models::rate_record::RateRecord,
    services::{
        errors::RatesError,
        market_data::humo::{fetch_rates_page, RatesSource},
        parsers::{extract_rate_records, MarkupLayout},
    },
};

pub async fn fetch_humo_rates(
    source: &RatesSource,
    layout: &MarkupLayout,
) -> Result<Vec<RateRecord>, RatesError> {
    let body = fetch_rates_page(source).await?;
    extract_rate_records(&body, layout)
}
