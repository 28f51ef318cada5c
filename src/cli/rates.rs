use std::io::{self, Write};

use chrono::{Local, NaiveDateTime};
use spinners_rs::{Spinner, Spinners};
use tracing::debug;

use crate::{
    models::rate_record::RateRecord,
    services::{
        market_data::humo::RatesSource,
        parsers::MarkupLayout,
        rates::fetch_humo_rates,
        shared::constants::TIMESTAMP_FORMAT,
    },
};

const BANNER_WIDTH: usize = 60;

// Debug keeps a fractional part on whole numbers: 10.0 stays "10.0"
fn format_rate(rate: f64) -> String {
    format!("{:?}", rate)
}

pub fn format_rates_table(records: &[RateRecord], generated_at: &NaiveDateTime) -> String {
    let heavy_rule = "=".repeat(BANNER_WIDTH);
    let light_rule = "-".repeat(BANNER_WIDTH);

    let mut lines = vec![
        heavy_rule.clone(),
        format!(
            "HUMO.TJ Currency Rates - {}",
            generated_at.format(TIMESTAMP_FORMAT)
        ),
        heavy_rule,
        format!("{:<20} {:<12} {:<12}", "Currency", "Buy", "Sell"),
        light_rule,
    ];

    for record in records {
        let currency_info = format!("{} {}", record.symbol, record.name);
        lines.push(format!(
            "{:<20} {:<12} {:<12}",
            currency_info,
            format_rate(record.buy_rate),
            format_rate(record.sell_rate)
        ));
    }

    lines.join("\n")
}

pub fn display_rates(records: &[RateRecord], out: &mut impl Write) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No data to display");
    }

    let now = Local::now().naive_local();
    writeln!(out, "{}", format_rates_table(records, &now))
}

/// Fetches, extracts and displays the rates.
///
/// `None` means the run failed, including a rates section without any rate blocks.
/// Every failure writes exactly one line to `out` and never a partial table.
pub async fn get_humo_rates(
    source: &RatesSource,
    layout: &MarkupLayout,
    out: &mut impl Write,
) -> io::Result<Option<Vec<RateRecord>>> {
    let mut sp = Spinner::new(Spinners::Point, "Fetching currency rates from HUMO.TJ...");
    sp.start();
    let result = fetch_humo_rates(source, layout).await;
    sp.stop();
    println!();

    match result {
        Ok(records) if records.is_empty() => {
            debug!("Rates section holds no rate blocks");
            writeln!(out, "Failed to retrieve currency data: no rate blocks found")?;
            Ok(None)
        }
        Ok(records) => {
            display_rates(&records, out)?;
            Ok(Some(records))
        }
        Err(e) => {
            debug!(transport = e.is_transport(), "Rates run failed");
            writeln!(out, "Failed to retrieve currency data: {}", e)?;
            Ok(None)
        }
    }
}
