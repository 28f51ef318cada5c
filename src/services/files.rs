use std::path::Path;

use anyhow::Context;
use chrono::Local;
use csv::Writer;
use serde::Serialize;
use tracing::debug;

use crate::{models::rate_record::RateRecord, services::shared::constants::TIMESTAMP_FORMAT};

#[derive(Debug, Serialize)]
struct RateRow<'a> {
    symbol: &'a str,
    name: &'a str,
    buy_rate: f64,
    sell_rate: f64,
    timestamp: &'a str,
}

pub fn export_rates_csv(records: &[RateRecord], path: &Path, timestamp: &str) -> anyhow::Result<()> {
    let mut wtr = Writer::from_path(path)
        .with_context(|| format!("Couldn't create {}", path.display()))?;

    for record in records {
        wtr.serialize(RateRow {
            symbol: &record.symbol,
            name: &record.name,
            buy_rate: record.buy_rate,
            sell_rate: record.sell_rate,
            timestamp,
        })
        .with_context(|| format!("Couldn't write {} rate to {}", record.symbol, path.display()))?;
    }

    wtr.flush()?;

    Ok(())
}

/// Overwrites `path` with one row per record, all stamped with the same capture time.
pub fn save_rates_csv(records: &[RateRecord], path: &Path) -> anyhow::Result<()> {
    if records.is_empty() {
        println!("No data to save");
        return Ok(());
    }

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    export_rates_csv(records, path, &timestamp)?;
    debug!(rows = records.len(), %timestamp, "Rates written");

    println!("Data saved to file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn sample_records() -> Vec<RateRecord> {
        vec![
            RateRecord::new("USD", 10.5, 10.8),
            RateRecord::new("EUR", 12.0, 12.35),
            RateRecord::new("GBP", 14.1, 14.6),
        ]
    }

    #[test]
    fn saved_file_reads_back_with_shared_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("humo_rates.csv");
        let records = sample_records();

        save_rates_csv(&records, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            ["symbol", "name", "buy_rate", "sell_rate", "timestamp"]
        );

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());

        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(&row[0], record.symbol);
            assert_eq!(&row[1], record.name);
            assert_eq!(row[2].parse::<f64>().unwrap(), record.buy_rate);
            assert_eq!(row[3].parse::<f64>().unwrap(), record.sell_rate);
        }

        let timestamp = &rows[0][4];
        assert!(!timestamp.is_empty());
        assert!(rows.iter().all(|row| &row[4] == timestamp));
    }

    #[test]
    fn writes_plain_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.csv");

        export_rates_csv(&sample_records()[..1], &path, "2024-05-01 09:30:00").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "symbol,name,buy_rate,sell_rate,timestamp\nUSD,US Dollars,10.5,10.8,2024-05-01 09:30:00\n"
        );
    }

    #[test]
    fn quotes_names_containing_the_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.csv");
        let record = RateRecord {
            symbol: "XAU".to_string(),
            name: "Gold, troy ounce".to_string(),
            buy_rate: 1.0,
            sell_rate: 2.0,
        };

        export_rates_csv(&[record], &path, "2024-05-01 09:30:00").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("XAU,\"Gold, troy ounce\",1.0,2.0,"));
    }

    #[test]
    fn overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("humo_rates.csv");
        fs::write(&path, "old\nold\nold\nold\nold\nold\n").unwrap();

        save_rates_csv(&sample_records()[..1], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("old"));
    }

    #[test]
    fn empty_records_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("humo_rates.csv");

        save_rates_csv(&[], &path).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("humo_rates.csv");

        assert!(save_rates_csv(&sample_records(), &path).is_err());
    }
}
