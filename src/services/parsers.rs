use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::{
    models::rate_record::RateRecord,
    services::{
        errors::RatesError,
        shared::constants::{BLOCK_CLASS, SECTION_CLASS},
    },
};

static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency code pattern"));

/// Class names of the `div`s the extractor depends on. Everything markup-specific goes through this.
#[derive(Debug, Clone)]
pub struct MarkupLayout {
    pub section_class: String,
    pub block_class: String,
}

impl Default for MarkupLayout {
    fn default() -> Self {
        MarkupLayout {
            section_class: SECTION_CLASS.to_string(),
            block_class: BLOCK_CLASS.to_string(),
        }
    }
}

fn class_selector(class: &str) -> Result<Selector, RatesError> {
    Selector::parse(&format!("div.{}", class)).map_err(|_| RatesError::StructureNotFound {
        class: class.to_string(),
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// "1 USD" -> "USD"
pub fn parse_currency_code(text: &str) -> Result<String, RatesError> {
    let code = text
        .split_whitespace()
        .last()
        .ok_or_else(|| RatesError::Parsing {
            field: "currency",
            value: text.to_string(),
        })?;

    if !CURRENCY_CODE.is_match(code) {
        warn!(code, "Unexpected currency code format");
    }
    Ok(code.to_string())
}

pub fn parse_rate(field: &'static str, text: &str) -> Result<f64, RatesError> {
    text.trim().parse::<f64>().map_err(|_| RatesError::Parsing {
        field,
        value: text.to_string(),
    })
}

/// Reads every rate block of the rates section in document order.
///
/// Blocks with fewer than three child elements are skipped. The first unparseable
/// rate aborts the whole extraction.
pub fn extract_rate_records(
    html: &str,
    layout: &MarkupLayout,
) -> Result<Vec<RateRecord>, RatesError> {
    let document = Html::parse_document(html);
    let section_selector = class_selector(&layout.section_class)?;
    let block_selector = class_selector(&layout.block_class)?;

    let section = document
        .select(&section_selector)
        .next()
        .ok_or_else(|| RatesError::StructureNotFound {
            class: layout.section_class.clone(),
        })?;

    let mut records = vec![];
    for (index, block) in section.select(&block_selector).enumerate() {
        let fields: Vec<String> = block
            .children()
            .filter_map(ElementRef::wrap)
            .map(element_text)
            .collect();

        if fields.len() < 3 {
            warn!(index, children = fields.len(), "Skipping incomplete rate block");
            continue;
        }

        let symbol = parse_currency_code(&fields[0])?;
        let buy_rate = parse_rate("buy rate", &fields[1])?;
        let sell_rate = parse_rate("sell rate", &fields[2])?;

        records.push(RateRecord::new(&symbol, buy_rate, sell_rate));
    }

    debug!(count = records.len(), "Extracted rate records");
    Ok(records)
}
