use std::time::Duration;

pub const HUMO_URL: &str = "https://humo.tj/ru/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// markup of the rates section on humo.tj
pub const SECTION_CLASS: &str = "kursHUMO";
pub const BLOCK_CLASS: &str = "kursBody";

pub const DEFAULT_OUT_FILE: &str = "humo_rates.csv";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
