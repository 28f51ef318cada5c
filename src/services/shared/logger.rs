use tracing::Level;

use super::env::get_env_variable;

fn parse_level(verbosity: &str) -> Option<Level> {
    match verbosity.to_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" => Some(Level::WARN),
        "ERROR" => Some(Level::ERROR),
        _ => None,
    }
}

/// Logs go to stderr so stdout only carries the rates table and notices.
pub fn init_logger() {
    let verbosity = get_env_variable("VERBOSITY").unwrap_or_else(|| "INFO".to_string());
    let level = parse_level(&verbosity).unwrap_or_else(|| {
        eprintln!(
            "Invalid verbosity level '{}', defaulting to INFO",
            verbosity
        );
        Level::INFO
    });

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_case_insensitive() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("Warn"), Some(Level::WARN));
        assert_eq!(parse_level("loud"), None);
    }
}
