// src/logging/mod.rs
use log::LevelFilter;

/// Parse a level name, falling back to `default` on anything unknown.
pub fn parse_level(name: Option<&str>, default: LevelFilter) -> LevelFilter {
    match name.map(|n| n.to_lowercase()) {
        Some(n) => n.parse().unwrap_or(default),
        None => default,
    }
}

// Configure logging to stderr so stdout only carries passwords
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level(Some("DEBUG"), LevelFilter::Info), LevelFilter::Debug);
        assert_eq!(parse_level(Some("off"), LevelFilter::Info), LevelFilter::Off);
        assert_eq!(parse_level(Some("chatty"), LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(parse_level(None, LevelFilter::Error), LevelFilter::Error);
    }

    #[test]
    fn init_enables_warnings() {
        init(LevelFilter::Warn);
        assert!(log::max_level() >= LevelFilter::Warn);
    }
}
