//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.initial_buffer_capacity, MIN_BUFFER_CAPACITY);
    assert_eq!(cfg.max_buffer_cells, MAX_BUFFER_CELLS);
    assert!(GlobalConfig::new(cfg.initial_buffer_capacity, cfg.max_buffer_cells).is_ok());
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(1, 1024).unwrap_err(),
        ConfigError::InvalidCapacity(1)
    );
    assert_eq!(
        GlobalConfig::new(64, 100).unwrap_err(),
        ConfigError::InvalidCellLimit {
            limit: 100,
            required: 4096
        }
    );
}

#[test]
fn new_rejects_overflowing_capacity() {
    assert_eq!(
        GlobalConfig::new(usize::MAX, usize::MAX).unwrap_err(),
        ConfigError::InvalidCapacity(usize::MAX)
    );
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidCapacity(0)
        .to_string()
        .contains("initial_buffer_capacity"));
    let err = ConfigError::InvalidCellLimit {
        limit: 1,
        required: 4,
    };
    assert!(err.to_string().contains("max_buffer_cells"));
}
