//! # Error Tests
//!
//! Messages and process exit codes for `BenchError`.

use accessbench_core::BenchError;

#[test]
fn test_allocation_display() {
    let err = BenchError::Allocation {
        what: "record array",
        bytes: 134_217_728,
    };
    assert_eq!(
        err.to_string(),
        "memory allocation failed for record array (134217728 bytes)"
    );
}

#[test]
fn test_invalid_config_display() {
    let err = BenchError::InvalidConfig("stride must be non-zero".to_string());
    assert_eq!(
        err.to_string(),
        "invalid configuration: stride must be non-zero"
    );
}

#[test]
fn test_exit_codes() {
    let alloc = BenchError::Allocation {
        what: "index buffer",
        bytes: 8,
    };
    assert_eq!(alloc.exit_code(), 1);
    assert_eq!(BenchError::InvalidConfig(String::new()).exit_code(), 2);
    assert_eq!(BenchError::Output(String::new()).exit_code(), 1);
}

#[test]
fn test_output_display() {
    let err = BenchError::Output("broken pipe".to_string());
    assert_eq!(err.to_string(), "failed to write report: broken pipe");
}

#[test]
fn test_error_trait_object() {
    let err: Box<dyn std::error::Error> = Box::new(BenchError::InvalidConfig("x".into()));
    assert!(err.to_string().contains("invalid configuration"));
}
