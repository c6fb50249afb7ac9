use blockout_lib::{BlockoutError, DriverError};

#[test]
fn config_error_display_includes_message() {
    let err = BlockoutError::Config("missing chrome table".to_string());

    assert_eq!(format!("{}", err), "Configuration error: missing chrome table");
}

#[test]
fn io_error_display_wraps_source() {
    let io_err = std::io::Error::other("disk full");
    let err: BlockoutError = io_err.into();
    let rendered = format!("{}", err);

    assert!(rendered.starts_with("IO error: "));
    assert!(rendered.contains("disk full"));
}

#[test]
fn driver_query_error_includes_selector() {
    let err: BlockoutError = DriverError::query("~clock", "invalid session id").into();

    assert_eq!(
        format!("{}", err),
        "Driver error: element query failed for selector '~clock': invalid session id"
    );
}

#[test]
fn element_rect_error_includes_element() {
    let err = DriverError::element_rect("0.42-1", "stale element reference");

    assert_eq!(
        format!("{}", err),
        "failed to fetch rectangle for element 0.42-1: stale element reference"
    );
}

#[test]
fn restore_error_exposes_driver_source() {
    use std::error::Error;

    let err = BlockoutError::VisibilityRestore {
        original: true,
        source: DriverError::Settings("timeout".into()),
        action: None,
    };

    assert_eq!(
        format!("{}", err),
        "Failed to restore allowInvisibleElements=true: settings call failed: timeout"
    );
    let source = err.source().expect("restore error has a source");
    assert_eq!(source.to_string(), "settings call failed: timeout");
}
