//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry and DefaultLogger filtering/formatting.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "galaxy3d::MaterialFactory".to_string(),
        message: "Loaded 3 materials".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Warn.label(), "WARN ");
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_min_severity_is_info() {
    let logger = DefaultLogger::default();
    assert!(!logger.accepts(LogSeverity::Trace));
    assert!(!logger.accepts(LogSeverity::Debug));
    assert!(logger.accepts(LogSeverity::Info));
    assert!(logger.accepts(LogSeverity::Error));
}

#[test]
fn test_default_logger_custom_min_severity() {
    let logger = DefaultLogger::new(LogSeverity::Trace);
    assert!(logger.accepts(LogSeverity::Trace));

    let logger = DefaultLogger::new(LogSeverity::Error);
    assert!(!logger.accepts(LogSeverity::Warn));
}

#[test]
fn test_format_entry_without_file_line() {
    let text = DefaultLogger::format_entry(&entry(LogSeverity::Info, None, None));
    assert!(text.contains("[INFO ]"));
    assert!(text.contains("[galaxy3d::MaterialFactory]"));
    assert!(text.ends_with("Loaded 3 materials"));
}

#[test]
fn test_format_entry_with_file_line() {
    let text = DefaultLogger::format_entry(&entry(LogSeverity::Error, Some("factory.rs"), Some(42)));
    assert!(text.contains("[ERROR]"));
    assert!(text.ends_with("(factory.rs:42)"));
}

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger::new(LogSeverity::Trace);
    logger.log(&entry(LogSeverity::Trace, None, None));
    logger.log(&entry(LogSeverity::Warn, None, None));
    logger.log(&entry(LogSeverity::Error, Some("test.rs"), Some(1)));
}

#[test]
fn test_custom_logger_trait_object() {
    use std::sync::{Arc, Mutex};

    struct CountingLogger {
        count: Arc<Mutex<usize>>,
    }

    impl Logger for CountingLogger {
        fn log(&self, _entry: &LogEntry) {
            *self.count.lock().unwrap() += 1;
        }
    }

    let count = Arc::new(Mutex::new(0));
    let logger: Box<dyn Logger> = Box::new(CountingLogger { count: count.clone() });
    logger.log(&entry(LogSeverity::Info, None, None));
    logger.log(&entry(LogSeverity::Debug, None, None));
    assert_eq!(*count.lock().unwrap(), 2);
}
