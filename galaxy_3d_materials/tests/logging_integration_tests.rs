//! Integration tests for the logging system
//!
//! Verify that the factory reports script problems through the engine
//! logger.
//!
//! Run with: cargo test --test logging_integration_tests


use galaxy_3d_materials::galaxy3d::{Engine, Error, Factory};
use galaxy_3d_materials::galaxy3d::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use galaxy_3d_materials::galaxy3d::script::ScriptFile;
use platform_test_utils::RecordingPlatform;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn fixture_platform() -> Box<RecordingPlatform> {
    Box::new(RecordingPlatform::new().0)
}

fn material_script(source: &str) -> ScriptFile {
    ScriptFile::parse("test.material", source).unwrap()
}

fn entries_with(entries: &[LogEntry], severity: LogSeverity) -> Vec<LogEntry> {
    entries.iter().filter(|e| e.severity == severity).cloned().collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_unsupported_root_logs_warning() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let factory = Factory::new(fixture_platform()).unwrap();
    assert_eq!(factory.material_count(), 4);

    {
        let captured = entries.lock().unwrap();
        let warnings = entries_with(&captured, LogSeverity::Warn);
        assert!(warnings.iter().any(|e| {
            e.source == "galaxy3d::MaterialFactory"
                && e.message.contains("particle_system")
                && e.message.contains("wet_rock.material")
        }));
        assert!(entries_with(&captured, LogSeverity::Error).is_empty());

        let infos = entries_with(&captured, LogSeverity::Info);
        assert!(infos.iter().any(|e| e.message == "Loaded 2 shader sets and 4 materials"));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_missing_parent_logs_error() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let result = Factory::from_scripts(
        fixture_platform(),
        &[],
        &[material_script("material B { parent missing }")],
    );
    assert!(matches!(result, Err(Error::ParentNotFound { .. })));

    {
        let captured = entries.lock().unwrap();
        let errors = entries_with(&captured, LogSeverity::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Unable to find parent 'missing' for material instance 'B'"
        );
        // Logged where the error is raised, not in the error helpers
        let file = errors[0].file.unwrap();
        assert!(file.ends_with("factory.rs"), "logged at {}", file);
        assert!(errors[0].line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_duplicate_material_logged_at_factory() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let result = Factory::from_scripts(
        fixture_platform(),
        &[],
        &[material_script("material a { }\nmaterial a { }")],
    );
    assert!(matches!(result, Err(Error::DuplicateName { .. })));

    {
        let captured = entries.lock().unwrap();
        let errors = entries_with(&captured, LogSeverity::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Duplicate material name 'a'");
        assert!(errors[0].file.is_some_and(|file| file.ends_with("factory.rs")));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_materialization_logs() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut factory = Factory::from_scripts(
        fixture_platform(),
        &[],
        &[material_script("material m { pass { diffuse_map m.png } }")],
    ).unwrap();

    factory.request_material("m", "fixed_function").unwrap();
    factory.request_material("m", "fixed_function").unwrap();

    {
        let captured = entries.lock().unwrap();
        let debug = entries_with(&captured, LogSeverity::Debug);
        assert_eq!(
            debug.iter().filter(|e| e.message.starts_with("Materialized 'm'")).count(),
            1
        );
        let trace = entries_with(&captured, LogSeverity::Trace);
        assert_eq!(trace.len(), 1);
        assert!(trace[0].message.contains("Cache hit"));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_default_logger_filter() {
    let logger = DefaultLogger::new(LogSeverity::Warn);
    assert!(!logger.accepts(LogSeverity::Info));
    assert!(logger.accepts(LogSeverity::Warn));
    assert!(logger.accepts(LogSeverity::Error));

    // Default logger accepts INFO and above
    assert!(DefaultLogger::default().accepts(LogSeverity::Info));
    assert!(!DefaultLogger::default().accepts(LogSeverity::Debug));
}
