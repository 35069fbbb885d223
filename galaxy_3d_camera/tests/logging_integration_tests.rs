//! Integration tests for camera logging
//!
//! These tests verify that camera diagnostics reach a custom logger.
//!
//! Run with: cargo test --test logging_integration_tests

use galaxy_3d_camera::galaxy3d::{self, log::{Logger, LogEntry, LogSeverity}};
use galaxy_3d_camera::galaxy3d::camera::{Camera, CameraDesc};
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
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    galaxy3d::log::set_logger(test_logger);

    galaxy3d::log::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    galaxy3d::log::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    galaxy3d::log::reset_logger();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Test info message");
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[1].file, None);
}

#[test]
#[serial]
fn test_integration_invalid_desc_is_logged_with_location() {
    let (test_logger, entries) = TestLogger::new();
    galaxy3d::log::set_logger(test_logger);

    let desc = CameraDesc { aspect_ratio: -1.0, ..Default::default() };
    let result = Camera::from_desc(desc);

    galaxy3d::log::reset_logger();

    assert!(matches!(result, Err(galaxy3d::Error::InvalidAspectRatio(_))));

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let entry = &captured[0];
    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.source, "galaxy3d::Camera");
    assert!(entry.message.contains("Invalid aspect ratio"));
    assert!(entry.file.is_some());
    assert!(entry.line.is_some());
}

#[test]
#[serial]
fn test_integration_valid_desc_logs_no_error() {
    let (test_logger, entries) = TestLogger::new();
    galaxy3d::log::set_logger(test_logger);

    let camera = Camera::from_desc(CameraDesc::default());

    galaxy3d::log::reset_logger();

    assert!(camera.is_ok());
    let captured = entries.lock().unwrap();
    assert!(captured.iter().all(|e| e.severity < LogSeverity::Warn));
}

#[test]
#[serial]
fn test_integration_queries_do_not_log() {
    let (test_logger, entries) = TestLogger::new();
    galaxy3d::log::set_logger(test_logger);

    let mut camera = Camera::new();
    camera.set_clip_planes(0.1, 500.0);
    let _ = camera.frustum();
    let _ = camera.project(glam::Vec3::new(0.0, 0.0, -10.0));

    galaxy3d::log::reset_logger();

    assert!(entries.lock().unwrap().is_empty());
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    galaxy3d::log::set_logger(test_logger);
    galaxy3d::log::reset_logger();

    // Goes to the default console logger, not the capture
    galaxy3d::log::log(LogSeverity::Info, "test::reset", "after reset".to_string());

    assert!(entries.lock().unwrap().is_empty());
}
