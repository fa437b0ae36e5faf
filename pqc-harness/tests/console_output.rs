//! Console output under the default settings: recovered errors produce one
//! stdout line each and nothing on the log stream

use pqc_harness::config::parse_log_level;
use pqc_harness::{Dispatcher, HarnessSettings};
use pqc_primitives::PqcryptoProvider;
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

/// Shared in-memory sink for the log subscriber
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run a script with logging configured the way `main` does for `settings`
fn run_logged(script: &[u8], settings: HarnessSettings) -> (String, String) {
    let logs = LogBuffer::default();
    let sink = logs.clone();
    let level = parse_log_level(&settings.log_level).unwrap();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    let provider = PqcryptoProvider::new();
    let output = tracing::subscriber::with_default(subscriber, || {
        let mut dispatcher =
            Dispatcher::new(&provider, Cursor::new(script.to_vec()), Vec::new(), settings);
        dispatcher.run().unwrap();
        dispatcher.into_output()
    });

    (String::from_utf8(output).unwrap(), logs.contents())
}

#[test]
fn test_invalid_choices_report_one_line_each() {
    let (output, logs) = run_logged(b"9\n2\n7\n1\nhi\n4\n", HarnessSettings::default());

    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert!(output.contains("signature valid: true"));
    assert!(logs.is_empty(), "unexpected log output: {}", logs);
}

#[test]
fn test_workflow_failure_reports_one_line() {
    let (output, logs) = run_logged(b"3\n\xff\xfe\n4\n", HarnessSettings::default());

    assert_eq!(output.lines().filter(|line| line.contains("Error:")).count(), 1);
    assert!(logs.is_empty(), "unexpected log output: {}", logs);
}

#[test]
fn test_debug_level_still_traces_recovered_errors() {
    let settings = HarnessSettings {
        log_level: "debug".to_string(),
        ..Default::default()
    };
    let (_, logs) = run_logged(b"9\n4\n", settings);

    assert!(logs.contains("Invalid selection '9' for main menu"));
}
