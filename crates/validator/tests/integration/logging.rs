//! The engine's tracing output, captured through a fmt subscriber.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use rulekit_validator::RuleEngine;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(filter: &str, run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(captured.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    captured.text()
}

#[test]
fn rejected_rule_is_logged_inside_span() {
    let engine = RuleEngine::default();
    let logs = capture("rulekit_validator=trace", || {
        let _ = engine.validate("shoeSize", &json!("42"), &json!(null), None);
    });

    assert!(logs.contains("rule.validate"), "{logs}");
    assert!(logs.contains("shoeSize"), "{logs}");
    assert!(logs.contains("rule rejected"), "{logs}");
    assert!(logs.contains("unknown_rule"), "{logs}");

    let debug_only = capture("rulekit_validator=debug", || {
        let _ = engine.validate("shoeSize", &json!("42"), &json!(null), None);
    });
    assert!(debug_only.contains("rule rejected"), "{debug_only}");
}

#[test]
fn outcomes_are_trace_only() {
    let engine = RuleEngine::default();

    let quiet = capture("rulekit_validator=debug", || {
        let _ = engine.validate("alpha", &json!("abc"), &json!(null), None);
    });
    assert!(!quiet.contains("rule evaluated"), "{quiet}");

    let verbose = capture("rulekit_validator=trace", || {
        let _ = engine.validate("alpha", &json!("abc"), &json!(null), None);
    });
    assert!(verbose.contains("rule evaluated"), "{verbose}");
    assert!(verbose.contains("valid=true"), "{verbose}");
}
