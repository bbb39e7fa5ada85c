//! Conformance: verification failures are logged, not raised.
//!
//! Captures `tracing` output with a `tracing-subscriber` fmt layer and
//! checks that rejections are reported without leaking the secret.

use std::io;
use std::sync::{Arc, Mutex};

use cookie_sign_core::{sign, unsign, CookieSigner, SignerConfig};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("cookie_sign_core=debug"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn conformance_missing_demarcator_logged() {
    let (result, logs) = with_captured_logs(|| unsign("plain-value", "top-secret"));
    assert_eq!(result, None);
    assert!(logs.contains("no demarcator"), "logs: {logs}");
    assert!(!logs.contains("top-secret"));
}

#[test]
fn conformance_mismatch_logged_without_secret() {
    let signed = sign("user=frank", "top-secret");
    let (result, logs) = with_captured_logs(|| unsign(&signed, "not-the-secret"));
    assert_eq!(result, None);
    assert!(logs.contains("signature mismatch"), "logs: {logs}");
    assert!(!logs.contains("top-secret"));
    assert!(!logs.contains("not-the-secret"));
}

#[test]
fn conformance_successful_verify_is_quiet() {
    let signed = sign("user=grace", "top-secret");
    let (result, logs) = with_captured_logs(|| unsign(&signed, "top-secret"));
    assert_eq!(result.as_deref(), Some("user=grace"));
    assert!(logs.is_empty(), "unexpected logs: {logs}");
}

#[test]
fn conformance_signer_construction_logged() {
    let (signer, logs) =
        with_captured_logs(|| CookieSigner::from_config(&SignerConfig::new("top-secret")));
    assert!(signer.is_ok());
    assert!(logs.contains("cookie signer configured"), "logs: {logs}");
    assert!(logs.contains("sha256"));
    assert!(!logs.contains("top-secret"));
}
