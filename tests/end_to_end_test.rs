#![allow(missing_docs)]
// End-to-end test: run the demo binary and check its narration.
//
// Exact log text is not a compatibility contract; the assertions pin the
// sequence (each channel fires, the unbound handler is reported, the demo
// exits cleanly) rather than full lines.

use assert_cmd::Command;

#[test]
fn demo_sequence_runs_to_completion() {
    let output = Command::cargo_bin("courier")
        .expect("binary exists")
        .env("RUST_LOG", "debug")
        .output()
        .expect("binary runs");

    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("courier demo starting"));
    assert!(stderr.contains("legacy email delivered"));
    assert!(stderr.contains("legacy sms dispatched"));
    // The unregistered dynamic handler is reported, not fatal.
    assert!(stderr.contains("handler not found: transmit"));
    assert!(stderr.contains("courier demo complete"));
}

#[test]
fn demo_emits_exact_legacy_email_payload() {
    let output = Command::cargo_bin("courier")
        .expect("binary exists")
        .output()
        .expect("binary runs");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "Кому: admin@company.comТема: Важное обновление Вышла новая версия приложения!"
    ));
}
