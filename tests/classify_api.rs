//! Public-API integration tests: the crate surface a capture collaborator
//! uses, exercised through serde payloads the way the capture handler and
//! pre-fill handler exchange them.

use snipvault_lang::{classify, classify_quick_hint, Evidence, Mode, FALLBACK_LANGUAGE};

#[test]
fn capture_payload_round_trips_through_json() {
    let payload = r#"{
        "text": "def handler(event):\n    return event",
        "address": "https://docs.example/handlers.py",
        "title": "Handlers - docs"
    }"#;
    let evidence: Evidence = serde_json::from_str(payload).unwrap();
    assert_eq!(classify(&evidence, Mode::Full), "python");

    let back = serde_json::to_value(&evidence).unwrap();
    assert_eq!(back["address"], "https://docs.example/handlers.py");
}

#[test]
fn mode_serializes_as_lowercase_names() {
    assert_eq!(serde_json::to_string(&Mode::Full).unwrap(), "\"full\"");
    assert_eq!(serde_json::to_string(&Mode::Quick).unwrap(), "\"quick\"");
    let mode: Mode = serde_json::from_str("\"quick\"").unwrap();
    assert_eq!(mode, Mode::Quick);
}

#[test]
fn full_mode_prefers_page_evidence_over_body() {
    let evidence = Evidence {
        text: "console.log('hello');".to_string(),
        address: "https://gist.example/snippet.go".to_string(),
        title: String::new(),
    };
    assert_eq!(classify(&evidence, Mode::Full), "go");
    // The same evidence in quick mode only sees the body.
    assert_eq!(classify(&evidence, Mode::Quick), "javascript");
}

#[test]
fn quick_hint_backs_off_for_prose_so_user_choice_survives() {
    assert_eq!(classify_quick_hint("meeting notes for tuesday"), None);
    assert_eq!(
        classify_quick_hint("```sql\nSELECT 1;\n```"),
        Some("sql".to_string())
    );
}

#[test]
fn classifier_is_stateless_across_interleaved_calls() {
    let rust_evidence = Evidence::from_text("fn run() {}");
    let plain_evidence = Evidence::from_text("plain words");
    for _ in 0..3 {
        assert_eq!(classify(&rust_evidence, Mode::Quick), "rust");
        assert_eq!(classify(&plain_evidence, Mode::Quick), FALLBACK_LANGUAGE);
    }
}
