use super::*;
use crate::config::DEFAULT_PREVIEW_MAX_BYTES;
use crate::console::LogLevel;
use crate::snippets::SnippetId;

fn document(code: &str) -> String {
    match render(code, DEFAULT_PREVIEW_MAX_BYTES).unwrap() {
        RenderResult::Document(doc) => doc,
        RenderResult::Placeholder => panic!("expected a document for {code:?}"),
    }
}

// =============================================================================
// render
// =============================================================================

#[test]
fn empty_code_renders_placeholder() {
    assert_eq!(render("", DEFAULT_PREVIEW_MAX_BYTES).unwrap(), RenderResult::Placeholder);
    assert_eq!(render("  \n\t ", DEFAULT_PREVIEW_MAX_BYTES).unwrap(), RenderResult::Placeholder);
    assert_eq!(RenderResult::Placeholder.html(), PLACEHOLDER);
}

#[test]
fn document_shell_wraps_sanitized_code() {
    let doc = document("<h1>Hello</h1>");
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains(r#"<meta charset="UTF-8">"#));
    assert!(doc.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#));
    assert!(doc.contains("body { margin: 0; padding: 20px; font-family: Arial, sans-serif; }"));
    assert!(doc.contains("<body>\n<h1>Hello</h1>\n</body>"));
}

#[test]
fn event_handler_attributes_are_removed() {
    let doc = document("<img src=x onerror=alert(1)>");
    assert!(!doc.contains("onerror"));
    assert!(!doc.contains("alert"));
    assert!(doc.contains("<img src=\"x\">"));
}

#[test]
fn script_elements_are_removed_with_their_content() {
    let doc = document("<p>hi</p><script>document.cookie</script>");
    assert!(!doc.contains("<script"));
    assert!(!doc.contains("document.cookie"));
    assert!(doc.contains("<p>hi</p>"));
}

#[test]
fn javascript_urls_are_dropped() {
    let doc = document(r#"<a href="javascript:alert(1)">x</a>"#);
    assert!(!doc.contains("javascript:"));
}

#[test]
fn iframes_and_objects_are_not_allowed() {
    let doc = document(r#"<iframe src="https://evil.test"></iframe><object data="x"></object><p>ok</p>"#);
    assert!(!doc.contains("<iframe"));
    assert!(!doc.contains("<object"));
    assert!(doc.contains("<p>ok</p>"));
}

#[test]
fn style_blocks_and_classes_survive() {
    let doc = document(r#"<div class="card" id="main">x</div><style>.card { color: red; }</style>"#);
    assert!(doc.contains(r#"class="card""#));
    assert!(doc.contains(r#"id="main""#));
    assert!(doc.contains("<style>.card { color: red; }</style>"));
}

#[test]
fn form_controls_survive_without_handlers() {
    let doc = document(SnippetId::Form.code());
    assert!(doc.contains("<form"));
    assert!(doc.contains("<textarea"));
    assert!(doc.contains(r#"type="email""#));
    assert!(!doc.contains("<script"));
    assert!(!doc.contains("addEventListener"));
}

#[test]
fn default_snippet_loses_onclick() {
    let doc = document(SnippetId::Default.code());
    assert!(doc.contains("<button>Click Me</button>"));
    assert!(!doc.contains("onclick"));
    assert!(!doc.contains("<!--"));
}

#[test]
fn rendering_is_idempotent() {
    for id in SnippetId::ALL {
        assert_eq!(document(id.code()), document(id.code()));
    }
}

#[test]
fn oversized_code_errors() {
    let err = render("<p>too long</p>", 4).unwrap_err();
    assert!(matches!(err, RenderError::TooLarge { len: 15, max: 4 }));
}

// =============================================================================
// run_code / refresh_preview
// =============================================================================

#[test]
fn run_code_installs_document_and_logs_success() {
    let mut session = SessionState::new();
    session.set_current_code("<p>hi</p>");
    run_code(&mut session, DEFAULT_PREVIEW_MAX_BYTES);

    assert!(session.preview.contains("<p>hi</p>"));
    assert_eq!(session.console.count(LogLevel::Success), 1);
    assert_eq!(session.console.entries().last().unwrap().message, SUCCESS_MESSAGE);
}

#[test]
fn run_code_strips_event_handler_and_logs_one_success() {
    let mut session = SessionState::new();
    session.set_current_code("<img src=x onerror=alert(1)>");
    run_code(&mut session, DEFAULT_PREVIEW_MAX_BYTES);

    assert!(session.preview.contains("<img"));
    assert!(!session.preview.contains("onerror"));
    assert!(!session.preview.contains("alert"));
    assert_eq!(session.console.count(LogLevel::Success), 1);
    assert_eq!(session.console.count(LogLevel::Error), 0);
    assert_eq!(session.console.entries().len(), 1);
}

#[test]
fn run_code_on_empty_editor_shows_placeholder_without_error() {
    let mut session = SessionState::new();
    session.set_current_code("   ");
    run_code(&mut session, DEFAULT_PREVIEW_MAX_BYTES);

    assert_eq!(session.preview, PLACEHOLDER);
    assert_eq!(session.console.count(LogLevel::Error), 0);
}

#[test]
fn run_code_error_keeps_last_good_preview() {
    let mut session = SessionState::new();
    session.set_current_code("<p>good</p>");
    run_code(&mut session, 64);
    let last_good = session.preview.clone();

    session.set_current_code("<p>this source is longer than sixty-four bytes, so it cannot render</p>");
    run_code(&mut session, 64);

    assert_eq!(session.preview, last_good);
    assert_eq!(session.console.count(LogLevel::Error), 1);
    assert!(session.console.entries().last().unwrap().message.starts_with("Error: preview source is"));
}

#[test]
fn run_code_twice_logs_twice_with_same_output() {
    let mut session = SessionState::new();
    session.set_current_code(SnippetId::Navigation.code());
    run_code(&mut session, DEFAULT_PREVIEW_MAX_BYTES);
    let first = session.preview.clone();
    run_code(&mut session, DEFAULT_PREVIEW_MAX_BYTES);

    assert_eq!(session.preview, first);
    assert_eq!(session.console.count(LogLevel::Success), 2);
}

#[test]
fn refresh_logs_run_outcome_then_info() {
    let mut session = SessionState::new();
    session.set_current_code("<p>x</p>");
    refresh_preview(&mut session, DEFAULT_PREVIEW_MAX_BYTES);

    let entries = session.console.entries();
    let tail: Vec<(LogLevel, &str)> = entries[entries.len() - 2..]
        .iter()
        .map(|e| (e.level, e.message.as_str()))
        .collect();
    assert_eq!(tail, vec![(LogLevel::Success, SUCCESS_MESSAGE), (LogLevel::Info, REFRESHED_MESSAGE)]);
}
