use super::*;

fn names(entries: &[&PromptEntry]) -> Vec<String> {
    entries.iter().map(|p| p.name.clone()).collect()
}

fn new_prompt(name: &str, category: &str, description: &str) -> NewPrompt {
    NewPrompt {
        name: name.into(),
        category: category.into(),
        description: description.into(),
        template: "Create a pricing table".into(),
    }
}

// =============================================================================
// SessionState basics
// =============================================================================

#[test]
fn new_session_defaults() {
    let s = SessionState::new();
    assert_eq!(s.language, Language::Html);
    assert!(!s.annotations_visible);
    assert!(s.chat_history.is_empty());
    assert!(s.current_code.is_empty());
    assert_eq!(s.saved_prompts.len(), 6);
    assert_eq!(s.preview, crate::services::preview::PLACEHOLDER);
}

#[test]
fn default_prompts_have_sequential_ids() {
    let ids: Vec<u64> = default_prompts().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn chat_history_preserves_order_and_sender() {
    let mut s = SessionState::new();
    s.append_chat_message("create a form", Sender::User);
    s.append_chat_message("I'll build a form", Sender::Ai);

    assert_eq!(s.chat_history.len(), 2);
    assert_eq!(s.chat_history[0].sender, Sender::User);
    assert_eq!(s.chat_history[1].text, "I'll build a form");
}

#[test]
fn toggle_annotations_flips_and_reports() {
    let mut s = SessionState::new();
    assert!(s.toggle_annotations());
    assert!(s.annotations_visible);
    assert!(!s.toggle_annotations());
    assert!(!s.annotations_visible);
}

#[test]
fn install_snippet_replaces_code_and_resets_language() {
    let mut s = SessionState::new();
    s.set_current_code("old");
    s.set_language(Language::Javascript);
    s.install_snippet(SnippetId::Animation);

    assert_eq!(s.current_code, SnippetId::Animation.code());
    assert_eq!(s.language, Language::Html);
}

#[test]
fn language_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Language::Javascript).unwrap(), "\"javascript\"");
    let lang: Language = serde_json::from_str("\"css\"").unwrap();
    assert_eq!(lang, Language::Css);
}

#[test]
fn snapshot_omits_preview_document() {
    let json = serde_json::to_value(SessionState::new()).unwrap();
    assert!(json.get("preview").is_none());
    assert_eq!(json["language"], "html");
    assert_eq!(json["saved_prompts"].as_array().unwrap().len(), 6);
}

// =============================================================================
// add_saved_prompt
// =============================================================================

#[test]
fn add_saved_prompt_appends_with_next_id() {
    let mut s = SessionState::new();
    let entry = s
        .add_saved_prompt(new_prompt("  Pricing Table ", "layout", " Three tiers "))
        .unwrap();
    assert_eq!(entry.id, 7);
    assert_eq!(entry.name, "Pricing Table");
    assert_eq!(entry.description, "Three tiers");
    assert_eq!(s.saved_prompts.len(), 7);
    assert_eq!(s.saved_prompts[6].template, "Create a pricing table");
}

#[test]
fn add_saved_prompt_rejects_blank_name() {
    let mut s = SessionState::new();
    let err = s.add_saved_prompt(new_prompt("   ", "layout", "desc")).unwrap_err();
    assert_eq!(err, PromptError::MissingField("name"));
    assert_eq!(s.saved_prompts.len(), 6);
}

#[test]
fn add_saved_prompt_rejects_blank_description() {
    let mut s = SessionState::new();
    let err = s.add_saved_prompt(new_prompt("Name", "layout", "")).unwrap_err();
    assert_eq!(err, PromptError::MissingField("description"));
    assert_eq!(s.saved_prompts.len(), 6);
}

// =============================================================================
// filter_prompts
// =============================================================================

#[test]
fn filter_by_search_and_category() {
    let s = SessionState::new();
    assert_eq!(names(&s.filter_prompts("chart", "visualization")), vec!["Chart Component"]);
}

#[test]
fn filter_category_mismatch_is_empty() {
    let s = SessionState::new();
    assert!(s.filter_prompts("chart", "forms").is_empty());
}

#[test]
fn filter_empty_inputs_return_everything_in_order() {
    let s = SessionState::new();
    let all = s.filter_prompts("", "");
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].name, "Navigation Bar");
    assert_eq!(all[5].name, "Card Grid");
}

#[test]
fn filter_search_is_case_insensitive_over_name_and_description() {
    let s = SessionState::new();
    // "RESPONSIVE" appears only in descriptions.
    assert_eq!(names(&s.filter_prompts("RESPONSIVE", "")), vec!["Navigation Bar", "Card Grid"]);
    assert_eq!(names(&s.filter_prompts("grid", "")), vec!["Card Grid"]);
}

#[test]
fn filter_category_only() {
    let s = SessionState::new();
    assert_eq!(names(&s.filter_prompts("", "api")), vec!["Data Fetching"]);
}

#[test]
fn filter_sees_saved_prompts() {
    let mut s = SessionState::new();
    s.add_saved_prompt(new_prompt("Pricing Table", "layout", "Three tiers"))
        .unwrap();
    assert_eq!(names(&s.filter_prompts("", "layout")), vec!["Card Grid", "Pricing Table"]);
}

// =============================================================================
// live session
// =============================================================================

#[test]
fn touch_resets_idle_time_and_never_moves_backwards() {
    let (tx, _rx) = mpsc::channel(1);
    let session = Session::new(SessionState::new(), tx, 1_000);
    assert_eq!(session.idle_ms(4_000), 3_000);

    session.touch(3_500);
    assert_eq!(session.idle_ms(4_000), 500);

    session.touch(2_000);
    assert_eq!(session.idle_ms(4_000), 500);
}
