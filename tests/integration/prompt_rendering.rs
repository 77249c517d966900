//! Prompt rendering tests.

use serde_json::json;

use kanso::{LanguageModelMessage, LanguageModelPrompt, MessageRole};

use crate::fixtures::planning_prompt;

#[test]
fn test_render_matches_provider_layout() {
    let prompt = planning_prompt();
    assert_eq!(
        prompt.render(),
        "SYSTEM: You are a planning agent.\n\nUSER: Break the objective into tasks."
    );
}

#[test]
fn test_render_twice_is_identical() {
    let prompt = planning_prompt();
    assert_eq!(prompt.to_string(), prompt.to_string());
}

#[test]
fn test_conversation_order_is_preserved() {
    let mut prompt = planning_prompt();
    prompt.push_message(LanguageModelMessage::assistant("1. research\n2. implement"));
    prompt.push_message(LanguageModelMessage::user("Now estimate each."));

    let rendered = prompt.render();
    let roles: Vec<&str> = rendered
        .split("\n\n")
        .filter_map(|entry| entry.split(": ").next())
        .collect();
    assert_eq!(roles, vec!["SYSTEM", "USER", "ASSISTANT", "USER"]);
    assert_eq!(prompt.messages[2].role, MessageRole::Assistant);
}

#[test]
fn test_prompt_document_with_functions() {
    let prompt = LanguageModelPrompt::from_json(
        &json!({
            "messages": [
                {"role": "user", "content": "a"},
                {"role": "assistant", "content": "b"}
            ],
            "functions": [
                {"json_schema": {"name": "create_initial_agent_plan", "parameters": {}}}
            ]
        })
        .to_string(),
    )
    .unwrap();

    assert_eq!(prompt.render(), "USER: a\n\nASSISTANT: b");
    assert_eq!(prompt.functions[0].name(), Some("create_initial_agent_plan"));
}

#[test]
fn test_prompt_document_with_non_list_messages_is_rejected() {
    let err = LanguageModelPrompt::from_json(r#"{"messages": "USER: hi"}"#).unwrap_err();
    assert!(err.is_validation());
}
