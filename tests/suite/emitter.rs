//! Bootstrap artifact rendering through the full load/emit pipeline.

use helm_config::{load_profile, save_profile};
use helm_engine::{StoreView, render_bootstrap};
use helm_types::{AgentRole, ReasoningEffort};

use crate::common::{state_with_models, state_with_uniform_model};

#[test]
fn saved_legacy_profile_generates_legacy_options_block() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");

    let mut state = state_with_models(["gpt-4", "gpt-4", "gpt-3.5-turbo", "gpt-4", "gpt-4"]);
    state.set_max_tokens(1_024);
    state.set_top_p(0.85);
    state.set_store(true, StoreView::Legacy);
    save_profile(&path, &state).expect("save");

    let code = render_bootstrap(&load_profile(&path).expect("load"));
    assert!(code.contains(".max_tokens(1024)"));
    assert!(code.contains(".top_p(0.85)"));
    assert!(code.contains(".store(true)"));
    assert!(!code.contains("reasoning_effort"));
    assert!(!code.contains("verbosity"));
}

#[test]
fn saved_modern_profile_generates_modern_options_block() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");

    let mut state = state_with_uniform_model("gpt-5.2");
    state.set_reasoning_effort(ReasoningEffort::Medium);
    save_profile(&path, &state).expect("save");

    let code = render_bootstrap(&load_profile(&path).expect("load"));
    assert!(code.contains(".reasoning_effort(\"medium\")"));
    assert!(code.contains(".verbosity(\"medium\")"));
    assert!(!code.contains("max_tokens"));
    assert!(!code.contains("top_p"));
}

#[test]
fn artifact_reflects_per_agent_assignments() {
    let mut state = state_with_models(["gpt-5.2", "gpt-4", "gpt-3.5-turbo", "o1", "gpt-5-mini"]);
    state.set_temperature(AgentRole::Critic, 0.4);

    let code = render_bootstrap(&state);
    assert!(code.contains(".action_agent(\"gpt-5.2\", 0.0)"));
    assert!(code.contains(".curriculum_agent(\"gpt-4\", 0.0)"));
    assert!(code.contains(".curriculum_qa(\"gpt-3.5-turbo\", 0.0)"));
    assert!(code.contains(".critic_agent(\"o1\", 0.4)"));
    assert!(code.contains(".skill_manager(\"gpt-5-mini\", 0.0)"));
}
