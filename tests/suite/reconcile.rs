//! Selection reconciliation properties: mode exclusivity, enablement,
//! bounds, neutral defaults, and store synchronization.

use helm_engine::{SchemaMode, SettingsState, SettingsView, StoreView, resolve};
use helm_types::{AgentRole, ModelId, ReasoningEffort, Verbosity};

use crate::common::{state_with_models, state_with_uniform_model};

/// A pool that covers every classifier row plus an unknown identifier.
const POOL: &[&str] = &[
    "gpt-4",
    "gpt-3.5-turbo",
    "gpt-5.2",
    "gpt-5.2-pro",
    "o1",
    "model-from-the-future",
];

#[test]
fn exactly_one_mode_for_every_pool_combination() {
    for a in POOL {
        for b in POOL {
            for c in POOL {
                let state = state_with_models([a, b, c, a, b]);
                let resolution = state.resolution();
                assert_ne!(
                    resolution.is_modern(),
                    resolution.is_legacy(),
                    "{a}/{b}/{c}"
                );

                let all_legacy = state.selection().iter().all(|(_, m)| m.is_legacy());
                assert_eq!(resolution.is_legacy(), all_legacy, "{a}/{b}/{c}");
            }
        }
    }
}

#[test]
fn mode_is_permutation_invariant() {
    let ids = ["gpt-4", "gpt-5.2", "o1", "gpt-4.1", "gpt-5.2-pro"];
    let base = state_with_models(ids).resolution();

    let permutations = [
        ["gpt-5.2", "gpt-4", "o1", "gpt-4.1", "gpt-5.2-pro"],
        ["o1", "gpt-4.1", "gpt-5.2-pro", "gpt-5.2", "gpt-4"],
        ["gpt-5.2-pro", "o1", "gpt-4.1", "gpt-4", "gpt-5.2"],
    ];
    for permuted in permutations {
        assert_eq!(state_with_models(permuted).resolution(), base);
    }
}

#[test]
fn reasoning_effort_enabled_iff_any_model_grants_it() {
    // All legacy plus one reasoning tier: modern mode, reasoning enabled.
    let state = state_with_models(["o1", "gpt-4", "gpt-4", "gpt-4", "gpt-4"]);
    assert!(state.resolution().reasoning_effort_enabled());

    // Only the fixed high-end tier: modern mode, nothing adjustable.
    let state = state_with_uniform_model("gpt-5.2-pro");
    assert!(!state.resolution().reasoning_effort_enabled());
    assert!(!state.resolution().verbosity_enabled());
}

#[test]
fn xhigh_tracks_flagship_membership() {
    let mut state = state_with_models(["gpt-5.2", "gpt-4", "gpt-4", "gpt-4", "gpt-4"]);
    assert!(state.resolution().xhigh_available());

    state.set_reasoning_effort(ReasoningEffort::XHigh);
    assert_eq!(state.modern().reasoning_effort, ReasoningEffort::XHigh);

    // Swap the flagship out: xhigh leaves the domain and the value clamps.
    state.set_model(AgentRole::Action, ModelId::known("o1"));
    assert!(!state.resolution().xhigh_available());
    assert_eq!(state.modern().reasoning_effort, ReasoningEffort::High);
}

#[test]
fn legacy_ceiling_is_min_and_clamps_current_value() {
    let mut state = state_with_models([
        "gpt-4-turbo",
        "gpt-4o",
        "gpt-4o-mini",
        "gpt-4-turbo",
        "gpt-4o",
    ]);
    assert_eq!(state.resolution().max_tokens_ceiling(), 128_000);
    state.set_max_tokens(60_000);

    state.set_model(AgentRole::CurriculumQa, ModelId::known("gpt-3.5-turbo"));
    assert_eq!(state.resolution().max_tokens_ceiling(), 16_385);
    assert_eq!(state.legacy().max_tokens, 16_385);
}

#[test]
fn all_legacy_example_selection() {
    let state = state_with_models(["gpt-4", "gpt-4", "gpt-3.5-turbo", "gpt-4", "gpt-4"]);
    let resolution = state.resolution();
    assert_eq!(resolution.mode(), SchemaMode::Legacy);
    assert_eq!(resolution.max_tokens_ceiling(), 8_192);
}

#[test]
fn single_flagship_example_selection() {
    let state = state_with_models(["gpt-5.2", "gpt-4", "gpt-4", "gpt-4", "gpt-4"]);
    let resolution = state.resolution();
    assert_eq!(resolution.mode(), SchemaMode::Modern);
    assert!(resolution.reasoning_effort_enabled());
    assert!(resolution.verbosity_enabled());
    assert!(resolution.xhigh_available());
}

#[test]
fn uniform_reasoning_tier_example_selection() {
    let mut state = state_with_uniform_model("o1");
    state.set_verbosity(Verbosity::High);

    let resolution = state.resolution();
    assert_eq!(resolution.mode(), SchemaMode::Modern);
    assert!(resolution.reasoning_effort_enabled());
    assert!(!resolution.verbosity_enabled());
    assert!(!resolution.xhigh_available());
    // The disabled control is pinned at its neutral default.
    assert_eq!(state.modern().verbosity, Verbosity::Medium);
}

#[test]
fn store_flag_is_one_logical_value_across_views() {
    let mut state = SettingsState::new();
    state.set_store(true, StoreView::Modern);
    assert!(state.legacy().store);
    assert!(state.modern().store);

    state.set_store(false, StoreView::Legacy);
    assert!(!state.legacy().store);
    assert!(!state.modern().store);
}

#[test]
fn focus_falls_back_to_model_view_on_mode_flip() {
    let mut state = SettingsState::new();
    state.set_focus(SettingsView::LegacyOptions);
    assert_eq!(state.focus(), SettingsView::LegacyOptions);

    // Legacy view goes inactive: focus must land somewhere always-enabled.
    state.set_model(AgentRole::SkillManager, ModelId::known("gpt-5.2"));
    assert_eq!(state.focus(), SettingsView::Models);

    state.set_focus(SettingsView::ModernOptions);
    assert_eq!(state.focus(), SettingsView::ModernOptions);

    state.set_model(AgentRole::SkillManager, ModelId::known("gpt-3.5-turbo"));
    assert_eq!(state.focus(), SettingsView::Models);
}

#[test]
fn resolve_matches_state_resolution() {
    // The store reports exactly what the free function computes; there is no
    // second copy of the mode to drift.
    let state = state_with_models(["gpt-4", "o3", "gpt-4", "gpt-4", "gpt-4"]);
    assert_eq!(resolve(state.selection()), state.resolution());
}
