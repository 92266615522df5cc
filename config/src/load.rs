//! Record resolution (load side).
//!
//! Loading works over a raw JSON value rather than a derived struct: the
//! option sections may be nested (current layout) or flat at the top level
//! (pre-migration layout), and the store flag arrives in several spellings
//! from hand-edited files.

use helm_engine::{SettingsState, StoreView};
use helm_types::{AgentRole, ModelId, ReasoningEffort, Verbosity};
use serde_json::{Map, Value};
use tracing::debug;

use crate::ConfigError;

type JsonObject = Map<String, Value>;

/// Resolve a parsed profile into a fully reconciled state.
///
/// The selection is applied first; the resolver then decides which schema
/// section's values are honored. Values belonging to the inactive schema are
/// advisory leftovers and are discarded. Missing or unparseable fields fall
/// back to the baseline defaults.
pub fn state_from_value(value: &Value) -> Result<SettingsState, ConfigError> {
    let root = value.as_object().ok_or(ConfigError::Malformed)?;

    let mut state = SettingsState::new();

    apply_agent(&mut state, root, "action_agent", AgentRole::Action);
    apply_curriculum(&mut state, root);
    apply_agent(&mut state, root, "critic_agent", AgentRole::Critic);
    apply_agent(&mut state, root, "skill_manager", AgentRole::SkillManager);

    // Nested section when present, flat top-level keys otherwise.
    let modern_src = section(root, "settings").unwrap_or(root);
    let legacy_src = section(root, "old_settings").unwrap_or(root);

    let resolution = state.resolution();
    if resolution.is_modern() {
        if let Some(effort) = str_field(modern_src, "reasoning_effort")
            .and_then(ReasoningEffort::parse)
        {
            state.set_reasoning_effort(effort);
        }
        if let Some(verbosity) = str_field(modern_src, "verbosity").and_then(Verbosity::parse) {
            state.set_verbosity(verbosity);
        }
        state.set_store(coerce_store(modern_src.get("store")), StoreView::Modern);
    } else {
        if let Some(temperature) = float_field(legacy_src, "temperature") {
            state.set_legacy_temperature(temperature);
        }
        if let Some(top_p) = float_field(legacy_src, "top_p") {
            state.set_top_p(top_p);
        }
        if let Some(max_tokens) = legacy_src.get("max_tokens").and_then(Value::as_u64) {
            state.set_max_tokens(u32::try_from(max_tokens).unwrap_or(u32::MAX));
        }
        state.set_store(coerce_store(legacy_src.get("store")), StoreView::Legacy);
    }

    debug!(mode = ?resolution.mode(), "profile record resolved");
    Ok(state)
}

fn apply_agent(state: &mut SettingsState, root: &JsonObject, key: &str, role: AgentRole) {
    let Some(agent) = section(root, key) else {
        return;
    };
    if let Some(model) = model_field(agent, "model") {
        state.set_model(role, model);
    }
    if let Some(temperature) = float_field(agent, "temperature") {
        state.set_temperature(role, temperature);
    }
}

fn apply_curriculum(state: &mut SettingsState, root: &JsonObject) {
    apply_agent(state, root, "curriculum_agent", AgentRole::Curriculum);
    let Some(agent) = section(root, "curriculum_agent") else {
        return;
    };
    if let Some(model) = model_field(agent, "qa_model") {
        state.set_model(AgentRole::CurriculumQa, model);
    }
    if let Some(temperature) = float_field(agent, "qa_temperature") {
        state.set_temperature(AgentRole::CurriculumQa, temperature);
    }
}

fn section<'a>(root: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    root.get(key).and_then(Value::as_object)
}

fn str_field<'a>(map: &'a JsonObject, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

fn float_field(map: &JsonObject, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

fn model_field(map: &JsonObject, key: &str) -> Option<ModelId> {
    str_field(map, key).and_then(|raw| ModelId::new(raw).ok())
}

/// Coerce the store flag from the spellings found in real profiles.
///
/// Accepts booleans, 0/1 numbers, and a few yes/no strings
/// case-insensitively. Anything else means false.
fn coerce_store(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_i64() == Some(1),
        Some(Value::String(raw)) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on"
        ),
        _ => false,
    }
}
