//! Shared helpers for the integration suite.

use helm_engine::SettingsState;
use helm_types::{AgentRole, ModelId};

/// Build a state with the given identifiers in role order.
pub fn state_with_models(ids: [&str; 5]) -> SettingsState {
    let mut state = SettingsState::new();
    for (role, id) in AgentRole::all().iter().zip(ids) {
        state.set_model(*role, ModelId::new(id).expect("test model id"));
    }
    state
}

/// Set every slot to the same identifier.
pub fn state_with_uniform_model(id: &str) -> SettingsState {
    state_with_models([id; 5])
}
