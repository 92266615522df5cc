//! The persisted record layout (save side).

use helm_engine::{SchemaMode, SettingsState};
use helm_types::AgentRole;
use serde::Serialize;

/// Model/temperature pair for one agent slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentEntry {
    pub model: String,
    pub temperature: Option<f64>,
}

/// The curriculum slot carries its QA sibling inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurriculumEntry {
    pub model: String,
    pub temperature: Option<f64>,
    pub qa_model: String,
    pub qa_temperature: Option<f64>,
}

/// Modern schema section. Non-store fields are null when the legacy schema
/// was active at save time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModernSection {
    pub reasoning_effort: Option<String>,
    pub verbosity: Option<String>,
    pub store: bool,
}

/// Legacy schema section. Non-store fields are null when the modern schema
/// was active at save time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacySection {
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_tokens: Option<u32>,
    pub store: bool,
}

/// One saved profile. Derived from live state on demand, never held as
/// state itself.
///
/// Exactly one section's non-store fields are populated; the other's are
/// explicit nulls, which distinguishes "not chosen this session" from "key
/// absent in an old file". The store flag is written into both sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRecord {
    pub action_agent: AgentEntry,
    pub curriculum_agent: CurriculumEntry,
    pub critic_agent: AgentEntry,
    pub skill_manager: AgentEntry,
    pub settings: ModernSection,
    pub old_settings: LegacySection,
}

impl ConfigRecord {
    #[must_use]
    pub fn from_state(state: &SettingsState) -> Self {
        let entry = |role: AgentRole| AgentEntry {
            model: state.selection().get(role).as_str().to_string(),
            temperature: Some(state.temperature(role)),
        };

        let resolution = state.resolution();
        let (settings, old_settings) = match resolution.mode() {
            SchemaMode::Modern => {
                let modern = state.modern();
                (
                    ModernSection {
                        reasoning_effort: Some(modern.reasoning_effort.as_str().to_string()),
                        verbosity: Some(modern.verbosity.as_str().to_string()),
                        store: modern.store,
                    },
                    LegacySection {
                        temperature: None,
                        top_p: None,
                        max_tokens: None,
                        store: modern.store,
                    },
                )
            }
            SchemaMode::Legacy => {
                let legacy = state.legacy();
                (
                    ModernSection {
                        reasoning_effort: None,
                        verbosity: None,
                        store: legacy.store,
                    },
                    LegacySection {
                        temperature: Some(legacy.temperature),
                        top_p: Some(legacy.top_p),
                        max_tokens: Some(legacy.max_tokens),
                        store: legacy.store,
                    },
                )
            }
        };

        Self {
            action_agent: entry(AgentRole::Action),
            curriculum_agent: CurriculumEntry {
                model: state
                    .selection()
                    .get(AgentRole::Curriculum)
                    .as_str()
                    .to_string(),
                temperature: Some(state.temperature(AgentRole::Curriculum)),
                qa_model: state
                    .selection()
                    .get(AgentRole::CurriculumQa)
                    .as_str()
                    .to_string(),
                qa_temperature: Some(state.temperature(AgentRole::CurriculumQa)),
            },
            critic_agent: entry(AgentRole::Critic),
            skill_manager: entry(AgentRole::SkillManager),
            settings,
            old_settings,
        }
    }
}
