//! Bootstrap-source rendering.
//!
//! Renders a ready-to-edit Rust source file that wires the configured
//! models into a Wayfarer expedition. The options block mirrors the active
//! schema exactly: modern selections get reasoning effort and verbosity,
//! legacy selections get max-tokens and top-p, and both carry the store
//! flag. The inactive schema is never emitted.

use std::fmt::Write as _;

use helm_types::AgentRole;

use crate::{SchemaMode, SettingsState};

const HEADER: &str = "\
//! Wayfarer launch configuration generated by helm.
//!
//! Review the API key wiring before launching; everything else is ready to
//! run or to edit in place.

use wayfarer::Expedition;

fn main() -> wayfarer::Result<()> {
    let api_key = std::env::var(\"WAYFARER_API_KEY\")?;

";

const FOOTER: &str = "

    expedition.learn()
}
";

/// Render the bootstrap artifact for the current state.
#[must_use]
pub fn render_bootstrap(state: &SettingsState) -> String {
    let mut out = String::from(HEADER);

    out.push_str("    let expedition = Expedition::builder()\n");
    out.push_str("        .api_key(api_key)\n");
    for (role, model) in state.selection().iter() {
        let temperature = state.temperature(role);
        let _ = writeln!(
            out,
            "        .{method}({model:?}, {temperature:?})",
            method = builder_method(role),
            model = model.as_str(),
        );
    }

    out.push_str("        .request_options(|options| {\n");
    let resolution = state.resolution();
    match resolution.mode() {
        SchemaMode::Modern => {
            let modern = state.modern();
            let _ = writeln!(
                out,
                "            options\n                .store({store})\n                .reasoning_effort({effort:?})\n                .verbosity({verbosity:?})",
                store = modern.store,
                effort = modern.reasoning_effort.as_str(),
                verbosity = modern.verbosity.as_str(),
            );
        }
        SchemaMode::Legacy => {
            let legacy = state.legacy();
            let _ = writeln!(
                out,
                "            options\n                .store({store})\n                .max_tokens({max_tokens})\n                .top_p({top_p:?})",
                store = legacy.store,
                max_tokens = legacy.max_tokens,
                top_p = legacy.top_p,
            );
        }
    }
    out.push_str("        })\n");
    out.push_str("        .build()?;");

    out.push_str(FOOTER);
    out
}

const fn builder_method(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Action => "action_agent",
        AgentRole::Curriculum => "curriculum_agent",
        AgentRole::CurriculumQa => "curriculum_qa",
        AgentRole::Critic => "critic_agent",
        AgentRole::SkillManager => "skill_manager",
    }
}
