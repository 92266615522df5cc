//! The five agent slots an expedition is configured with.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const ROLE_PARSE_VALUES: &[&str] = &[
    "action",
    "curriculum",
    "curriculum-qa",
    "critic",
    "skill-manager",
];

/// One of the five Wayfarer agent slots.
///
/// Every slot carries its own model choice and temperature; the slots are
/// otherwise identical as far as configuration is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    Action,
    Curriculum,
    CurriculumQa,
    Critic,
    SkillManager,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid agent role '{raw}'; expected one of: {expected:?}")]
pub struct RoleParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl RoleParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl AgentRole {
    #[must_use]
    pub const fn all() -> &'static [AgentRole] {
        &[
            AgentRole::Action,
            AgentRole::Curriculum,
            AgentRole::CurriculumQa,
            AgentRole::Critic,
            AgentRole::SkillManager,
        ]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AgentRole::Action => "action",
            AgentRole::Curriculum => "curriculum",
            AgentRole::CurriculumQa => "curriculum-qa",
            AgentRole::Critic => "critic",
            AgentRole::SkillManager => "skill-manager",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            AgentRole::Action => "Action Agent",
            AgentRole::Curriculum => "Curriculum Agent",
            AgentRole::CurriculumQa => "Curriculum QA",
            AgentRole::Critic => "Critic Agent",
            AgentRole::SkillManager => "Skill Manager",
        }
    }

    pub fn parse(s: &str) -> Result<Self, RoleParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "action" => Ok(AgentRole::Action),
            "curriculum" => Ok(AgentRole::Curriculum),
            "curriculum-qa" | "curriculum_qa" | "qa" => Ok(AgentRole::CurriculumQa),
            "critic" => Ok(AgentRole::Critic),
            "skill-manager" | "skill_manager" | "skill" => Ok(AgentRole::SkillManager),
            _ => Err(RoleParseError {
                raw: s.trim().to_string(),
                expected: ROLE_PARSE_VALUES,
            }),
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
