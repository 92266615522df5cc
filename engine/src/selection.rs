//! The five-slot model selection.

use helm_types::{AgentRole, ModelId};

/// One model identifier per agent slot. Duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    action: ModelId,
    curriculum: ModelId,
    curriculum_qa: ModelId,
    critic: ModelId,
    skill_manager: ModelId,
}

impl Selection {
    #[must_use]
    pub fn new(
        action: ModelId,
        curriculum: ModelId,
        curriculum_qa: ModelId,
        critic: ModelId,
        skill_manager: ModelId,
    ) -> Self {
        Self {
            action,
            curriculum,
            curriculum_qa,
            critic,
            skill_manager,
        }
    }

    #[must_use]
    pub fn get(&self, role: AgentRole) -> &ModelId {
        match role {
            AgentRole::Action => &self.action,
            AgentRole::Curriculum => &self.curriculum,
            AgentRole::CurriculumQa => &self.curriculum_qa,
            AgentRole::Critic => &self.critic,
            AgentRole::SkillManager => &self.skill_manager,
        }
    }

    pub fn set(&mut self, role: AgentRole, model: ModelId) {
        match role {
            AgentRole::Action => self.action = model,
            AgentRole::Curriculum => self.curriculum = model,
            AgentRole::CurriculumQa => self.curriculum_qa = model,
            AgentRole::Critic => self.critic = model,
            AgentRole::SkillManager => self.skill_manager = model,
        }
    }

    /// Iterate the slots in role order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentRole, &ModelId)> {
        AgentRole::all().iter().map(|role| (*role, self.get(*role)))
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(
            ModelId::known("gpt-4"),
            ModelId::known("gpt-4"),
            ModelId::known("gpt-3.5-turbo"),
            ModelId::known("gpt-4"),
            ModelId::known("gpt-3.5-turbo"),
        )
    }
}
