//! Live settings state and synchronous reconciliation.

use helm_types::{AgentRole, ModelId, ReasoningEffort, Verbosity};
use tracing::debug;

use crate::{Resolution, Selection, resolve};

/// Which schema view a store-flag edit originated from.
///
/// The two views each expose a store control over the same logical boolean;
/// the origin lets the write path suppress the echo back into the view that
/// triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreView {
    Modern,
    Legacy,
}

/// Focusable views. Model selection is always enabled; the two option views
/// track the active schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsView {
    #[default]
    Models,
    ModernOptions,
    LegacyOptions,
}

/// Current values of the modern schema's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModernDraft {
    pub reasoning_effort: ReasoningEffort,
    pub verbosity: Verbosity,
    pub store: bool,
}

/// Current values of the legacy schema's controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegacyDraft {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub store: bool,
}

impl Default for LegacyDraft {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            top_p: 1.0,
            max_tokens: 0,
            store: false,
        }
    }
}

/// The settings store: selection, per-agent temperatures, both schema
/// drafts, the shared store flag, and the focused view.
///
/// Every mutator reconciles before returning: schema mode and enablement are
/// recomputed from the selection, newly-disabled fields snap to their
/// neutral defaults, the legacy max-tokens value is clamped to the fresh
/// ceiling, and focus falls back to the model view if its view went
/// inactive.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    selection: Selection,
    temperatures: [f64; 5],
    modern: ModernDraft,
    legacy: LegacyDraft,
    focus: SettingsView,
    syncing_store: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            temperatures: [0.0; 5],
            modern: ModernDraft::default(),
            legacy: LegacyDraft::default(),
            focus: SettingsView::default(),
            syncing_store: false,
        }
    }
}

const fn role_index(role: AgentRole) -> usize {
    match role {
        AgentRole::Action => 0,
        AgentRole::Curriculum => 1,
        AgentRole::CurriculumQa => 2,
        AgentRole::Critic => 3,
        AgentRole::SkillManager => 4,
    }
}

fn clamp_sampling(value: f64) -> f64 {
    value.clamp(0.0, 2.0)
}

impl SettingsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn temperature(&self, role: AgentRole) -> f64 {
        self.temperatures[role_index(role)]
    }

    #[must_use]
    pub fn modern(&self) -> ModernDraft {
        self.modern
    }

    #[must_use]
    pub fn legacy(&self) -> LegacyDraft {
        self.legacy
    }

    /// The one logical store flag. Both drafts mirror it at all times.
    #[must_use]
    pub fn store(&self) -> bool {
        debug_assert_eq!(self.modern.store, self.legacy.store);
        self.modern.store
    }

    #[must_use]
    pub fn focus(&self) -> SettingsView {
        self.focus
    }

    /// Resolve the current selection. Computed on demand, never cached, so
    /// the mode cannot drift from the selection that implies it.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        resolve(&self.selection)
    }

    /// Replace one slot's model and reconcile.
    pub fn set_model(&mut self, role: AgentRole, model: ModelId) {
        let before = self.resolution().mode();
        self.selection.set(role, model);
        self.reconcile();
        let after = self.resolution().mode();
        if before != after {
            debug!(?before, ?after, "schema mode changed");
        }
    }

    /// Set one agent's temperature, clamped to [0, 2].
    pub fn set_temperature(&mut self, role: AgentRole, value: f64) {
        self.temperatures[role_index(role)] = clamp_sampling(value);
    }

    /// Write one temperature to all five agents, clamped to [0, 2].
    pub fn apply_temperature_to_all(&mut self, value: f64) {
        let value = clamp_sampling(value);
        self.temperatures = [value; 5];
    }

    /// Set the modern reasoning effort. An "xhigh" request is clamped into
    /// the current value domain when no selected model grants it.
    pub fn set_reasoning_effort(&mut self, value: ReasoningEffort) {
        let resolution = self.resolution();
        let value = if value == ReasoningEffort::XHigh && !resolution.xhigh_available() {
            debug!("xhigh not granted by any selected model; clamping to high");
            ReasoningEffort::High
        } else {
            value
        };
        self.modern.reasoning_effort = value;
        self.reconcile();
    }

    pub fn set_verbosity(&mut self, value: Verbosity) {
        self.modern.verbosity = value;
        self.reconcile();
    }

    /// Set the legacy-schema temperature, clamped to [0, 2].
    pub fn set_legacy_temperature(&mut self, value: f64) {
        self.legacy.temperature = clamp_sampling(value);
    }

    /// Set top-p, clamped to [0, 2].
    pub fn set_top_p(&mut self, value: f64) {
        self.legacy.top_p = clamp_sampling(value);
    }

    /// Set the legacy max-tokens value, clamped to the current ceiling.
    pub fn set_max_tokens(&mut self, value: u32) {
        self.legacy.max_tokens = value.min(self.resolution().max_tokens_ceiling());
    }

    /// Write the store flag into both schema views atomically.
    ///
    /// The reentrancy guard suppresses the feedback loop when each view's
    /// change handler forwards into this method: the echo triggered by the
    /// dual write returns without mutating. Origin is recorded for the
    /// suppressed side only; there is a single owned value underneath.
    pub fn set_store(&mut self, value: bool, origin: StoreView) {
        if self.syncing_store {
            return;
        }
        self.syncing_store = true;
        self.modern.store = value;
        self.legacy.store = value;
        debug!(?origin, value, "store flag synced across schema views");
        self.syncing_store = false;
    }

    /// Whether a view is currently interactive.
    #[must_use]
    pub fn view_enabled(&self, view: SettingsView) -> bool {
        match view {
            SettingsView::Models => true,
            SettingsView::ModernOptions => self.resolution().is_modern(),
            SettingsView::LegacyOptions => self.resolution().is_legacy(),
        }
    }

    /// Focus a view; a disabled view falls through to model selection.
    pub fn set_focus(&mut self, view: SettingsView) {
        self.focus = if self.view_enabled(view) {
            view
        } else {
            SettingsView::Models
        };
    }

    /// Restore the fixed baseline atomically, then reconcile. The default
    /// selection is all-legacy, so this lands in legacy mode.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
        self.reconcile();
    }

    /// Settle every derived constraint for the current selection.
    ///
    /// Runs inside every mutator, so callers always observe a fully
    /// reconciled state.
    fn reconcile(&mut self) {
        let resolution = self.resolution();
        let modern_active = resolution.is_modern();

        // Disabled fields snap to their neutral defaults so "disabled" and
        // "default" never diverge.
        if !(modern_active && resolution.reasoning_effort_enabled())
            && self.modern.reasoning_effort != ReasoningEffort::None
        {
            debug!("reasoning effort disabled; resetting to none");
            self.modern.reasoning_effort = ReasoningEffort::None;
        }
        if !(modern_active && resolution.verbosity_enabled())
            && self.modern.verbosity != Verbosity::Medium
        {
            debug!("verbosity disabled; resetting to medium");
            self.modern.verbosity = Verbosity::Medium;
        }

        // A shrunk value domain clamps a current "xhigh" back into range.
        if self.modern.reasoning_effort == ReasoningEffort::XHigh && !resolution.xhigh_available() {
            debug!("xhigh left the value domain; clamping to high");
            self.modern.reasoning_effort = ReasoningEffort::High;
        }

        let ceiling = resolution.max_tokens_ceiling();
        if self.legacy.max_tokens > ceiling {
            debug!(ceiling, "max tokens exceeded new ceiling; clamping");
            self.legacy.max_tokens = ceiling;
        }

        if !self.view_enabled(self.focus) {
            debug!(from = ?self.focus, "focused view went inactive; focusing model selection");
            self.focus = SettingsView::Models;
        }
    }
}
