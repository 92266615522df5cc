//! Schema-mode resolution over the five-model selection.

use crate::Selection;

/// Which of the two mutually exclusive parameter schemas is active.
///
/// A two-variant enum on purpose: exactly one schema is active for every
/// possible selection, so "both" and "neither" are unrepresentable. The mode
/// is recomputed from the selection on every change, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// Reasoning-effort / verbosity / store, for newer tiers.
    Modern,
    /// Temperature / top-p / max-tokens / store, for the legacy set.
    Legacy,
}

/// Aggregate resolution of a selection: the active schema plus per-field
/// enablement and the legacy max-tokens ceiling.
///
/// Enablement flags are meaningful while the mode is [`SchemaMode::Modern`];
/// the ceiling is meaningful while it is [`SchemaMode::Legacy`]. Both are
/// always computed so a mode flip needs no second pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    mode: SchemaMode,
    reasoning_effort_enabled: bool,
    verbosity_enabled: bool,
    store_enabled: bool,
    xhigh_available: bool,
    max_tokens_ceiling: u32,
}

impl Resolution {
    #[must_use]
    pub const fn mode(self) -> SchemaMode {
        self.mode
    }

    #[must_use]
    pub const fn is_modern(self) -> bool {
        matches!(self.mode, SchemaMode::Modern)
    }

    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self.mode, SchemaMode::Legacy)
    }

    #[must_use]
    pub const fn reasoning_effort_enabled(self) -> bool {
        self.reasoning_effort_enabled
    }

    #[must_use]
    pub const fn verbosity_enabled(self) -> bool {
        self.verbosity_enabled
    }

    #[must_use]
    pub const fn store_enabled(self) -> bool {
        self.store_enabled
    }

    /// Whether "xhigh" belongs to the reasoning-effort value domain.
    #[must_use]
    pub const fn xhigh_available(self) -> bool {
        self.xhigh_available
    }

    /// Upper bound for the legacy max-tokens field, in tokens.
    #[must_use]
    pub const fn max_tokens_ceiling(self) -> u32 {
        self.max_tokens_ceiling
    }
}

/// Resolve a selection into its schema mode, enablement set, and bounds.
///
/// The mode is Legacy iff every slot holds a legacy-set identifier. Field
/// enablement is permissive: one capable model in the selection is enough to
/// expose a control. The ceiling is the tightest context window across the
/// selection, since it bounds a hard request-size limit.
#[must_use]
pub fn resolve(selection: &Selection) -> Resolution {
    let mut legacy_all = true;
    let mut reasoning_effort_enabled = false;
    let mut verbosity_enabled = false;
    let mut store_enabled = false;
    let mut xhigh_available = false;
    let mut max_tokens_ceiling = u32::MAX;

    for (_, model) in selection.iter() {
        legacy_all &= model.is_legacy();

        let support = model.support();
        reasoning_effort_enabled |= support.reasoning_effort;
        verbosity_enabled |= support.verbosity;
        store_enabled |= support.store;
        xhigh_available |= support.xhigh_reasoning;

        max_tokens_ceiling = max_tokens_ceiling.min(model.context_window());
    }

    let mode = if legacy_all {
        SchemaMode::Legacy
    } else {
        SchemaMode::Modern
    };

    Resolution {
        mode,
        reasoning_effort_enabled,
        verbosity_enabled,
        store_enabled,
        xhigh_available,
        max_tokens_ceiling,
    }
}
