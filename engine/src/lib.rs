//! Settings reconciliation engine for Helm.
//!
//! The engine owns the live configuration state: the five-model selection,
//! per-agent temperatures, both parameter-schema drafts, and the store flag
//! shared between them. Every mutation reconciles synchronously — schema
//! mode, per-field enablement, bounds, and neutral defaults are all settled
//! before the mutating call returns, so no observer can see a half-updated
//! state.

mod emit;
mod resolve;
mod selection;
mod state;

pub use emit::render_bootstrap;
pub use resolve::{Resolution, SchemaMode, resolve};
pub use selection::Selection;
pub use state::{LegacyDraft, ModernDraft, SettingsState, SettingsView, StoreView};
