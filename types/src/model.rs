//! Model identifiers, the capability decision table, and context-window data.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifiers offered by model pickers, newest tiers first.
///
/// The catalog constrains frontends only; [`ModelId`] accepts any non-empty
/// identifier so that profiles written against newer tiers still load.
pub const MODEL_CATALOG: &[&str] = &[
    "gpt-5.2-pro",
    "gpt-5.2",
    "gpt-5.1",
    "gpt-5-mini",
    "gpt-4.1",
    "gpt-4.1-mini",
    "o4-mini",
    "o3",
    "o1",
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4-turbo",
    "gpt-4",
    "gpt-3.5-turbo",
];

/// Older tiers that share the temperature/top-p/max-tokens parameter schema.
///
/// Note `gpt-4.1-mini` is deliberately absent: it takes the modern schema.
pub const LEGACY_MODELS: &[&str] = &[
    "gpt-3.5-turbo",
    "gpt-4",
    "gpt-4-turbo",
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4.1",
];

/// Reasoning-only tiers: effort is adjustable, text verbosity is not.
const REASONING_ONLY_MODELS: &[&str] = &["o1", "o3", "o4-mini"];

/// High-end tier with no adjustable request options.
const FIXED_TIER_MODEL: &str = "gpt-5.2-pro";

/// Flagship tier: the only one granting the "xhigh" reasoning effort.
const FLAGSHIP_MODEL: &str = "gpt-5.2";

/// Context windows for the legacy tiers, in tokens.
const CONTEXT_WINDOWS: &[(&str, u32)] = &[
    ("gpt-3.5-turbo", 16_385),
    ("gpt-4", 8_192),
    ("gpt-4-turbo", 128_000),
    ("gpt-4o", 128_000),
    ("gpt-4o-mini", 128_000),
    ("gpt-4.1", 1_047_576),
];

/// Conservative window for identifiers absent from [`CONTEXT_WINDOWS`].
pub const DEFAULT_CONTEXT_WINDOW: u32 = 4_096;

/// Opaque model identifier.
///
/// Unknown identifiers are valid values, not errors; only emptiness is
/// rejected. Catalog identifiers are stored borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(Cow<'static, str>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("model identifier must not be empty")]
pub struct ModelIdError;

impl ModelId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ModelIdError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ModelIdError);
        }
        // Borrow the catalog spelling when the identifier is a known one.
        if let Some(known) = MODEL_CATALOG.iter().copied().find(|id| *id == trimmed) {
            return Ok(Self(Cow::Borrowed(known)));
        }
        Ok(Self(Cow::Owned(trimmed.to_string())))
    }

    /// Construct from a compile-time identifier, e.g. a catalog entry.
    #[must_use]
    pub const fn known(id: &'static str) -> Self {
        assert!(!id.is_empty(), "known model id must not be empty");
        Self(Cow::Borrowed(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// Whether this identifier belongs to the legacy set.
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        is_legacy(self.as_str())
    }

    /// Capability record for this identifier.
    #[must_use]
    pub fn support(&self) -> ModelSupport {
        model_support(self.as_str())
    }

    /// Context window for this identifier, in tokens.
    #[must_use]
    pub fn context_window(&self) -> u32 {
        context_window(self.as_str())
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for ModelId {
    type Error = ModelIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelId> for String {
    fn from(value: ModelId) -> Self {
        value.0.into_owned()
    }
}

/// Which request options a model tier honors.
///
/// A pure function of the identifier; see [`model_support`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSupport {
    /// The tier accepts a reasoning-effort option.
    pub reasoning_effort: bool,
    /// The tier accepts a text-verbosity option.
    pub verbosity: bool,
    /// The tier accepts the store flag.
    pub store: bool,
    /// The tier accepts "xhigh" as a reasoning-effort value.
    pub xhigh_reasoning: bool,
}

impl ModelSupport {
    const FIXED: Self = Self {
        reasoning_effort: false,
        verbosity: false,
        store: true,
        xhigh_reasoning: false,
    };

    const REASONING_ONLY: Self = Self {
        reasoning_effort: true,
        verbosity: false,
        store: true,
        xhigh_reasoning: false,
    };

    const FLAGSHIP: Self = Self {
        reasoning_effort: true,
        verbosity: true,
        store: true,
        xhigh_reasoning: true,
    };

    const MODERN_DEFAULT: Self = Self {
        reasoning_effort: true,
        verbosity: true,
        store: true,
        xhigh_reasoning: false,
    };
}

/// Whether `id` belongs to the legacy set.
#[must_use]
pub fn is_legacy(id: &str) -> bool {
    LEGACY_MODELS.contains(&id)
}

/// Classify a model identifier into its capability record.
///
/// First-match precedence: legacy set, then the fixed high-end tier, then the
/// reasoning-only tiers, then the flagship, then a permissive modern default
/// for anything unrecognized.
#[must_use]
pub fn model_support(id: &str) -> ModelSupport {
    if is_legacy(id) {
        ModelSupport::FIXED
    } else if id == FIXED_TIER_MODEL {
        ModelSupport::FIXED
    } else if REASONING_ONLY_MODELS.contains(&id) {
        ModelSupport::REASONING_ONLY
    } else if id == FLAGSHIP_MODEL {
        ModelSupport::FLAGSHIP
    } else {
        ModelSupport::MODERN_DEFAULT
    }
}

/// Context window for `id`, in tokens.
///
/// Unrecognized identifiers get [`DEFAULT_CONTEXT_WINDOW`]. Unknown models
/// are treated permissively by [`model_support`] but conservatively here:
/// the window bounds a hard request-size limit, so the tightest guess wins.
// TODO: decide whether the two unknown-model fallbacks should agree; they
// intentionally differ today and callers depend on each independently.
#[must_use]
pub fn context_window(id: &str) -> u32 {
    CONTEXT_WINDOWS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, window)| *window)
        .unwrap_or(DEFAULT_CONTEXT_WINDOW)
}
