#![forbid(unsafe_code)]

//! Louver error model.
//!
//! # Design Principles
//!
//! 1. **Result everywhere** - visibility passes never panic; everything
//!    that can fail does so during setup.
//! 2. **Domain-specific errors** - each layer has its own typed error so
//!    callers can match on what matters and let the rest propagate.
//! 3. **Fail untouched** - every variant is raised before the first
//!    panel write, so a failed setup leaves the page exactly as the
//!    server rendered it.
//! 4. **Observability** - errors carry a stable label for tracing fields
//!    and metric counters without depending on tracing themselves.

use std::fmt;

use louver_rules::{ConfigError, RulesConfigError};
use louver_runtime::SetupError;

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error type for louver apps.
///
/// Each variant wraps one layer's typed error. All of them belong to the
/// setup phase; once a binding exists, every pass is total and infallible.
#[derive(Debug)]
pub enum Error {
    /// Page wiring failure: a missing element, or a strict-mode rejection
    /// surfaced while resolving the page.
    Setup(SetupError),
    /// The rule table references a panel outside the managed set.
    Rules(ConfigError),
    /// Declarative configuration failed to load or validate.
    Config(RulesConfigError),
}

/// Standard result type for louver APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for metrics and tracing.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Setup(_) => "setup",
            Self::Rules(_) => "rules",
            Self::Config(_) => "config",
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(err) => write!(f, "{err}"),
            Self::Rules(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Setup(err) => Some(err),
            Self::Rules(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<SetupError> for Error {
    fn from(err: SetupError) -> Self {
        Self::Setup(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Rules(err)
    }
}

impl From<RulesConfigError> for Error {
    fn from(err: RulesConfigError) -> Self {
        Self::Config(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
