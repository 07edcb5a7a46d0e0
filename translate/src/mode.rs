//! Server-managed property enforcement modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;
use crate::report::ViolationKind;

/// How strictly server-managed statements are enforced.
///
/// Read once per request context and threaded through the graph and update
/// translators unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePolicy {
    /// Every violation, relaxable or not, is an error.
    #[default]
    Strict,
    /// Managed statements in graph bodies are dropped instead of rejected.
    Lenient,
    /// Relaxable violations are accepted; hard violations stay errors.
    Relaxed,
}

impl ModePolicy {
    /// True if a violation of this kind is waived under this mode.
    #[must_use]
    pub fn relaxes(self, kind: ViolationKind) -> bool {
        self == ModePolicy::Relaxed && kind.is_relaxable()
    }

    /// True if managed statements are silently removed from graph bodies.
    #[must_use]
    pub fn drops_managed(self) -> bool {
        self == ModePolicy::Lenient
    }

    /// The mode applied to SPARQL Update bodies, which have no drop path:
    /// lenient handling falls back to strict.
    #[must_use]
    pub fn for_update(self) -> ModePolicy {
        match self {
            ModePolicy::Lenient => ModePolicy::Strict,
            other => other,
        }
    }

    /// Returns the configuration name of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModePolicy::Strict => "strict",
            ModePolicy::Lenient => "lenient",
            ModePolicy::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for ModePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModePolicy {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ModePolicy::Strict),
            "lenient" => Ok(ModePolicy::Lenient),
            "relaxed" => Ok(ModePolicy::Relaxed),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_relaxed_waives_only_relaxable() {
        for kind in [
            ViolationKind::ManagedProperty,
            ViolationKind::ManagedType,
            ViolationKind::RelaxableManagedProperty,
        ] {
            assert!(!ModePolicy::Strict.relaxes(kind));
            assert!(!ModePolicy::Lenient.relaxes(kind));
            assert_eq!(ModePolicy::Relaxed.relaxes(kind), kind.is_relaxable());
        }
    }

    #[test]
    fn updates_have_no_lenient_path() {
        assert_eq!(ModePolicy::Lenient.for_update(), ModePolicy::Strict);
        assert_eq!(ModePolicy::Relaxed.for_update(), ModePolicy::Relaxed);
        assert_eq!(ModePolicy::Strict.for_update(), ModePolicy::Strict);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("RELAXED".parse::<ModePolicy>(), Ok(ModePolicy::Relaxed));
        assert_eq!(" lenient ".parse::<ModePolicy>(), Ok(ModePolicy::Lenient));
        assert!("loose".parse::<ModePolicy>().is_err());
        assert_eq!(ModePolicy::default(), ModePolicy::Strict);
    }
}
