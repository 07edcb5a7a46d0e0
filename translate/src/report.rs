//! Violation types: kinds, individual violations, and request-wide aggregation.

use std::fmt;

use fedora_vocab::Triple;

/// Why a statement may not be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The predicate itself is server managed. Never relaxable.
    ManagedProperty,
    /// The statement asserts a hard-restricted type. Never relaxable.
    ManagedType,
    /// The statement asserts a soft server-managed type; waived under relaxed enforcement.
    RelaxableManagedProperty,
}

impl ViolationKind {
    /// Returns the kind's diagnostic name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::ManagedProperty => "ManagedPropertyViolation",
            ViolationKind::ManagedType => "ManagedTypeViolation",
            ViolationKind::RelaxableManagedProperty => "RelaxableManagedPropertyViolation",
        }
    }

    /// True only for the soft kind.
    #[must_use]
    pub fn is_relaxable(self) -> bool {
        self == ViolationKind::RelaxableManagedProperty
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Why it was rejected.
    pub kind: ViolationKind,
    /// The offending statement, as the client sent it.
    pub statement: Triple,
    /// Human-readable explanation.
    pub message: String,
}

impl Violation {
    /// Creates a violation with the standard message for its kind.
    pub fn new(kind: ViolationKind, statement: Triple) -> Self {
        let message = match kind {
            ViolationKind::ManagedProperty => format!(
                "Could not persist triple containing predicate {} to {}: the predicate is server managed",
                statement.predicate, statement.subject
            ),
            ViolationKind::ManagedType => format!(
                "The server managed type {} cannot be asserted on {}",
                statement.object, statement.subject
            ),
            ViolationKind::RelaxableManagedProperty => format!(
                "The server managed type {} may only be asserted on {} when server managed properties are relaxed",
                statement.object, statement.subject
            ),
        };
        Self {
            kind,
            statement,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// All violations found in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationReport {
    /// Violations in the order they were found.
    pub violations: Vec<Violation>,
}

impl ViolationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Extends this report with the violations of another.
    pub fn extend(&mut self, other: ViolationReport) {
        self.violations.extend(other.violations);
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True if nothing was rejected.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterates the violations.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Counts violations of one kind.
    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a ViolationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// A rewritten node together with the violations found while rewriting it.
///
/// Traversals return these instead of writing into a shared list; callers
/// merge the reports of the children they reassemble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten<T> {
    /// The rewritten value.
    pub value: T,
    /// Violations found in it.
    pub violations: ViolationReport,
}

impl<T> Rewritten<T> {
    /// A value with no violations.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            violations: ViolationReport::new(),
        }
    }

    /// A value carrying one violation.
    pub fn rejected(value: T, violation: Violation) -> Self {
        let mut violations = ViolationReport::new();
        violations.push(violation);
        Self { value, violations }
    }

    /// Maps the value, keeping the violations.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Rewritten<U> {
        Rewritten {
            value: f(self.value),
            violations: self.violations,
        }
    }
}

impl<T> FromIterator<Rewritten<T>> for Rewritten<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Rewritten<T>>>(iter: I) -> Self {
        let mut value = Vec::new();
        let mut violations = ViolationReport::new();
        for item in iter {
            value.push(item.value);
            violations.extend(item.violations);
        }
        Self { value, violations }
    }
}
