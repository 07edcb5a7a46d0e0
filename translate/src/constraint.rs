//! Classification of statements against the server-managed policy table.
//!
//! Rules, first match wins:
//! 1. The predicate is managed → [`ViolationKind::ManagedProperty`].
//! 2. The statement is a type assertion whose object is a restricted type →
//!    [`ViolationKind::ManagedType`]; a relaxable type →
//!    [`ViolationKind::RelaxableManagedProperty`].
//! 3. Otherwise the statement is allowed.
//!
//! Variable predicates and objects never match the policy sets, so update
//! patterns with variables pass unless a concrete managed term is present.

use fedora_vocab::{PolicyTable, Triple};

use crate::report::{Violation, ViolationKind};

/// Outcome of classifying one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The statement may be written.
    Allowed,
    /// The statement violates the policy.
    Violation(ViolationKind),
}

/// Classifies statements against a policy table.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintChecker<'a> {
    policy: &'a PolicyTable,
}

impl<'a> ConstraintChecker<'a> {
    /// Creates a checker over the given table.
    pub fn new(policy: &'a PolicyTable) -> Self {
        Self { policy }
    }

    /// Creates a checker over the default repository table.
    #[must_use]
    pub fn fedora() -> ConstraintChecker<'static> {
        ConstraintChecker::new(PolicyTable::fedora())
    }

    /// The table this checker consults.
    #[must_use]
    pub fn policy(&self) -> &'a PolicyTable {
        self.policy
    }

    /// Classifies a statement.
    #[must_use]
    pub fn classify(&self, triple: &Triple) -> Classification {
        let Some(predicate) = triple.predicate.as_iri() else {
            return Classification::Allowed;
        };
        if self.policy.is_managed_predicate(predicate) {
            return Classification::Violation(ViolationKind::ManagedProperty);
        }
        if self.policy.is_type_predicate(predicate) {
            if let Some(ty) = triple.object.as_iri() {
                if self.policy.is_restricted_type(ty) {
                    return Classification::Violation(ViolationKind::ManagedType);
                }
                if self.policy.is_relaxable_type(ty) {
                    return Classification::Violation(ViolationKind::RelaxableManagedProperty);
                }
            }
        }
        Classification::Allowed
    }

    /// Classifies a statement and builds the violation, if any.
    #[must_use]
    pub fn check(&self, triple: &Triple) -> Option<Violation> {
        match self.classify(triple) {
            Classification::Allowed => None,
            Classification::Violation(kind) => Some(Violation::new(kind, triple.clone())),
        }
    }

    /// True if the statement touches a managed predicate or type in any way.
    ///
    /// Lenient graph handling drops exactly these statements.
    #[must_use]
    pub fn touches_managed(&self, triple: &Triple) -> bool {
        if self.classify(triple) != Classification::Allowed {
            return true;
        }
        let Some(predicate) = triple.predicate.as_iri() else {
            return false;
        };
        self.policy.is_type_predicate(predicate)
            && triple
                .object
                .as_iri()
                .is_some_and(|ty| self.policy.in_managed_namespace(ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedora_vocab::namespaces::{fedora, ldp, rdf};
    use fedora_vocab::Term;

    fn triple(p: &str, o: Term) -> Triple {
        Triple::new(Term::iri("http://ext/42"), Term::iri(p), o)
    }

    #[test]
    fn managed_predicate_is_never_relaxable() {
        let checker = ConstraintChecker::fedora();
        assert_eq!(
            checker.classify(&triple(fedora::LAST_MODIFIED, Term::literal("2020"))),
            Classification::Violation(ViolationKind::ManagedProperty)
        );
    }

    #[test]
    fn managed_predicate_wins_over_type_rule() {
        let mut policy = PolicyTable::empty();
        policy.managed_predicates.insert(rdf::TYPE.into());
        policy.restricted_types.insert(fedora::BINARY.into());
        let checker = ConstraintChecker::new(&policy);
        assert_eq!(
            checker.classify(&triple(rdf::TYPE, Term::iri(fedora::BINARY))),
            Classification::Violation(ViolationKind::ManagedProperty)
        );
    }

    #[test]
    fn hard_and_soft_types_stay_distinct() {
        let checker = ConstraintChecker::fedora();
        assert_eq!(
            checker.classify(&triple(rdf::TYPE, Term::iri(fedora::BINARY))),
            Classification::Violation(ViolationKind::ManagedType)
        );
        assert_eq!(
            checker.classify(&triple(rdf::TYPE, Term::iri(ldp::BASIC_CONTAINER))),
            Classification::Violation(ViolationKind::RelaxableManagedProperty)
        );
    }

    #[test]
    fn ordinary_statements_are_allowed() {
        let checker = ConstraintChecker::fedora();
        assert_eq!(
            checker.classify(&triple("http://purl.org/dc/terms/title", Term::literal("A"))),
            Classification::Allowed
        );
        assert_eq!(
            checker.classify(&triple(rdf::TYPE, Term::iri("http://example.org/Book"))),
            Classification::Allowed
        );
        assert!(checker
            .check(&triple("http://purl.org/dc/terms/title", Term::literal("A")))
            .is_none());
    }

    #[test]
    fn variables_never_match() {
        let checker = ConstraintChecker::fedora();
        let pattern = Triple::new(Term::variable("s"), Term::variable("p"), Term::variable("o"));
        assert_eq!(checker.classify(&pattern), Classification::Allowed);
        assert_eq!(
            checker.classify(&triple(rdf::TYPE, Term::variable("t"))),
            Classification::Allowed
        );
    }

    #[test]
    fn touches_managed_covers_namespace_types() {
        let mut policy = PolicyTable::empty();
        policy.managed_namespaces.insert("http://example.org/managed#".into());
        policy.relaxable_types.insert("http://example.org/managed#Soft".into());
        let checker = ConstraintChecker::new(&policy);
        let soft = triple(rdf::TYPE, Term::iri("http://example.org/managed#Soft"));
        assert!(checker.touches_managed(&soft));
        assert!(!checker.touches_managed(&triple(
            "http://purl.org/dc/terms/title",
            Term::literal("A")
        )));
    }
}
