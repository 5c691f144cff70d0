//! Aggregated verdicts for one record.

use std::fmt;

use legality_catalog::UncheckedPolicy;
use legality_core::{CheckCategory, Outcome, Verdict};

/// Verdicts of one analysis pass, in verifier order.
///
/// # Examples
///
/// ```
/// use legality_catalog::UncheckedPolicy;
/// use legality_core::{CheckCategory, ResultCode, Verdict};
/// use legality_verify::LegalityReport;
///
/// let report = LegalityReport::new(
///     vec![Verdict::unchecked(CheckCategory::Ball, ResultCode::BallUnverified)],
///     UncheckedPolicy::Report,
/// );
///
/// assert!(report.is_legal());
/// assert_eq!(report.unchecked().count(), 1);
/// assert!(!report.clone().with_policy(UncheckedPolicy::Fail).is_legal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalityReport {
    verdicts: Vec<Verdict>,
    policy: UncheckedPolicy,
}

impl LegalityReport {
    pub fn new(verdicts: Vec<Verdict>, policy: UncheckedPolicy) -> Self {
        Self { verdicts, policy }
    }

    /// Replaces the unchecked policy used by [`is_legal`](Self::is_legal).
    pub fn with_policy(mut self, policy: UncheckedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn policy(&self) -> UncheckedPolicy {
        self.policy
    }

    /// Returns the first verdict reported for `category`.
    pub fn get(&self, category: CheckCategory) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.category == category)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &Verdict> {
        self.with_outcome(Outcome::Invalid)
    }

    pub fn unchecked(&self) -> impl Iterator<Item = &Verdict> {
        self.with_outcome(Outcome::Unchecked)
    }

    pub fn valid(&self) -> impl Iterator<Item = &Verdict> {
        self.with_outcome(Outcome::Valid)
    }

    /// Returns true if no verdict fails the record under the current policy.
    ///
    /// An empty report is legal: nothing applicable was found wrong.
    pub fn is_legal(&self) -> bool {
        self.verdicts.iter().all(|v| match v.outcome {
            Outcome::Valid => true,
            Outcome::Invalid => false,
            Outcome::Unchecked => self.policy == UncheckedPolicy::Report,
        })
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    fn with_outcome(&self, outcome: Outcome) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(move |v| v.outcome == outcome)
    }
}

impl fmt::Display for LegalityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} valid, {} invalid, {} unchecked",
            if self.is_legal() { "legal" } else { "illegal" },
            self.valid().count(),
            self.invalid().count(),
            self.unchecked().count(),
        )?;
        for verdict in &self.verdicts {
            write!(f, "\n  {}", verdict)?;
        }
        Ok(())
    }
}
