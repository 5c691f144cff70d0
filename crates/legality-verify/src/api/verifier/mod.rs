// Typed verifier sets for statically dispatched analysis.

mod set;

#[cfg(test)]
mod tests;

use legality_core::{CheckCategory, Verdict};

use super::context::AnalysisContext;

pub use set::VerifierSet;

/// Judges one facet of a record against its candidate origin.
///
/// Implementations are pure: the same context always yields the same
/// verdict, and nothing is written to the record or origin. Verifiers never
/// see each other's verdicts.
///
/// # Example
///
/// ```
/// use legality_core::{CheckCategory, ResultCode, Verdict};
/// use legality_verify::{AnalysisContext, Verifier};
///
/// struct AlwaysValid;
///
/// impl Verifier for AlwaysValid {
///     fn category(&self) -> CheckCategory {
///         CheckCategory::Encounter
///     }
///
///     fn name(&self) -> &str {
///         "always_valid"
///     }
///
///     fn verify(&self, _ctx: &AnalysisContext<'_>) -> Option<Verdict> {
///         Some(Verdict::valid(CheckCategory::Encounter, ResultCode::BallEncounterMatch))
///     }
/// }
/// ```
pub trait Verifier: Send + Sync {
    /// Facet this verifier reports on.
    fn category(&self) -> CheckCategory;

    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Returns `None` when the facet does not exist for the record's format.
    fn verify(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict>;
}

impl<V: Verifier + ?Sized> Verifier for &V {
    fn category(&self) -> CheckCategory {
        (**self).category()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn verify(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        (**self).verify(ctx)
    }
}
