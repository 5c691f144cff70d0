// Tuple implementations of `VerifierSet`.

use legality_core::Verdict;
use tracing::{debug, trace};

use super::Verifier;
use crate::api::context::AnalysisContext;

// A set of verifiers run together over one context.
//
// `VerifierSet` is implemented for tuples of `Verifier`, so a pipeline is
// fully typed and every call is statically dispatched.
pub trait VerifierSet: Send + Sync {
    // Runs every verifier in order, collecting the verdicts they emit.
    fn verify_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Verdict>;

    // Returns the number of verifiers in this set.
    fn verifier_count(&self) -> usize;

    // Returns verifier names in evaluation order.
    fn names(&self) -> Vec<&str>;
}

// Runs one verifier and logs what it did.
#[inline]
fn run<V: Verifier>(verifier: &V, ctx: &AnalysisContext<'_>, out: &mut Vec<Verdict>) {
    match verifier.verify(ctx) {
        Some(verdict) => {
            debug!(
                event = "verdict",
                verifier = verifier.name(),
                species = ctx.record.species.get(),
                outcome = ?verdict.outcome,
                code = verdict.code.code(),
            );
            out.push(verdict);
        }
        None => {
            trace!(
                event = "not_applicable",
                verifier = verifier.name(),
                format = ctx.record.format,
            );
        }
    }
}

// ============================================================================
// Tuple implementations
// ============================================================================

// Empty set: nothing to verify.
impl VerifierSet for () {
    #[inline]
    fn verify_all(&self, _ctx: &AnalysisContext<'_>) -> Vec<Verdict> {
        Vec::new()
    }

    #[inline]
    fn verifier_count(&self) -> usize {
        0
    }

    #[inline]
    fn names(&self) -> Vec<&str> {
        Vec::new()
    }
}

macro_rules! impl_verifier_set_for_tuple {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> VerifierSet for ($($T,)+)
        where
            $($T: Verifier,)+
        {
            fn verify_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Verdict> {
                let mut verdicts = Vec::with_capacity(self.verifier_count());
                $(run(&self.$idx, ctx, &mut verdicts);)+
                verdicts
            }

            #[inline]
            fn verifier_count(&self) -> usize {
                let mut count = 0;
                $(let _ = &self.$idx; count += 1;)+
                count
            }

            fn names(&self) -> Vec<&str> {
                vec![$(self.$idx.name()),+]
            }
        }
    };
}

impl_verifier_set_for_tuple!(0: V0);
impl_verifier_set_for_tuple!(0: V0, 1: V1);
impl_verifier_set_for_tuple!(0: V0, 1: V1, 2: V2);
impl_verifier_set_for_tuple!(0: V0, 1: V1, 2: V2, 3: V3);
impl_verifier_set_for_tuple!(0: V0, 1: V1, 2: V2, 3: V3, 4: V4);
impl_verifier_set_for_tuple!(0: V0, 1: V1, 2: V2, 3: V3, 4: V4, 5: V5);
impl_verifier_set_for_tuple!(0: V0, 1: V1, 2: V2, 3: V3, 4: V4, 5: V5, 6: V6);
impl_verifier_set_for_tuple!(0: V0, 1: V1, 2: V2, 3: V3, 4: V4, 5: V5, 6: V6, 7: V7);
