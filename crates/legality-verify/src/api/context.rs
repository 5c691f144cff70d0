//! Per-record analysis context.

use legality_core::{CandidateOrigin, CreatureRecord, Generation};

/// Everything a verifier may read for one record.
///
/// The context only borrows; verifiers never mutate the record or origin.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub record: &'a CreatureRecord,
    /// Origin the encounter resolver matched for the record.
    pub origin: &'a CandidateOrigin,
    /// Generation the record is judged under.
    pub generation: Generation,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        record: &'a CreatureRecord,
        origin: &'a CandidateOrigin,
        generation: Generation,
    ) -> Self {
        Self {
            record,
            origin,
            generation,
        }
    }

    /// Judges the record under its origin game's generation.
    pub fn for_record(record: &'a CreatureRecord, origin: &'a CandidateOrigin) -> Self {
        Self::new(record, origin, record.origin_generation())
    }
}
