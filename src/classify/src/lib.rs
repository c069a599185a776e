//! Per-block exon/intron/junction classification and pair typing.

pub mod error;
pub mod pairtype;
pub mod weight;

pub use error::ClassificationError;
pub use pairtype::{assign_pair_type, EndClass};
pub use weight::{is_full_alignment, split_read_weight};

use annotation::Transcript;

/// The 1-based index `k` of the first exon fully containing `[start, end]`, or `None`.
pub fn exon_number(t: &Transcript, start: u32, end: u32) -> Option<u32> {
    t.exons
        .iter()
        .position(|exon| exon.contains(start, end))
        .map(|i| (i + 1) as u32)
}

/// The 1-based intron index `k` strictly between exon `k` and exon `k+1`
/// fully containing `[start, end]`, or `None`.
pub fn intron_number(t: &Transcript, start: u32, end: u32) -> Option<u32> {
    for k in 1..t.exons.len() {
        if let Some((ee_k, es_k1)) = t.intron(k) {
            if start > ee_k && end < es_k1 {
                return Some(k as u32);
            }
        }
    }
    None
}

/// Junction numbering: only meaningful when both `exon_number` and
/// `intron_number` are `None`. The first exon boundary crossed by
/// `[start, end]` wins: `2k-1` for the start of exon `k`, `2k` for its end.
pub fn junction_number(t: &Transcript, start: u32, end: u32) -> Option<u32> {
    for (i, exon) in t.exons.iter().enumerate() {
        let k = (i + 1) as u32;
        if start <= exon.start && exon.start <= end {
            return Some(2 * k - 1);
        }
        if start <= exon.end && exon.end <= end {
            return Some(2 * k);
        }
    }
    None
}

/// Classify one read-block end against the transcript it overlaps.
/// Exactly one of exon/intron/junction holds, or the block is
/// unclassifiable and ingest must abort (`ClassificationError`).
pub fn classify_end(
    t: &Transcript,
    start: u32,
    end: u32,
) -> Result<EndClass, ClassificationError> {
    if let Some(k) = exon_number(t, start, end) {
        return Ok(EndClass::Exon(k));
    }
    if let Some(k) = intron_number(t, start, end) {
        return Ok(EndClass::Intron(k));
    }
    if let Some(k) = junction_number(t, start, end) {
        return Ok(EndClass::Junction(k));
    }
    Err(ClassificationError::NoClassification {
        transcript: t.name.clone(),
        start,
        end,
    })
}
