use std::collections::HashMap;

use annotation::Transcript;
use evidence::{is_valid_exon, PairCount};

use crate::coordinate::CoordinateMap;
use crate::envelope::Envelope;

/// `convertInterCoordinates` (§4.6): build the restricted, concatenated
/// coordinate map for one fusion direction.
///
/// `is_ab = true` concatenates `transcript1`'s valid exons (restricted to
/// the envelope) followed by `transcript2`'s; `is_ab = false` reverses the
/// concatenation order. Either way `transcript1`'s exons are gated by
/// `isValidExon(k, true)` and `transcript2`'s by `isValidExon(k, false)`.
pub fn convert_inter_coordinates(
    t1: &Transcript,
    t2: &Transcript,
    envelope: &Envelope,
    counts: &[PairCount],
    is_ab: bool,
) -> CoordinateMap {
    let mut entries: Vec<(String, u32)> = Vec::new();

    let mut collect = |t: &Transcript, is_first: bool, lo_bound: u32, hi_bound: u32| {
        for (i, exon) in t.exons.iter().enumerate() {
            let k = (i + 1) as u32;
            if !is_valid_exon(counts, k, is_first) {
                continue;
            }
            let lo = exon.start.max(lo_bound);
            let hi = exon.end.min(hi_bound);
            if lo <= hi {
                for genomic in lo..=hi {
                    entries.push((t.chromosome.clone(), genomic));
                }
            }
        }
    };

    if is_ab {
        collect(t1, true, envelope.start1, envelope.end1);
        collect(t2, false, envelope.start2, envelope.end2);
    } else {
        collect(t2, false, envelope.start2, envelope.end2);
        collect(t1, true, envelope.start1, envelope.end1);
    }

    entries.sort();

    let mut index = HashMap::new();
    for (pos0, key) in entries.iter().enumerate() {
        index.insert(key.clone(), (pos0 + 1) as u32);
    }
    CoordinateMap::from_parts(index, entries.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotation::{Exon, Strand, TranscriptId};
    use evidence::PairCount;

    fn transcript(name: &str, chrom: &str, exons: Vec<Exon>) -> Transcript {
        Transcript {
            id: TranscriptId(0),
            name: name.into(),
            chromosome: chrom.into(),
            strand: Strand::Plus,
            start: exons.first().unwrap().start,
            end: exons.last().unwrap().end,
            exons,
        }
    }

    #[test]
    fn ab_concatenates_transcript1_then_transcript2() {
        let t1 = transcript("T1", "chr1", vec![Exon { start: 100, end: 199 }]);
        let t2 = transcript("T2", "chr2", vec![Exon { start: 100, end: 199 }]);
        let envelope = Envelope { start1: 100, end1: 199, start2: 100, end2: 199 };
        let counts = vec![PairCount { pair_type: 1, number1: 1, number2: 1, count: 3.0 }];

        let map = convert_inter_coordinates(&t1, &t2, &envelope, &counts, true);
        assert_eq!(map.len(), 200);
        assert_eq!(map.lookup("chr1", 100), Some(1));
        assert_eq!(map.lookup("chr1", 199), Some(100));
        assert_eq!(map.lookup("chr2", 100), Some(101));
        assert_eq!(map.lookup("chr2", 199), Some(200));
    }

    #[test]
    fn ba_reverses_concatenation_order() {
        let t1 = transcript("T1", "chr1", vec![Exon { start: 100, end: 199 }]);
        let t2 = transcript("T2", "chr2", vec![Exon { start: 100, end: 199 }]);
        let envelope = Envelope { start1: 100, end1: 199, start2: 100, end2: 199 };
        let counts = vec![PairCount { pair_type: 1, number1: 1, number2: 1, count: 3.0 }];

        let map = convert_inter_coordinates(&t1, &t2, &envelope, &counts, false);
        assert_eq!(map.lookup("chr2", 100), Some(1));
        assert_eq!(map.lookup("chr1", 100), Some(101));
    }

    #[test]
    fn exons_failing_is_valid_exon_are_excluded() {
        let t1 = transcript("T1", "chr1", vec![Exon { start: 100, end: 199 }]);
        let t2 = transcript("T2", "chr2", vec![Exon { start: 100, end: 199 }]);
        let envelope = Envelope { start1: 100, end1: 199, start2: 100, end2: 199 };
        let counts: Vec<PairCount> = vec![]; // nothing passes count > 2
        let map = convert_inter_coordinates(&t1, &t2, &envelope, &counts, true);
        assert!(map.is_empty());
    }
}
