use evidence::{Inter, Intra};

use crate::coordinate::CoordinateMap;

/// `offset = idx(readEnd2) - idx(readStart1) + 1` against one transcript's
/// own intra coordinate map. `None` is a `LookupMiss`: skip, not fatal.
pub fn intra_offset(map: &CoordinateMap, chromosome: &str, intra: &Intra) -> Option<i64> {
    let start1 = map.lookup(chromosome, intra.read_start1)?;
    let end2 = map.lookup(chromosome, intra.read_end2)?;
    Some(i64::from(end2) - i64::from(start1) + 1)
}

/// AB direction: `offset = idx(readEnd2 on t2) - idx(readStart1 on t1) + 1`.
/// Requires all four endpoints to resolve in `map` and the pair to be
/// exonic-exonic; anything else is skipped (`None`).
pub fn inter_offset_ab(
    map: &CoordinateMap,
    chrom1: &str,
    chrom2: &str,
    inter: &Inter,
) -> Option<i64> {
    if inter.pair_type != 1 {
        return None;
    }
    let start1 = map.lookup(chrom1, inter.read_start1)?;
    let _end1 = map.lookup(chrom1, inter.read_end1)?;
    let _start2 = map.lookup(chrom2, inter.read_start2)?;
    let end2 = map.lookup(chrom2, inter.read_end2)?;
    Some(i64::from(end2) - i64::from(start1) + 1)
}

/// BA direction: `offset = idx(readEnd1 on t1) - idx(readStart2 on t2) + 1`.
pub fn inter_offset_ba(
    map: &CoordinateMap,
    chrom1: &str,
    chrom2: &str,
    inter: &Inter,
) -> Option<i64> {
    if inter.pair_type != 1 {
        return None;
    }
    let _start1 = map.lookup(chrom1, inter.read_start1)?;
    let end1 = map.lookup(chrom1, inter.read_end1)?;
    let start2 = map.lookup(chrom2, inter.read_start2)?;
    let _end2 = map.lookup(chrom2, inter.read_end2)?;
    Some(i64::from(end1) - i64::from(start2) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::convert_intra_coordinates;
    use annotation::{Exon, Strand, Transcript, TranscriptId};

    fn transcript() -> Transcript {
        Transcript {
            id: TranscriptId(0),
            name: "T1".into(),
            chromosome: "chr1".into(),
            strand: Strand::Plus,
            start: 100,
            end: 199,
            exons: vec![Exon { start: 100, end: 199 }],
        }
    }

    #[test]
    fn intra_offset_is_one_based_inclusive_span() {
        let t = transcript();
        let map = convert_intra_coordinates(&t);
        let intra = Intra {
            transcript: TranscriptId(0),
            read_start1: 100,
            read_end1: 109,
            read_start2: 150,
            read_end2: 159,
            weight: 1.0,
        };
        assert_eq!(intra_offset(&map, "chr1", &intra), Some(60));
    }

    #[test]
    fn intra_offset_is_none_on_lookup_miss() {
        let t = transcript();
        let map = convert_intra_coordinates(&t);
        let intra = Intra {
            transcript: TranscriptId(0),
            read_start1: 100,
            read_end1: 109,
            read_start2: 500,
            read_end2: 510,
            weight: 1.0,
        };
        assert_eq!(intra_offset(&map, "chr1", &intra), None);
    }
}
