use crate::record::Inter;

/// One collapsed `(pairType, number1, number2)` bucket with its accumulated,
/// fractional split-read weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairCount {
    pub pair_type: u8,
    pub number1: u32,
    pub number2: u32,
    pub count: f64,
}

/// Collapse a `SuperInter`'s `Inter`s into `PairCount`s keyed by
/// `(pairType, number1, number2)`.
///
/// This deliberately reproduces a defect in the reference implementation's
/// inner collapse loop: when folding a run of `m` equal-keyed pairs, every
/// member beyond the first re-adds the *first* pair's weight instead of its
/// own, so a run's count ends up as `m * weight(first)` rather than the true
/// sum of weights. Preserved for bit-for-bit parity (§9); fix at the call
/// site, not here, if the true sum is ever needed.
pub fn count_pairs(inters: &[Inter]) -> Vec<PairCount> {
    let mut sorted: Vec<&Inter> = inters.iter().collect();
    sorted.sort_by_key(|i| i.triple());

    let mut result = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let first = sorted[i];
        let key = first.triple();
        let mut count = first.weight;
        let mut j = i + 1;
        while j < sorted.len() && sorted[j].triple() == key {
            count += first.weight;
            j += 1;
        }
        result.push(PairCount {
            pair_type: key.0,
            number1: key.1,
            number2: key.2,
            count,
        });
        i = j;
    }
    result
}

/// An exonic-exonic `(number1, number2)` triple is a valid envelope anchor
/// when its collapsed count exceeds 1 (§4.5).
pub fn is_valid_exon_exon_pair(counts: &[PairCount], number1: u32, number2: u32) -> bool {
    counts
        .iter()
        .any(|pc| pc.pair_type == 1 && pc.number1 == number1 && pc.number2 == number2 && pc.count > 1.0)
}

/// Virtual exon `k` on end `is_first ? 1 : 2` is included in the coordinate
/// map when some exonic-exonic count naming it exceeds 2 (§4.5). The
/// asymmetric threshold relative to [`is_valid_exon_exon_pair`] is
/// intentional and preserved as-is.
pub fn is_valid_exon(counts: &[PairCount], k: u32, is_first: bool) -> bool {
    counts.iter().any(|pc| {
        pc.pair_type == 1 && pc.count > 2.0 && if is_first { pc.number1 == k } else { pc.number2 == k }
    })
}
