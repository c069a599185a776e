use evidence::{is_valid_exon_exon_pair, PairCount, SuperInter};

/// The fusion envelope: the smallest box on each transcript containing
/// every valid exonic-exonic `Inter` for a candidate (§4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    pub start1: u32,
    pub end1: u32,
    pub start2: u32,
    pub end2: u32,
}

/// `None` when no `Inter` in `sinter` is a valid exonic-exonic pair
/// (envelope-unfit candidate, §4.7).
pub fn compute_envelope(sinter: &SuperInter, counts: &[PairCount]) -> Option<Envelope> {
    let mut envelope: Option<Envelope> = None;
    for inter in &sinter.inters {
        if inter.pair_type != 1 || !is_valid_exon_exon_pair(counts, inter.number1, inter.number2) {
            continue;
        }
        envelope = Some(match envelope {
            None => Envelope {
                start1: inter.read_start1,
                end1: inter.read_end1,
                start2: inter.read_start2,
                end2: inter.read_end2,
            },
            Some(env) => Envelope {
                start1: env.start1.min(inter.read_start1),
                end1: env.end1.max(inter.read_end1),
                start2: env.start2.min(inter.read_start2),
                end2: env.end2.max(inter.read_end2),
            },
        });
    }
    envelope
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotation::TranscriptId;
    use evidence::Inter;

    fn inter(pt: u8, n1: u32, n2: u32, s1: u32, e1: u32, s2: u32, e2: u32) -> Inter {
        Inter {
            transcript1: TranscriptId(0),
            transcript2: TranscriptId(1),
            read_start1: s1,
            read_end1: e1,
            read_start2: s2,
            read_end2: e2,
            sequence1: "A".into(),
            sequence2: "A".into(),
            pair_type: pt,
            number1: n1,
            number2: n2,
            weight: 1.0,
        }
    }

    #[test]
    fn no_valid_exonic_exonic_pair_yields_no_envelope() {
        let sinter = SuperInter {
            transcript1: TranscriptId(0),
            transcript2: TranscriptId(1),
            inters: vec![inter(1, 1, 1, 10, 20, 30, 40)],
        };
        let counts = vec![PairCount { pair_type: 1, number1: 1, number2: 1, count: 1.0 }];
        assert!(compute_envelope(&sinter, &counts).is_none());
    }

    #[test]
    fn envelope_expands_over_all_valid_pairs() {
        let sinter = SuperInter {
            transcript1: TranscriptId(0),
            transcript2: TranscriptId(1),
            inters: vec![
                inter(1, 1, 1, 10, 20, 30, 40),
                inter(1, 1, 1, 5, 25, 35, 45),
            ],
        };
        let counts = vec![PairCount { pair_type: 1, number1: 1, number2: 1, count: 2.0 }];
        let env = compute_envelope(&sinter, &counts).unwrap();
        assert_eq!(env, Envelope { start1: 5, end1: 25, start2: 30, end2: 45 });
    }
}
