/// The classification of one read-block end: exactly one of exon,
/// intron, or junction, carrying its 1-based virtual-exon/intron/junction index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndClass {
    Exon(u32),
    Intron(u32),
    Junction(u32),
}

impl EndClass {
    pub fn number(self) -> u32 {
        match self {
            EndClass::Exon(n) | EndClass::Intron(n) | EndClass::Junction(n) => n,
        }
    }

    pub fn is_exonic(self) -> bool {
        matches!(self, EndClass::Exon(_))
    }
}

/// Map a pair of end classifications to the GFR `pairType` constant (1..9)
/// and the two virtual numbers, in source order.
pub fn assign_pair_type(end1: EndClass, end2: EndClass) -> (u8, u32, u32) {
    use EndClass::{Exon, Intron, Junction};
    let pair_type = match (end1, end2) {
        (Exon(_), Exon(_)) => 1,
        (Exon(_), Intron(_)) => 2,
        (Exon(_), Junction(_)) => 3,
        (Intron(_), Exon(_)) => 4,
        (Intron(_), Intron(_)) => 5,
        (Intron(_), Junction(_)) => 6,
        (Junction(_), Junction(_)) => 7,
        (Junction(_), Exon(_)) => 8,
        (Junction(_), Intron(_)) => 9,
    };
    (pair_type, end1.number(), end2.number())
}

/// `true` iff `pairType` classifies both ends as exonic (type 1).
pub fn is_exonic_exonic(pair_type: u8) -> bool {
    pair_type == 1
}
