/// Stable arena index substituting for the reference implementation's
/// pointer-identity joins. Never constructed outside of [`crate::AnnotationIndex::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TranscriptId(pub u32);

impl TranscriptId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    pub fn as_char(self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One exon sub-interval, 1-based inclusive genomic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exon {
    pub start: u32,
    pub end: u32,
}

impl Exon {
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, start: u32, end: u32) -> bool {
        start >= self.start && end <= self.end
    }
}

/// An annotation record: name, genomic span, strand, and an ordered,
/// non-overlapping list of exon sub-intervals. `exons[i].end < exons[i+1].start`.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub id: TranscriptId,
    pub name: String,
    pub chromosome: String,
    pub strand: Strand,
    pub start: u32,
    pub end: u32,
    pub exons: Vec<Exon>,
}

impl Transcript {
    pub fn num_exons(&self) -> usize {
        self.exons.len()
    }

    /// Intron `k` (1-based, `k in [1, num_exons-1]`) is the gap between
    /// exon `k` and exon `k+1`.
    pub fn intron(&self, k: usize) -> Option<(u32, u32)> {
        if k == 0 || k >= self.exons.len() {
            return None;
        }
        Some((self.exons[k - 1].end, self.exons[k].start))
    }

    /// 1-based total exon-base count, used to size the intra-coordinate map.
    pub fn total_exon_bases(&self) -> u32 {
        self.exons.iter().map(Exon::len).sum()
    }

    /// Exon coordinate dump in `s1,e1|s2,e2|...` order, matching the GFR wire format.
    pub fn exon_coordinates(&self) -> String {
        self.exons
            .iter()
            .map(|e| format!("{},{}", e.start, e.end))
            .collect::<Vec<_>>()
            .join("|")
    }
}
