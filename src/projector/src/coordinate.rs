use std::collections::HashMap;

use annotation::Transcript;

/// A restricted linear coordinate map: every entry maps one genomic base
/// `(chromosome, genomic)` to a 1-based index in transcript (or fusion
/// envelope) space. A lookup miss is a [`crate::LookupMiss`]: not fatal,
/// callers skip the offset that depended on it.
#[derive(Debug, Default)]
pub struct CoordinateMap {
    index: HashMap<(String, u32), u32>,
    len: u32,
}

impl CoordinateMap {
    pub(crate) fn from_parts(index: HashMap<(String, u32), u32>, len: u32) -> Self {
        Self { index, len }
    }

    pub fn lookup(&self, chromosome: &str, genomic: u32) -> Option<u32> {
        self.index.get(&(chromosome.to_string(), genomic)).copied()
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// `convertIntraCoordinates` (§4.6): enumerate every genomic base of every
/// exon of `t` in annotation order, assigning a 1-based linear index.
pub fn convert_intra_coordinates(t: &Transcript) -> CoordinateMap {
    let mut index = HashMap::new();
    let mut pos = 0u32;
    for exon in &t.exons {
        for genomic in exon.start..=exon.end {
            pos += 1;
            index.insert((t.chromosome.clone(), genomic), pos);
        }
    }
    CoordinateMap { index, len: pos }
}
