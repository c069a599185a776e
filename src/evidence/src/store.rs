use std::collections::BTreeMap;

use annotation::TranscriptId;

use crate::record::{Inter, Intra, SuperInter, SuperIntra};

/// Accumulates evidence during the single ingest pass, then groups it
/// into `SuperIntra`/`SuperInter` collections (§4.4).
#[derive(Default)]
pub struct EvidenceStore {
    super_intras: BTreeMap<TranscriptId, SuperIntra>,
    inters: Vec<Inter>,
}

impl EvidenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_intra(&mut self, intra: Intra) {
        self.super_intras
            .entry(intra.transcript)
            .or_insert_with(|| SuperIntra {
                transcript: intra.transcript,
                intras: Vec::new(),
            })
            .intras
            .push(intra);
    }

    pub fn add_inter(&mut self, inter: Inter) {
        self.inters.push(inter);
    }

    pub fn num_intras(&self) -> usize {
        self.super_intras.values().map(|si| si.intras.len()).sum()
    }

    pub fn num_inters(&self) -> usize {
        self.inters.len()
    }

    pub fn num_super_intras(&self) -> usize {
        self.super_intras.len()
    }

    pub fn super_intra(&self, transcript: TranscriptId) -> Option<&SuperIntra> {
        self.super_intras.get(&transcript)
    }

    pub fn super_intras(&self) -> impl Iterator<Item = &SuperIntra> {
        self.super_intras.values()
    }

    /// Collapse the raw `Inter` vector into `SuperInter`s, one per distinct
    /// ordered `(transcript1, transcript2)` pair, sorted stably by that key
    /// first and then by descending inter count (§4.4, §4.8).
    pub fn build_super_inters(&self) -> Vec<SuperInter> {
        let mut sorted = self.inters.clone();
        sorted.sort_by_key(|i| (i.transcript1, i.transcript2));

        let mut grouped = Vec::new();
        let mut i = 0;
        while i < sorted.len() {
            let key = (sorted[i].transcript1, sorted[i].transcript2);
            let mut j = i + 1;
            while j < sorted.len() && (sorted[j].transcript1, sorted[j].transcript2) == key {
                j += 1;
            }
            grouped.push(SuperInter {
                transcript1: key.0,
                transcript2: key.1,
                inters: sorted[i..j].to_vec(),
            });
            i = j;
        }

        grouped.sort_by(|a, b| b.num_inters().partial_cmp(&a.num_inters()).unwrap());
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intra(t: u32, w: f64) -> Intra {
        Intra {
            transcript: TranscriptId(t),
            read_start1: 1,
            read_end1: 10,
            read_start2: 20,
            read_end2: 30,
            weight: w,
        }
    }

    fn inter(t1: u32, t2: u32, w: f64) -> Inter {
        Inter {
            transcript1: TranscriptId(t1),
            transcript2: TranscriptId(t2),
            read_start1: 1,
            read_end1: 10,
            read_start2: 20,
            read_end2: 30,
            sequence1: "ACGT".into(),
            sequence2: "ACGT".into(),
            pair_type: 1,
            number1: 1,
            number2: 1,
            weight: w,
        }
    }

    #[test]
    fn groups_intras_by_transcript() {
        let mut store = EvidenceStore::new();
        store.add_intra(intra(0, 1.0));
        store.add_intra(intra(0, 0.5));
        store.add_intra(intra(1, 1.0));
        assert_eq!(store.num_super_intras(), 2);
        assert_eq!(store.super_intra(TranscriptId(0)).unwrap().intras.len(), 2);
    }

    #[test]
    fn groups_and_orders_super_inters_by_descending_count() {
        let mut store = EvidenceStore::new();
        store.add_inter(inter(0, 1, 1.0)); // SuperInter (0,1): count 1
        store.add_inter(inter(2, 3, 1.0)); // SuperInter (2,3): count 2
        store.add_inter(inter(2, 3, 1.0));
        let supers = store.build_super_inters();
        assert_eq!(supers.len(), 2);
        assert_eq!(supers[0].transcript1, TranscriptId(2));
        assert_eq!(supers[0].num_inters(), 2.0);
        assert_eq!(supers[1].num_inters(), 1.0);
    }

    #[test]
    fn ordered_pairs_are_distinct_super_inters() {
        let mut store = EvidenceStore::new();
        store.add_inter(inter(0, 1, 1.0));
        store.add_inter(inter(1, 0, 1.0));
        let supers = store.build_super_inters();
        assert_eq!(supers.len(), 2);
    }
}
