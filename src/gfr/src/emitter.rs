use annotation::Transcript;
use evidence::SuperInter;

use crate::entry::GfrEntry;
use crate::subrecords::{ExonCoordinate, FusionType, InterRead};

/// The two Monte Carlo directions' means and p-values for one candidate (§4.7).
#[derive(Debug, Clone, Copy)]
pub struct CandidateScores {
    pub mean_ab: f64,
    pub mean_ba: f64,
    pub p_ab: f64,
    pub p_ba: f64,
}

/// Build one [`GfrEntry`] (§4.8). `ordinal` is the record's 1-based position
/// in emission order, used to generate `id`.
pub fn build_entry(
    prefix: &str,
    ordinal: usize,
    sinter: &SuperInter,
    t1: &Transcript,
    t2: &Transcript,
    num_intra1: f64,
    num_intra2: f64,
    scores: CandidateScores,
) -> GfrEntry {
    GfrEntry {
        num_inter: sinter.num_inters().round() as u32,
        inter_mean_ab: scores.mean_ab,
        inter_mean_ba: scores.mean_ba,
        p_value_ab: scores.p_ab,
        p_value_ba: scores.p_ba,
        num_intra1: num_intra1.round() as u32,
        num_intra2: num_intra2.round() as u32,
        fusion_type: FusionType::classify(&t1.chromosome, &t2.chromosome),
        name_transcript1: t1.name.clone(),
        num_exons_transcript1: t1.num_exons(),
        exon_coordinates_transcript1: exon_coords(t1),
        chromosome_transcript1: t1.chromosome.clone(),
        strand_transcript1: t1.strand,
        start_transcript1: t1.start,
        end_transcript1: t1.end,
        name_transcript2: t2.name.clone(),
        num_exons_transcript2: t2.num_exons(),
        exon_coordinates_transcript2: exon_coords(t2),
        chromosome_transcript2: t2.chromosome.clone(),
        strand_transcript2: t2.strand,
        start_transcript2: t2.start,
        end_transcript2: t2.end,
        inter_reads: sinter
            .inters
            .iter()
            .map(|i| InterRead {
                pair_type: i.pair_type,
                number1: i.number1,
                number2: i.number2,
                read_start1: i.read_start1,
                read_end1: i.read_end1,
                read_start2: i.read_start2,
                read_end2: i.read_end2,
            })
            .collect(),
        id: format!("{prefix}_{ordinal:05}"),
        reads_transcript1: sinter.inters.iter().map(|i| i.sequence1.clone()).collect(),
        reads_transcript2: sinter.inters.iter().map(|i| i.sequence2.clone()).collect(),
    }
}

fn exon_coords(t: &Transcript) -> Vec<ExonCoordinate> {
    t.exons.iter().map(|e| ExonCoordinate { start: e.start, end: e.end }).collect()
}
