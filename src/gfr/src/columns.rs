pub const NUM_INTER: &str = "numInter";
pub const INTER_MEAN_AB: &str = "interMeanAB";
pub const INTER_MEAN_BA: &str = "interMeanBA";
pub const PVALUE_AB: &str = "pValueAB";
pub const PVALUE_BA: &str = "pValueBA";
pub const NUM_INTRA1: &str = "numIntra1";
pub const NUM_INTRA2: &str = "numIntra2";
pub const FUSION_TYPE: &str = "fusionType";
pub const NAME_TRANSCRIPT1: &str = "nameTranscript1";
pub const NUM_EXONS_TRANSCRIPT1: &str = "numExonsTranscript1";
pub const EXON_COORDINATES_TRANSCRIPT1: &str = "exonCoordinatesTranscript1";
pub const CHROMOSOME_TRANSCRIPT1: &str = "chromosomeTranscript1";
pub const STRAND_TRANSCRIPT1: &str = "strandTranscript1";
pub const START_TRANSCRIPT1: &str = "startTranscript1";
pub const END_TRANSCRIPT1: &str = "endTranscript1";
pub const NAME_TRANSCRIPT2: &str = "nameTranscript2";
pub const NUM_EXONS_TRANSCRIPT2: &str = "numExonsTranscript2";
pub const EXON_COORDINATES_TRANSCRIPT2: &str = "exonCoordinatesTranscript2";
pub const CHROMOSOME_TRANSCRIPT2: &str = "chromosomeTranscript2";
pub const STRAND_TRANSCRIPT2: &str = "strandTranscript2";
pub const START_TRANSCRIPT2: &str = "startTranscript2";
pub const END_TRANSCRIPT2: &str = "endTranscript2";
pub const INTER_READS: &str = "interReads";
pub const ID: &str = "id";
pub const READS_TRANSCRIPT1: &str = "readsTranscript1";
pub const READS_TRANSCRIPT2: &str = "readsTranscript2";

pub const ORDERED: [&str; 26] = [
    NUM_INTER,
    INTER_MEAN_AB,
    INTER_MEAN_BA,
    PVALUE_AB,
    PVALUE_BA,
    NUM_INTRA1,
    NUM_INTRA2,
    FUSION_TYPE,
    NAME_TRANSCRIPT1,
    NUM_EXONS_TRANSCRIPT1,
    EXON_COORDINATES_TRANSCRIPT1,
    CHROMOSOME_TRANSCRIPT1,
    STRAND_TRANSCRIPT1,
    START_TRANSCRIPT1,
    END_TRANSCRIPT1,
    NAME_TRANSCRIPT2,
    NUM_EXONS_TRANSCRIPT2,
    EXON_COORDINATES_TRANSCRIPT2,
    CHROMOSOME_TRANSCRIPT2,
    STRAND_TRANSCRIPT2,
    START_TRANSCRIPT2,
    END_TRANSCRIPT2,
    INTER_READS,
    ID,
    READS_TRANSCRIPT1,
    READS_TRANSCRIPT2,
];

pub fn header_line() -> String {
    ORDERED.join("\t")
}
