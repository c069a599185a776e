use std::fmt;

use annotation::Strand;

use crate::columns;
use crate::error::GfrParseError;
use crate::subrecords::{join_pipe, split_pipe, ExonCoordinate, FusionType, InterRead};

/// One emitted candidate record; the GFR wire format in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct GfrEntry {
    pub num_inter: u32,
    pub inter_mean_ab: f64,
    pub inter_mean_ba: f64,
    pub p_value_ab: f64,
    pub p_value_ba: f64,
    pub num_intra1: u32,
    pub num_intra2: u32,
    pub fusion_type: FusionType,
    pub name_transcript1: String,
    pub num_exons_transcript1: usize,
    pub exon_coordinates_transcript1: Vec<ExonCoordinate>,
    pub chromosome_transcript1: String,
    pub strand_transcript1: Strand,
    pub start_transcript1: u32,
    pub end_transcript1: u32,
    pub name_transcript2: String,
    pub num_exons_transcript2: usize,
    pub exon_coordinates_transcript2: Vec<ExonCoordinate>,
    pub chromosome_transcript2: String,
    pub strand_transcript2: Strand,
    pub start_transcript2: u32,
    pub end_transcript2: u32,
    pub inter_reads: Vec<InterRead>,
    pub id: String,
    pub reads_transcript1: Vec<String>,
    pub reads_transcript2: Vec<String>,
}

impl GfrEntry {
    pub fn header() -> String {
        columns::header_line()
    }

    pub fn from_line(line: &str) -> Result<Self, GfrParseError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != columns::ORDERED.len() {
            return Err(GfrParseError::ColumnCount {
                expected: columns::ORDERED.len(),
                found: fields.len(),
            });
        }

        let parse_u32 = |column: &'static str, value: &str| {
            value.parse::<u32>().map_err(|_| GfrParseError::Field { column, value: value.to_string() })
        };
        let parse_f64 = |column: &'static str, value: &str| {
            value.parse::<f64>().map_err(|_| GfrParseError::Field { column, value: value.to_string() })
        };
        let parse_strand = |column: &'static str, value: &str| match value {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            other => Err(GfrParseError::Field { column, value: other.to_string() }),
        };

        Ok(GfrEntry {
            num_inter: parse_u32(columns::NUM_INTER, fields[0])?,
            inter_mean_ab: parse_f64(columns::INTER_MEAN_AB, fields[1])?,
            inter_mean_ba: parse_f64(columns::INTER_MEAN_BA, fields[2])?,
            p_value_ab: parse_f64(columns::PVALUE_AB, fields[3])?,
            p_value_ba: parse_f64(columns::PVALUE_BA, fields[4])?,
            num_intra1: parse_u32(columns::NUM_INTRA1, fields[5])?,
            num_intra2: parse_u32(columns::NUM_INTRA2, fields[6])?,
            fusion_type: fields[7].parse()?,
            name_transcript1: fields[8].to_string(),
            num_exons_transcript1: parse_u32(columns::NUM_EXONS_TRANSCRIPT1, fields[9])? as usize,
            exon_coordinates_transcript1: split_pipe(fields[10])
                .map_err(|_| GfrParseError::ExonCoordinate(fields[10].to_string()))?,
            chromosome_transcript1: fields[11].to_string(),
            strand_transcript1: parse_strand(columns::STRAND_TRANSCRIPT1, fields[12])?,
            start_transcript1: parse_u32(columns::START_TRANSCRIPT1, fields[13])?,
            end_transcript1: parse_u32(columns::END_TRANSCRIPT1, fields[14])?,
            name_transcript2: fields[15].to_string(),
            num_exons_transcript2: parse_u32(columns::NUM_EXONS_TRANSCRIPT2, fields[16])? as usize,
            exon_coordinates_transcript2: split_pipe(fields[17])
                .map_err(|_| GfrParseError::ExonCoordinate(fields[17].to_string()))?,
            chromosome_transcript2: fields[18].to_string(),
            strand_transcript2: parse_strand(columns::STRAND_TRANSCRIPT2, fields[19])?,
            start_transcript2: parse_u32(columns::START_TRANSCRIPT2, fields[20])?,
            end_transcript2: parse_u32(columns::END_TRANSCRIPT2, fields[21])?,
            inter_reads: split_pipe(fields[22]).map_err(|_| GfrParseError::InterRead(fields[22].to_string()))?,
            id: fields[23].to_string(),
            reads_transcript1: split_pipe::<String>(fields[24]).unwrap_or_default(),
            reads_transcript2: split_pipe::<String>(fields[25]).unwrap_or_default(),
        })
    }
}

impl fmt::Display for GfrEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.2}\t{:.2}\t{:.5}\t{:.5}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.num_inter,
            self.inter_mean_ab,
            self.inter_mean_ba,
            self.p_value_ab,
            self.p_value_ba,
            self.num_intra1,
            self.num_intra2,
            self.fusion_type,
            self.name_transcript1,
            self.num_exons_transcript1,
            join_pipe(&self.exon_coordinates_transcript1),
            self.chromosome_transcript1,
            self.strand_transcript1,
            self.start_transcript1,
            self.end_transcript1,
            self.name_transcript2,
            self.num_exons_transcript2,
            join_pipe(&self.exon_coordinates_transcript2),
            self.chromosome_transcript2,
            self.strand_transcript2,
            self.start_transcript2,
            self.end_transcript2,
            join_pipe(&self.inter_reads),
            self.id,
            self.reads_transcript1.join("|"),
            self.reads_transcript2.join("|"),
        )
    }
}

// std::str::FromStr for String has infallible Err = Infallible via split_pipe::<String>;
// that's fine since `unwrap_or_default` above never actually triggers a parse failure.
