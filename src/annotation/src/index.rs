use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rust_lapper::{Interval, Lapper};

use crate::error::AnnotationLoadError;
use crate::transcript::{Exon, Strand, Transcript, TranscriptId};

/// Read-only, load-once index over a gene-model file.
///
/// Overlap queries are answered by one [`Lapper`] interval tree per
/// chromosome, keyed on the genomic span of each transcript's exons
/// flattened into a single searchable interval set.
pub struct AnnotationIndex {
    transcripts: Vec<Transcript>,
    trees: HashMap<String, Lapper<u32, u32>>,
}

impl AnnotationIndex {
    pub fn load(path: &Path) -> Result<Self, AnnotationLoadError> {
        let path_str = path.display().to_string();
        let file = File::open(path).map_err(|source| AnnotationLoadError::Io {
            path: path_str.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut transcripts = Vec::new();
        let mut intervals_by_chrom: HashMap<String, Vec<Interval<u32, u32>>> = HashMap::new();

        for (line_no, raw_line) in reader.lines().enumerate() {
            let line_no = line_no + 1;
            let raw_line = raw_line.map_err(|source| AnnotationLoadError::Io {
                path: path_str.clone(),
                source,
            })?;
            let trimmed = raw_line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let transcript = parse_record(&path_str, line_no, trimmed)?;
            let id = TranscriptId(transcripts.len() as u32);

            let entry = intervals_by_chrom.entry(transcript.chromosome.clone()).or_default();
            entry.push(Interval {
                start: transcript.start,
                stop: transcript.end + 1, // rust_lapper uses half-open [start, stop)
                val: id.0,
            });

            transcripts.push(Transcript { id, ..transcript });
        }

        let trees = intervals_by_chrom
            .into_iter()
            .map(|(chrom, ivs)| (chrom, Lapper::new(ivs)))
            .collect();

        Ok(Self { transcripts, trees })
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    pub fn get(&self, id: TranscriptId) -> &Transcript {
        &self.transcripts[id.index()]
    }

    /// All transcripts whose genomic span overlaps `[start, end]` (1-based, inclusive)
    /// on `chrom`.
    pub fn overlapping(&self, chrom: &str, start: u32, end: u32) -> Vec<TranscriptId> {
        match self.trees.get(chrom) {
            None => Vec::new(),
            Some(tree) => tree
                .find(start, end + 1)
                .map(|iv| TranscriptId(iv.val))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transcript> {
        self.transcripts.iter()
    }
}

fn parse_record(path: &str, line_no: usize, line: &str) -> Result<Transcript, AnnotationLoadError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 6 {
        return Err(AnnotationLoadError::FieldCount {
            path: path.to_string(),
            line: line_no,
            expected: 6,
            found: fields.len(),
        });
    }

    let name = fields[0].to_string();
    let chromosome = fields[1].to_string();
    let strand = match fields[2] {
        "+" => Strand::Plus,
        "-" => Strand::Minus,
        other => {
            return Err(AnnotationLoadError::InvalidStrand {
                path: path.to_string(),
                line: line_no,
                value: other.to_string(),
            })
        }
    };
    let start = parse_u32(path, line_no, fields[3])?;
    let end = parse_u32(path, line_no, fields[4])?;
    let num_exons = parse_u32(path, line_no, fields[5])? as usize;

    let coord_fields = &fields[6..];
    if coord_fields.len() != num_exons * 2 {
        return Err(AnnotationLoadError::SubIntervalCount {
            path: path.to_string(),
            line: line_no,
            declared: num_exons,
            found: coord_fields.len() / 2,
        });
    }

    let mut exons = Vec::with_capacity(num_exons);
    for i in 0..num_exons {
        let es = parse_u32(path, line_no, coord_fields[2 * i])?;
        let ee = parse_u32(path, line_no, coord_fields[2 * i + 1])?;
        exons.push(Exon { start: es, end: ee });
    }

    for i in 1..exons.len() {
        if exons[i].start <= exons[i - 1].end {
            return Err(AnnotationLoadError::UnsortedExons {
                path: path.to_string(),
                line: line_no,
                index: i + 1,
            });
        }
    }

    Ok(Transcript {
        id: TranscriptId(0), // overwritten by the caller once the arena slot is known
        name,
        chromosome,
        strand,
        start,
        end,
        exons,
    })
}

fn parse_u32(path: &str, line_no: usize, value: &str) -> Result<u32, AnnotationLoadError> {
    value.parse::<u32>().map_err(|source| AnnotationLoadError::ParseInt {
        path: path.to_string(),
        line: line_no,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{contents}").unwrap();
        f
    }

    #[test]
    fn loads_simple_two_exon_transcript() {
        let f = write_fixture("T1\tchr1\t+\t100\t399\t2\t100\t199\t300\t399\n");
        let index = AnnotationIndex::load(f.path()).unwrap();
        assert_eq!(index.len(), 1);
        let t = index.get(TranscriptId(0));
        assert_eq!(t.name, "T1");
        assert_eq!(t.num_exons(), 2);
        assert_eq!(t.exons[0], Exon { start: 100, end: 199 });
        assert_eq!(t.exons[1], Exon { start: 300, end: 399 });
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let f = write_fixture("# header\n\nT1\tchr1\t+\t100\t199\t1\t100\t199\n");
        let index = AnnotationIndex::load(f.path()).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn rejects_sub_interval_count_mismatch() {
        let f = write_fixture("T1\tchr1\t+\t100\t199\t2\t100\t199\n");
        let err = AnnotationIndex::load(f.path()).unwrap_err();
        assert!(matches!(err, AnnotationLoadError::SubIntervalCount { .. }));
    }

    #[test]
    fn rejects_unsorted_exons() {
        let f = write_fixture("T1\tchr1\t+\t100\t399\t2\t300\t399\t100\t199\n");
        let err = AnnotationIndex::load(f.path()).unwrap_err();
        assert!(matches!(err, AnnotationLoadError::UnsortedExons { .. }));
    }

    #[test]
    fn overlap_query_finds_unique_transcript() {
        let f = write_fixture(
            "T1\tchr1\t+\t100\t199\t1\t100\t199\n\
             T2\tchr2\t+\t100\t199\t1\t100\t199\n",
        );
        let index = AnnotationIndex::load(f.path()).unwrap();
        let hits = index.overlapping("chr1", 120, 169);
        assert_eq!(hits, vec![TranscriptId(0)]);
        assert!(index.overlapping("chr1", 500, 600).is_empty());
        assert!(index.overlapping("chrX", 1, 10).is_empty());
    }

    #[test]
    fn overlap_query_returns_multiple_hits_when_ambiguous() {
        let f = write_fixture(
            "T1\tchr1\t+\t100\t199\t1\t100\t199\n\
             T2\tchr1\t+\t150\t249\t1\t150\t249\n",
        );
        let index = AnnotationIndex::load(f.path()).unwrap();
        let mut hits = index.overlapping("chr1", 160, 170);
        hits.sort();
        assert_eq!(hits, vec![TranscriptId(0), TranscriptId(1)]);
    }
}
