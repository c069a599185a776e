use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotationLoadError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: line {line}: expected at least {expected} fields, found {found}")]
    FieldCount {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{path}: line {line}: invalid strand '{value}' (expected '+' or '-')")]
    InvalidStrand {
        path: String,
        line: usize,
        value: String,
    },

    #[error("{path}: line {line}: failed to parse integer '{value}'")]
    ParseInt {
        path: String,
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{path}: line {line}: sub-interval count mismatch: header declares {declared}, found {found}")]
    SubIntervalCount {
        path: String,
        line: usize,
        declared: usize,
        found: usize,
    },

    #[error("{path}: line {line}: exon {index} is not sorted ahead of / non-overlapping with exon {index} - 1")]
    UnsortedExons {
        path: String,
        line: usize,
        index: usize,
    },
}
