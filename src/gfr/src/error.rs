use thiserror::Error;

#[derive(Error, Debug)]
pub enum GfrParseError {
    #[error("expected {expected} tab-separated columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("column '{column}': failed to parse '{value}'")]
    Field { column: &'static str, value: String },

    #[error("invalid fusion type '{0}' (expected 'cis' or 'trans')")]
    FusionType(String),

    #[error("malformed interReads sub-record '{0}'")]
    InterRead(String),

    #[error("malformed exon coordinate sub-record '{0}'")]
    ExonCoordinate(String),
}
