use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("prefix must not be empty")]
    EmptyPrefix,

    #[error("minNumberOfPairedEndReads must be greater than 0")]
    ZeroMinPairedEndReads,
}
