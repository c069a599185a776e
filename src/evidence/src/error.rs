use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvidenceIntegrityError {
    #[error("inter-transcript pair has an empty read sequence on end {end}")]
    EmptySequence { end: u8 },

    #[error("read block has zero-length span ({start}-{end})")]
    ZeroLengthBlock { start: u32, end: u32 },
}
