use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("block {start}-{end} on transcript '{transcript}' matches no exon, intron, or junction")]
    NoClassification {
        transcript: String,
        start: u32,
        end: u32,
    },
}
