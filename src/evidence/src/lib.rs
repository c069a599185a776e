//! Evidence accumulation and pair-count aggregation (§4.4, §4.5).

pub mod aggregate;
pub mod error;
pub mod record;
pub mod store;

pub use aggregate::{count_pairs, is_valid_exon, is_valid_exon_exon_pair, PairCount};
pub use error::EvidenceIntegrityError;
pub use record::{Inter, Intra, SuperInter, SuperIntra};
pub use store::EvidenceStore;
