//! The GFR ("Gene Fusion Report") wire format: the candidate record type,
//! its fixed column order, and the emitter that builds one record per
//! qualifying `SuperInter` (§4.8, §6).

pub mod columns;
pub mod emitter;
pub mod entry;
pub mod error;
pub mod subrecords;

pub use emitter::{build_entry, CandidateScores};
pub use entry::GfrEntry;
pub use error::GfrParseError;
pub use subrecords::{ExonCoordinate, FusionType, InterRead};
