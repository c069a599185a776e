//! File handles and stdio: MRF parsing, config resolution, the GFR table
//! writer, and the `.intraOffsets.gz` sidecar.

pub mod config;
pub mod error;
pub mod mrf;
pub mod sidecar;
pub mod write;

pub use config::Config;
pub use error::{AlignmentParseError, ConfigError};
pub use mrf::{parse_line, MrfBlock, MrfEntry, MrfRead};
pub use sidecar::write_intra_offsets;
pub use write::TableWriter;
