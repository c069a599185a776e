//! Virtual-exon coordinate projection (§4.6): maps genomic positions into
//! a restricted linear space so inter- and intra-transcript spans become
//! comparable insert-size offsets.

pub mod coordinate;
pub mod envelope;
pub mod inter_map;
pub mod offsets;

pub use coordinate::{convert_intra_coordinates, CoordinateMap};
pub use envelope::{compute_envelope, Envelope};
pub use inter_map::convert_inter_coordinates;
pub use offsets::{inter_offset_ab, inter_offset_ba, intra_offset};
