//! Transcript annotation loading and genomic overlap queries.
//!
//! A gene-model file is loaded once into an [`AnnotationIndex`]; every
//! transcript referenced afterwards is a [`TranscriptId`], a stable
//! arena index rather than a pointer or an owned copy.

pub mod error;
pub mod index;
pub mod transcript;

pub use error::AnnotationLoadError;
pub use index::AnnotationIndex;
pub use transcript::{Exon, Strand, Transcript, TranscriptId};
