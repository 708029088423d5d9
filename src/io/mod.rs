//! Readers and writers for the file formats the crate consumes and
//! produces.
//!
//! - [`gff`]: streaming GFF3 reader ([`GffReader`]) that builds a
//!   [`FeatureIndex`](crate::data_structs::annotation::FeatureIndex).
//! - [`fasta`]: reference loading through `bio::io::fasta`.
//! - [`variant`]: VCF-like variant rows ([`VariantReader`]).
//! - [`effect_writer`]: tab-delimited effect table ([`EffectWriter`]).
pub mod effect_writer;
pub mod fasta;
pub mod gff;
pub mod variant;

pub use effect_writer::{EffectRecord, EffectWriter, EFFECT_HEADER};
pub use fasta::{read_reference, read_reference_path, ReferenceMap};
pub use gff::GffReader;
pub use variant::{VariantReader, VariantRecord};
