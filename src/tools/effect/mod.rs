//! Protein-level effect prediction for single nucleotide variants.
//!
//! The coding features of a transcript are joined into a
//! [`SpliceAssembly`], the variant is located in transcript coordinates and
//! the affected codon is translated with and without the substitution.
//! [`EffectPredictor`] drives this for whole variant files.
mod assembly;
pub mod codon;
mod config;
mod predictor;

pub use assembly::{assemble_coding_sequence, SpliceAssembly};
pub use config::PredictorConfig;
pub use predictor::{locate_and_translate, CodonChange, EffectPredictor, Translation};
