//! Analysis tools built on top of the annotation index.
//!
//! - [`effect`]: coding-sequence assembly, codon translation and the
//!   [`EffectPredictor`](effect::EffectPredictor) that classifies single
//!   nucleotide variants as silent or amino-acid changing.
pub mod effect;
