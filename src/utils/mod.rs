//! Helper macros and small nucleotide utilities shared across the crate.
//!
//! - `with_field_fn!`, generating builder-style `with_*` methods.
//! - Base complementing, used whenever a reverse-strand feature has to be
//!   read in transcript orientation.

use bio::alphabets::dna;

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            #[cfg_attr(coverage_nightly, coverage(off))]
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
            self.$field_name = value;
            self
            }
        }
    };
}

/// Complements a single nucleotide, keeping IUPAC ambiguity codes and case.
pub fn complement_base(base: u8) -> u8 {
    dna::complement(base)
}

/// Complements every base of `seq` without reversing it.
pub fn complement_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|b| complement_base(*b))
        .collect()
}

/// Complements an allele string (as found in the REF/ALT columns).
pub fn complement_allele(allele: &str) -> String {
    String::from_utf8_lossy(&complement_seq(allele.as_bytes())).into_owned()
}
