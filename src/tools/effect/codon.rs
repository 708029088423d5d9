//! Standard genetic code.

use hashbrown::HashMap;
use itertools::iproduct;
use once_cell::sync::Lazy;

/// Residue reported for stop codons.
pub const STOP: char = '*';
/// Residue reported for codons containing anything other than `ACGT`.
pub const UNKNOWN: char = 'X';

const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];
/// Amino acids in `TCAG` codon order (NCBI translation table 1).
const STANDARD_TABLE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

static GENETIC_CODE: Lazy<HashMap<[u8; 3], char>> = Lazy::new(|| {
    iproduct!(BASES, BASES, BASES)
        .zip(STANDARD_TABLE.iter())
        .map(|((first, second, third), aa)| ([first, second, third], *aa as char))
        .collect()
});

/// Translates one codon. Lowercase bases are accepted.
pub fn translate_codon(codon: &[u8]) -> char {
    let Ok(codon) = <[u8; 3]>::try_from(codon) else {
        return UNKNOWN;
    };
    GENETIC_CODE
        .get(&codon.map(|b| b.to_ascii_uppercase()))
        .copied()
        .unwrap_or(UNKNOWN)
}

/// Translates a coding sequence codon by codon. Stop codons are kept as
/// [`STOP`] and translation continues past them; a trailing partial codon is
/// dropped.
pub fn translate(seq: &[u8]) -> Vec<char> {
    seq.chunks_exact(3)
        .map(translate_codon)
        .collect()
}
