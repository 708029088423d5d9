//! Genomic coordinates.
//!
//! [`Contig`] is a zero-based, half-open region on a named sequence with a
//! strand. Annotation records keep their 1-based inclusive GFF coordinates;
//! they are converted into contigs when sequence has to be sliced.

mod contig;

pub use contig::Contig;
