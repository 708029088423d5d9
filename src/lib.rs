//! # gffsnp
//!
//! `gffsnp` is a Rust library and command-line tool for querying GFF3 genome
//! annotations and predicting the protein-level effect of single nucleotide
//! variants. It loads an annotation into an in-memory [`FeatureIndex`],
//! answers relationship (parents, children, siblings) and positional
//! queries over it, and classifies substitutions inside coding sequences as
//! silent or amino-acid changing.
//!
//! If you do not want to use gffsnp as crate, check out the `gffsnp`
//! command-line tool built from the `console` workspace member.
//!
//! ## Key Features
//!
//! * **Annotation index**: GFF3 records ([`GffEntry`]) with typed attributes
//!   ([`GffEntryAttributes`]) kept in file order, with one-level parent and
//!   child lookups, sibling lookups and range/overlap queries.
//! * **Streaming readers**: [`GffReader`] for annotations (reports the line
//!   of a malformed record), FASTA reference loading through `bio-rs`, and
//!   [`VariantReader`] for VCF-like variant rows.
//! * **Effect prediction**: CDS features of a transcript are joined into a
//!   [`SpliceAssembly`] in transcript orientation, the variant is located in
//!   it and the affected codon is translated with the standard genetic code
//!   ([`EffectPredictor`]).
//! * **Tabular output**: [`EffectWriter`] writes one tab-delimited row per
//!   variant.
//!
//! ## Structure
//!
//! * [`data_structs`]: annotation records, the [`FeatureIndex`], genomic
//!   coordinates ([`Contig`]) and [`Strand`].
//! * [`io`]: GFF, FASTA and variant readers and the effect table writer.
//! * [`tools`]: coding-sequence assembly, translation and the predictor.
//! * [`utils`]: helper macros and base complementing.
//!
//! Log output goes through the `log` facade; enable it with any logger, for
//! example `pretty_env_logger` and `RUST_LOG=debug`.
//!
//! ## Usage
//!
//! ### Querying an annotation
//!
//! ```no_run
//! use gffsnp::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let index = GffReader::from_path("path/to/annotation.gff3")?.read_index()?;
//!
//!     // Transcripts of a gene
//!     for transcript in index.get_children("gene1", Some("mRNA"))? {
//!         println!("{}", transcript);
//!     }
//!
//!     // Everything starting or ending within the first 10 kb of chr1
//!     let genes = index.features_on_chromosome("chr1", Some(0), Some(10_000), Some("gene"));
//!     println!("{} genes", genes.len());
//!     Ok(())
//! }
//! ```
//!
//! ### Predicting variant effects
//!
//! ```no_run
//! use std::io::stdout;
//! use gffsnp::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let index = GffReader::from_path("path/to/annotation.gff3")?.read_index()?;
//!     let reference = read_reference_path("path/to/genome.fa")?;
//!     let predictor = PredictorConfig::default()
//!         .with_report_noncoding(false)
//!         .finish(&index, &reference);
//!
//!     let mut writer = EffectWriter::new(stdout());
//!     for variant in VariantReader::from_path("path/to/variants.vcf")? {
//!         if let Some(record) = predictor.predict(&variant?)? {
//!             writer.write_record(&record)?;
//!         }
//!     }
//!     writer.flush()?;
//!     Ok(())
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod data_structs;
pub mod errors;
pub mod io;
pub mod prelude;
pub mod tools;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
