//! This module contains the core data structures used throughout the
//! `gffsnp` crate for representing annotation records and genomic
//! locations.
//!
//! Key components of this module include:
//!
//! - [`annotation`]: GFF3 records ([`GffEntry`], [`GffEntryAttributes`]) and
//!   the [`FeatureIndex`] answering relationship (parents, children,
//!   siblings) and positional queries over them.
//! - [`coords`]: [`Contig`], a zero-based half-open region on a named
//!   sequence.
//! - [`Strand`], the strand enumeration shared by records and regions.
//! - [`typedef`]: type aliases for positions and feature identifiers.
//!
//! [`GffEntry`]: annotation::GffEntry
//! [`GffEntryAttributes`]: annotation::GffEntryAttributes
//! [`FeatureIndex`]: annotation::FeatureIndex
//! [`Contig`]: coords::Contig

pub mod annotation;
pub mod coords;
pub mod enums;
pub mod typedef;

pub use enums::Strand;
