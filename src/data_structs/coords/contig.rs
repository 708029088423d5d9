use std::fmt::Display;
use std::ops::Range;

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::PosType;
use crate::errors::{GffError, Result};

/// Represents a zero-based, half-open region `[start, end)` on a sequence,
/// with a strand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contig {
    seqname: ArcStr,
    start:   PosType,
    end:     PosType,
    strand:  Strand,
}

impl Contig {
    /// Creates a new `Contig`. Fails when `start > end`.
    pub fn new(
        seqname: ArcStr,
        start: PosType,
        end: PosType,
        strand: Strand,
    ) -> Result<Self> {
        if start > end {
            return Err(GffError::Assembly(format!(
                "start {} is after end {} on {}",
                start, end, seqname
            )));
        }
        Ok(Self {
            seqname,
            start,
            end,
            strand,
        })
    }

    /// Returns the start position.
    pub fn start(&self) -> PosType {
        self.start
    }

    /// Returns the end position (exclusive).
    pub fn end(&self) -> PosType {
        self.end
    }

    /// Returns the strand of the contig.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Returns the sequence name of the contig.
    pub fn seqname(&self) -> &ArcStr {
        &self.seqname
    }

    /// Returns the length of the contig.
    pub fn length(&self) -> PosType {
        self.end - self.start
    }

    /// Positions covered by the contig, ascending.
    pub fn positions(&self) -> Range<PosType> {
        self.start..self.end
    }

    /// Byte range of the contig within its sequence.
    pub fn as_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl Display for Contig {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.seqname, self.start, self.end, self.strand
        )
    }
}
