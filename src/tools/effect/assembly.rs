use arcstr::ArcStr;
use itertools::Itertools;

use crate::data_structs::annotation::GffEntry;
use crate::data_structs::coords::Contig;
use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::PosType;
use crate::errors::{GffError, Result};
use crate::utils::complement_base;

/// Coding segments of one transcript, joined in transcript order.
///
/// Segments are zero-based, half-open. On the forward strand they are
/// ordered by ascending start, on the reverse strand by descending start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceAssembly {
    seqid:    ArcStr,
    segments: Vec<Contig>,
    strand:   Strand,
}

impl SpliceAssembly {
    pub fn seqid(&self) -> &ArcStr {
        &self.seqid
    }

    pub fn segments(&self) -> &[Contig] {
        &self.segments
    }

    /// [`Strand::Reverse`] or [`Strand::Forward`]; unstranded segments are
    /// read as forward.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn is_reverse(&self) -> bool {
        self.strand.is_reverse()
    }

    /// Total number of covered bases.
    pub fn len(&self) -> usize {
        self.segments
            .iter()
            .map(|s| s.length() as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Genomic positions covered by the assembly, in transcript order:
    /// ascending on the forward strand, descending on the reverse strand.
    pub fn covered_positions(&self) -> Vec<PosType> {
        if self.is_reverse() {
            self.segments
                .iter()
                .flat_map(|s| s.positions().rev())
                .collect()
        }
        else {
            self.segments
                .iter()
                .flat_map(|s| s.positions())
                .collect()
        }
    }

    /// Coding sequence read from `sequence` in transcript orientation
    /// (reverse complemented on the reverse strand).
    pub fn extract(
        &self,
        sequence: &[u8],
    ) -> Result<Vec<u8>> {
        let mut cds = Vec::with_capacity(self.len());
        for segment in self.segments.iter() {
            let bases = sequence
                .get(segment.as_range())
                .ok_or_else(|| {
                    GffError::Assembly(format!(
                        "segment {} lies beyond the end of {} ({} bp)",
                        segment,
                        self.seqid,
                        sequence.len()
                    ))
                })?;
            if self.is_reverse() {
                cds.extend(bases.iter().rev().map(|b| complement_base(*b)));
            }
            else {
                cds.extend_from_slice(bases);
            }
        }
        Ok(cds)
    }
}

/// Joins the coding features of one transcript into a [`SpliceAssembly`].
///
/// Each feature becomes the zero-based segment `[start - 1, end)`. Fails
/// when `features` is empty, spans several sequences, mixes strands or
/// contains an invalid interval.
pub fn assemble_coding_sequence(features: &[&GffEntry]) -> Result<SpliceAssembly> {
    let Some(first) = features.first() else {
        return Err(GffError::Assembly("no coding features given".into()));
    };

    if let Some(other) = features
        .iter()
        .find(|f| f.seqid != first.seqid)
    {
        return Err(GffError::Assembly(format!(
            "coding features lie on both {} and {}",
            first.seqid, other.seqid
        )));
    }

    let strands = features
        .iter()
        .map(|f| f.strand.is_reverse())
        .unique()
        .collect_vec();
    if strands.len() > 1 {
        return Err(GffError::Assembly(format!(
            "coding features on {} mix strands",
            first.seqid
        )));
    }
    let strand = if strands[0] {
        Strand::Reverse
    }
    else {
        Strand::Forward
    };

    if let Some(bad) = features
        .iter()
        .find(|f| f.start == 0 || f.start > f.end)
    {
        return Err(GffError::Assembly(format!(
            "invalid coding interval {}-{} on {}",
            bad.start, bad.end, bad.seqid
        )));
    }

    let mut segments = features
        .iter()
        .map(|f| Contig::new(f.seqid.clone(), f.start - 1, f.end, strand))
        .collect::<Result<Vec<_>>>()?;
    segments.sort_by_key(|s| s.start());
    if strand.is_reverse() {
        segments.reverse();
    }

    Ok(SpliceAssembly {
        seqid: first.seqid.clone(),
        segments,
        strand,
    })
}
