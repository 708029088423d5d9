use itertools::Itertools;
use log::{debug, warn};

use crate::data_structs::annotation::{FeatureIndex, GffEntry};
use crate::data_structs::typedef::PosType;
use crate::errors::{GffError, Result};
use crate::io::effect_writer::{EffectRecord, NOT_APPLICABLE};
use crate::io::fasta::ReferenceMap;
use crate::io::variant::VariantRecord;
use crate::tools::effect::assembly::{assemble_coding_sequence, SpliceAssembly};
use crate::tools::effect::codon::translate;
use crate::tools::effect::PredictorConfig;
use crate::utils::{complement_allele, complement_base};

/// Amino-acid change caused by a substitution inside a coding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonChange {
    pub reverse_strand:    bool,
    pub ref_aa:            char,
    pub alt_aa:            char,
    /// 1-based number of the affected codon
    pub residue_number:    PosType,
    /// 1-based position of the substitution within the codon
    pub position_in_codon: u8,
}

impl CodonChange {
    pub fn is_silent(&self) -> bool {
        self.ref_aa == self.alt_aa
    }
}

/// Outcome of [`locate_and_translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    Mapped(CodonChange),
    /// The position is not covered by the assembly or falls in an incomplete
    /// trailing codon.
    Unmapped,
}

impl Translation {
    /// Always `false` for [`Translation::Unmapped`].
    pub fn is_reverse_strand(&self) -> bool {
        match self {
            Translation::Mapped(change) => change.reverse_strand,
            Translation::Unmapped => false,
        }
    }

    pub fn amino_acids(&self) -> Option<(char, char)> {
        match self {
            Translation::Mapped(change) => Some((change.ref_aa, change.alt_aa)),
            Translation::Unmapped => None,
        }
    }

    pub fn residue_number(&self) -> Option<PosType> {
        match self {
            Translation::Mapped(change) => Some(change.residue_number),
            Translation::Unmapped => None,
        }
    }

    pub fn position_in_codon(&self) -> Option<u8> {
        match self {
            Translation::Mapped(change) => Some(change.position_in_codon),
            Translation::Unmapped => None,
        }
    }

    /// Unmapped positions count as silent: both residues are reported as
    /// the same placeholder.
    pub fn is_silent(&self) -> bool {
        match self {
            Translation::Mapped(change) => change.is_silent(),
            Translation::Unmapped => true,
        }
    }
}

/// Translates the codon hit by substituting `alt_base` at the zero-based
/// genomic `position` of `full_sequence`.
///
/// `alt_base` is given on the forward strand and complemented for reverse
/// strand assemblies. A position outside the assembly is not an error and
/// yields [`Translation::Unmapped`].
pub fn locate_and_translate(
    assembly: &SpliceAssembly,
    full_sequence: &[u8],
    position: PosType,
    alt_base: u8,
) -> Result<Translation> {
    let cds = assembly.extract(full_sequence)?;
    let reverse_strand = assembly.is_reverse();
    let alt_base = if reverse_strand {
        complement_base(alt_base.to_ascii_uppercase())
    }
    else {
        alt_base.to_ascii_uppercase()
    };

    let Some(cds_offset) = assembly
        .covered_positions()
        .iter()
        .position(|p| *p == position)
    else {
        debug!(
            "Position {} is not covered by the assembly on {}",
            position,
            assembly.seqid()
        );
        return Ok(Translation::Unmapped);
    };
    let codon_index = cds_offset / 3;

    let mut alt_cds = cds.clone();
    alt_cds[cds_offset] = alt_base;
    let ref_protein = translate(&cds);
    let alt_protein = translate(&alt_cds);

    match (ref_protein.get(codon_index), alt_protein.get(codon_index)) {
        (Some(ref_aa), Some(alt_aa)) => {
            Ok(Translation::Mapped(CodonChange {
                reverse_strand,
                ref_aa: *ref_aa,
                alt_aa: *alt_aa,
                residue_number: codon_index as PosType + 1,
                position_in_codon: (cds_offset % 3) as u8 + 1,
            }))
        },
        _ => {
            debug!(
                "Position {} falls in an incomplete codon on {}",
                position,
                assembly.seqid()
            );
            Ok(Translation::Unmapped)
        },
    }
}

/// Predicts the protein-level effect of single nucleotide variants.
///
/// Annotation and reference are borrowed; one predictor can serve any number
/// of variants.
pub struct EffectPredictor<'a> {
    index:     &'a FeatureIndex,
    reference: &'a ReferenceMap,
    config:    PredictorConfig,
}

impl<'a> EffectPredictor<'a> {
    pub fn new(
        index: &'a FeatureIndex,
        reference: &'a ReferenceMap,
    ) -> Self {
        Self::with_config(index, reference, PredictorConfig::default())
    }

    pub fn with_config(
        index: &'a FeatureIndex,
        reference: &'a ReferenceMap,
        config: PredictorConfig,
    ) -> Self {
        Self {
            index,
            reference,
            config,
        }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Predicts the effect of one variant.
    ///
    /// Returns `None` for anything but a single-base substitution, and for
    /// non-coding variants when those are not reported. The first coding
    /// feature covering the variant decides the transcript.
    pub fn predict(
        &self,
        variant: &VariantRecord,
    ) -> Result<Option<EffectRecord>> {
        let Some(alt_base) = variant
            .alt_base()
            .filter(|_| variant.is_snv())
        else {
            debug!(
                "Skipping {} at {}:{}: not a single base substitution",
                variant.id, variant.chrom, variant.pos
            );
            return Ok(None);
        };
        let Some(position) = variant.zero_based() else {
            warn!(
                "Skipping {} at {}:0: positions are 1-based",
                variant.id, variant.chrom
            );
            return Ok(None);
        };

        let sequence = self
            .reference
            .get(&variant.chrom)
            .ok_or_else(|| GffError::UnknownSequence(variant.chrom.clone()))?;
        self.check_reference_base(variant, sequence, position);

        let coding_type = self.config.coding_type.as_str();
        let covering =
            self.index
                .covering_features(&variant.chrom, variant.pos, Some(coding_type));
        let Some(&feature) = covering.first() else {
            return Ok(self
                .config
                .report_noncoding
                .then(|| EffectRecord::noncoding(variant)));
        };

        let (transcript_id, coding_features) = self.coding_group(feature)?;
        let assembly = assemble_coding_sequence(&coding_features)?;
        let translation =
            locate_and_translate(&assembly, sequence, position, alt_base)?;

        let (ref_base, alt_base) = if translation.is_reverse_strand() {
            (
                complement_allele(&variant.ref_allele),
                complement_allele(&variant.alt_allele),
            )
        }
        else {
            (variant.ref_allele.clone(), variant.alt_allele.clone())
        };
        let (ref_aa, alt_aa) = translation.amino_acids().unzip();

        Ok(Some(EffectRecord {
            snp_id: variant.id.clone(),
            chromosome: variant.chrom.clone(),
            position: variant.pos,
            silent: translation.is_silent(),
            transcript_id,
            codon_position: translation.position_in_codon(),
            ref_base,
            alt_base,
            ref_aa,
            alt_aa,
            residue: translation.residue_number(),
        }))
    }

    /// Transcript identifier and all coding features sharing the
    /// transcript of `feature`.
    ///
    /// Only the first transcript is assembled when a coding feature lists
    /// several parents.
    fn coding_group(
        &self,
        feature: &'a GffEntry,
    ) -> Result<(String, Vec<&'a GffEntry>)> {
        let coding_type = Some(self.config.coding_type.as_str());
        if feature.parents().len() > 1 {
            warn!(
                "{} {}:{}-{} has {} parents; only the first transcript is assembled",
                feature.feature_type,
                feature.seqid,
                feature.start,
                feature.end,
                feature.parents().len()
            );
        }

        if let Some(id) = feature.id() {
            let Some(transcript_id) = self
                .index
                .get_parents(id, None)?
                .first()
                .and_then(|p| p.id())
                .map(str::to_string)
            else {
                return Ok((NOT_APPLICABLE.to_string(), vec![feature]));
            };
            let siblings = self
                .index
                .get_siblings(id, coding_type)?
                .into_iter()
                .filter(|f| f.has_parent(&transcript_id))
                .unique_by(|f| *f as *const GffEntry)
                .collect_vec();
            if siblings.is_empty() {
                return Ok((transcript_id, vec![feature]));
            }
            return Ok((transcript_id, siblings));
        }

        match feature.parents().first() {
            Some(parent) if self.index.contains(parent) => {
                let children = self.index.get_children(parent, coding_type)?;
                Ok((parent.to_string(), children))
            },
            Some(parent) => Ok((parent.to_string(), vec![feature])),
            None => Ok((NOT_APPLICABLE.to_string(), vec![feature])),
        }
    }

    fn check_reference_base(
        &self,
        variant: &VariantRecord,
        sequence: &[u8],
        position: PosType,
    ) {
        let expected = variant.ref_allele.as_bytes().first();
        let found = sequence.get(position as usize);
        match (expected, found) {
            (Some(expected), Some(found))
                if !expected.eq_ignore_ascii_case(found) =>
            {
                warn!(
                    "REF {} of {} does not match reference base {} at {}:{}",
                    variant.ref_allele,
                    variant.id,
                    *found as char,
                    variant.chrom,
                    variant.pos
                );
            },
            (_, None) => {
                warn!(
                    "{} lies beyond the end of {} ({} bp)",
                    variant.id,
                    variant.chrom,
                    sequence.len()
                );
            },
            _ => {},
        }
    }
}
