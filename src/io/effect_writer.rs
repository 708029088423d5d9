use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::data_structs::typedef::PosType;
use crate::errors::{GffError, Result};
use crate::io::variant::VariantRecord;

/// Placeholder written for fields that do not apply to a row.
pub const NOT_APPLICABLE: &str = "-";

/// Column names of the effect table.
pub const EFFECT_HEADER: [&str; 11] = [
    "SNP_ID",
    "Chromosome",
    "Position",
    "Silent",
    "Transcript_ID",
    "Codon_Position",
    "Ref_Base",
    "Alt_Base",
    "AA1",
    "AA2",
    "CDS_Pos",
];

/// One row of the effect table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectRecord {
    #[serde(rename = "SNP_ID")]
    pub snp_id:         String,
    #[serde(rename = "Chromosome")]
    pub chromosome:     String,
    /// 1-based
    #[serde(rename = "Position")]
    pub position:       PosType,
    #[serde(rename = "Silent", serialize_with = "yes_no")]
    pub silent:         bool,
    #[serde(rename = "Transcript_ID")]
    pub transcript_id:  String,
    #[serde(rename = "Codon_Position", serialize_with = "or_dash")]
    pub codon_position: Option<u8>,
    #[serde(rename = "Ref_Base")]
    pub ref_base:       String,
    #[serde(rename = "Alt_Base")]
    pub alt_base:       String,
    #[serde(rename = "AA1", serialize_with = "or_dash")]
    pub ref_aa:         Option<char>,
    #[serde(rename = "AA2", serialize_with = "or_dash")]
    pub alt_aa:         Option<char>,
    /// Residue number of the affected codon, 1-based
    #[serde(rename = "CDS_Pos", serialize_with = "or_dash")]
    pub residue:        Option<PosType>,
}

impl EffectRecord {
    /// Row for a variant that falls outside every coding feature.
    pub fn noncoding(variant: &VariantRecord) -> Self {
        Self {
            snp_id:         variant.id.clone(),
            chromosome:     variant.chrom.clone(),
            position:       variant.pos,
            silent:         true,
            transcript_id:  NOT_APPLICABLE.to_string(),
            codon_position: None,
            ref_base:       variant.ref_allele.clone(),
            alt_base:       variant.alt_allele.clone(),
            ref_aa:         None,
            alt_aa:         None,
            residue:        None,
        }
    }

    pub fn is_coding(&self) -> bool {
        self.transcript_id != NOT_APPLICABLE
    }
}

fn yes_no<S: Serializer>(
    value: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "Yes" } else { "No" })
}

fn or_dash<T: Display, S: Serializer>(
    value: &Option<T>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_str(NOT_APPLICABLE),
    }
}

/// Writes [`EffectRecord`]s as a tab-delimited table. The header row is
/// emitted even when no record is written.
pub struct EffectWriter<W: Write> {
    writer:         csv::Writer<W>,
    header_written: bool,
}

impl EffectWriter<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> EffectWriter<W> {
    pub fn new(handle: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(handle);
        Self {
            writer,
            header_written: false,
        }
    }

    fn ensure_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(EFFECT_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }

    pub fn write_record(
        &mut self,
        record: &EffectRecord,
    ) -> Result<()> {
        self.ensure_header()?;
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.ensure_header()?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying handle.
    pub fn into_inner(mut self) -> Result<W> {
        self.ensure_header()?;
        self.writer
            .into_inner()
            .map_err(|e| GffError::Io(e.into_error()))
    }
}
