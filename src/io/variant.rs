use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use serde::Serialize;

use crate::data_structs::typedef::PosType;
use crate::errors::{GffError, Result};

/// Number of leading VCF columns the predictor needs.
const VARIANT_COLUMNS: usize = 5;
const MISSING_ALLELE: &str = ".";

/// The site-level part of a VCF-like row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantRecord {
    pub chrom:      String,
    /// 1-based position
    pub pos:        PosType,
    pub id:         String,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl VariantRecord {
    pub fn new(
        chrom: &str,
        pos: PosType,
        id: &str,
        ref_allele: &str,
        alt_allele: &str,
    ) -> Self {
        Self {
            chrom:      chrom.to_string(),
            pos,
            id:         id.to_string(),
            ref_allele: ref_allele.to_string(),
            alt_allele: alt_allele.to_string(),
        }
    }

    /// Single-base REF and ALT, with ALT not missing (`.`).
    pub fn is_snv(&self) -> bool {
        self.ref_allele.len() == 1
            && self.alt_allele.len() == 1
            && self.alt_allele != MISSING_ALLELE
    }

    /// 0-based position; `None` for position 0.
    pub fn zero_based(&self) -> Option<PosType> {
        self.pos.checked_sub(1)
    }

    pub fn alt_base(&self) -> Option<u8> {
        self.alt_allele.bytes().next()
    }
}

/// Iterates the variant rows of a VCF-like file. Header lines (`#`) and
/// blank lines are skipped; columns are whitespace-delimited and only the
/// first five are read.
pub struct VariantReader<R: Read> {
    lines:   Lines<BufReader<R>>,
    line_no: usize,
}

impl VariantReader<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> VariantReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines:   BufReader::new(reader).lines(),
            line_no: 0,
        }
    }

    fn parse_line(
        &self,
        line: &str,
    ) -> Result<VariantRecord> {
        let malformed = |reason: String| {
            GffError::MalformedVariant {
                line: self.line_no,
                reason,
            }
        };

        let fields: Vec<&str> = line
            .split_whitespace()
            .take(VARIANT_COLUMNS)
            .collect();
        if fields.len() < VARIANT_COLUMNS {
            return Err(malformed(format!(
                "expected at least {} columns, found {}",
                VARIANT_COLUMNS,
                fields.len()
            )));
        }
        let pos = fields[1]
            .parse::<PosType>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| {
                malformed(format!("POS is not a 1-based integer: {:?}", fields[1]))
            })?;

        Ok(VariantRecord::new(
            fields[0], pos, fields[2], fields[3], fields[4],
        ))
    }
}

impl<R: Read> Iterator for VariantReader<R> {
    type Item = Result<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line(&line));
        }
    }
}
