use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use crate::data_structs::annotation::{FeatureIndex, GffEntry};
use crate::errors::Result;

/// Directive after which a GFF3 file carries embedded FASTA, not records.
const FASTA_DIRECTIVE: &str = "##FASTA";

/// Reads GFF records line by line.
///
/// Comment and directive lines (`#`) and blank lines are skipped. Reading
/// stops at a `##FASTA` directive.
pub struct GffReader<R: Read> {
    lines:   Lines<BufReader<R>>,
    line_no: usize,
    done:    bool,
}

impl GffReader<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("Opened GFF file {}", path.as_ref().display());
        Ok(Self::new(file))
    }
}

impl<R: Read> GffReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines:   BufReader::new(reader).lines(),
            line_no: 0,
            done:    false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Consumes the reader into a [`FeatureIndex`]. Either every record
    /// parses or no index is returned.
    pub fn read_index(self) -> Result<FeatureIndex> {
        let index = self.collect::<Result<FeatureIndex>>()?;
        info!(
            "Loaded {} features on {} sequences",
            index.len(),
            index.seqids().len()
        );
        Ok(index)
    }
}

impl<R: Read> Iterator for GffReader<R> {
    type Item = Result<GffEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                },
            };
            self.line_no += 1;

            if line.starts_with(FASTA_DIRECTIVE) {
                debug!("Reached {} at line {}", FASTA_DIRECTIVE, self.line_no);
                self.done = true;
                return None;
            }
            if line.starts_with('#') || line.trim_end_matches('\r').is_empty() {
                continue;
            }

            let line_no = self.line_no;
            let parsed = GffEntry::from_str(&line).map_err(|e| e.at_line(line_no));
            if parsed.is_err() {
                self.done = true;
            }
            return Some(parsed);
        }
    }
}
