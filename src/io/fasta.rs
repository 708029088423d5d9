use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta::Reader as FastaReader;
use hashbrown::HashMap;
use log::info;

use crate::errors::{GffError, Result};

/// Reference sequences keyed by record identifier, uppercase.
pub type ReferenceMap = HashMap<String, Vec<u8>>;

/// Reads every FASTA record into memory, normalizing bases to uppercase.
/// Two records with the same identifier are an error.
pub fn read_reference<R: Read>(reader: R) -> Result<ReferenceMap> {
    let mut reference = ReferenceMap::new();
    for record in FastaReader::new(reader).records() {
        let record = record?;
        let id = record.id().to_string();
        if reference.contains_key(&id) {
            return Err(GffError::DuplicateSequence(id));
        }
        reference.insert(id, record.seq().to_ascii_uppercase());
    }
    info!(
        "Loaded {} reference sequences ({} bp)",
        reference.len(),
        reference.values().map(Vec::len).sum::<usize>()
    );
    Ok(reference)
}

pub fn read_reference_path<P: AsRef<Path>>(path: P) -> Result<ReferenceMap> {
    read_reference(File::open(path)?)
}
