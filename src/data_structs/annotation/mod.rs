mod feature_index;
mod gff_entry;

pub use feature_index::FeatureIndex;
pub use gff_entry::{GffEntry, GffEntryAttributes, GFF_COLUMNS};

#[cfg(test)]
mod tests;
