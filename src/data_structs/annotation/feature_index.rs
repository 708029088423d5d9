use std::io::Read;

use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;

use crate::data_structs::annotation::GffEntry;
use crate::data_structs::typedef::{FeatureId, PosType};
use crate::errors::{GffError, Result};
use crate::io::gff::GffReader;

/// An ordered, in-memory collection of annotation records answering
/// relationship and positional queries.
///
/// Records keep file order. Queries are linear scans over that order, so
/// results are always reported in file order. A first-occurrence map from
/// `ID` to position is kept alongside for membership tests; duplicate IDs are
/// stored but only the first one is returned by [`FeatureIndex::get_feature`].
#[derive(Debug, Clone, Default)]
pub struct FeatureIndex {
    features:    Vec<GffEntry>,
    ids:         Vec<Option<FeatureId>>,
    first_by_id: HashMap<FeatureId, usize>,
}

impl FromIterator<GffEntry> for FeatureIndex {
    fn from_iter<T: IntoIterator<Item = GffEntry>>(iter: T) -> Self {
        let mut new_self = Self::new();
        iter.into_iter().for_each(|entry| {
            new_self.push(entry);
        });
        new_self
    }
}

impl FeatureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole GFF stream. Fails on the first malformed record.
    pub fn from_gff<R: Read>(reader: R) -> Result<Self> {
        GffReader::new(reader).read_index()
    }

    /// Appends a record, keeping file order.
    pub fn push(
        &mut self,
        entry: GffEntry,
    ) {
        let id = entry.attributes.id.clone();
        if let Some(id) = id.as_ref() {
            if self.first_by_id.contains_key(id) {
                debug!("Duplicate feature ID {}", id);
            }
            else {
                self.first_by_id
                    .insert(id.clone(), self.features.len());
            }
        }
        self.ids.push(id);
        self.features.push(entry);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GffEntry> {
        self.features.iter()
    }

    pub fn features(&self) -> &[GffEntry] {
        &self.features
    }

    /// `ID` values in file order, `None` for records without one.
    pub fn ids(&self) -> &[Option<FeatureId>] {
        &self.ids
    }

    pub fn contains(
        &self,
        id: &str,
    ) -> bool {
        self.first_by_id.contains_key(id)
    }

    fn require(
        &self,
        id: &str,
    ) -> Result<()> {
        if self.contains(id) {
            Ok(())
        }
        else {
            Err(GffError::FeatureNotFound(id.to_string()))
        }
    }

    /// Distinct feature types, in order of first appearance.
    pub fn feature_types(&self) -> Vec<&str> {
        self.features
            .iter()
            .map(|f| f.feature_type.as_str())
            .unique()
            .collect()
    }

    /// Distinct sequence identifiers, in order of first appearance.
    pub fn seqids(&self) -> Vec<&str> {
        self.features
            .iter()
            .map(|f| f.seqid.as_str())
            .unique()
            .collect()
    }

    /// Returns the first feature whose `ID` equals `id`.
    pub fn get_feature(
        &self,
        id: &str,
    ) -> Result<&GffEntry> {
        self.first_by_id
            .get(id)
            .map(|idx| &self.features[*idx])
            .ok_or_else(|| GffError::FeatureNotFound(id.to_string()))
    }

    /// Returns the parents of `id`, one level up.
    ///
    /// Parent IDs are collected from every record whose `ID` equals `id`;
    /// when `feature_type` is given, only records of that type contribute.
    /// The result holds every record whose `ID` is one of those parent IDs.
    pub fn get_parents(
        &self,
        id: &str,
        feature_type: Option<&str>,
    ) -> Result<Vec<&GffEntry>> {
        self.require(id)?;
        let parent_ids = self
            .features
            .iter()
            .filter(|f| f.id() == Some(id) && f.matches_type(feature_type))
            .flat_map(|f| f.parents().iter().map(|p| p.as_str()))
            .collect_vec();

        Ok(self
            .features
            .iter()
            .filter(|f| f.id().is_some_and(|fid| parent_ids.contains(&fid)))
            .collect())
    }

    /// Returns the records listing `id` as a parent, one level down,
    /// optionally restricted to `feature_type`.
    pub fn get_children(
        &self,
        id: &str,
        feature_type: Option<&str>,
    ) -> Result<Vec<&GffEntry>> {
        self.require(id)?;
        Ok(self
            .features
            .iter()
            .filter(|f| f.has_parent(id) && f.matches_type(feature_type))
            .collect())
    }

    /// Returns the children of every parent of `id`.
    ///
    /// `feature_type` is applied twice: once when looking up the parents and
    /// once when collecting their children. The queried record itself is part
    /// of the result.
    pub fn get_siblings(
        &self,
        id: &str,
        feature_type: Option<&str>,
    ) -> Result<Vec<&GffEntry>> {
        self.require(id)?;
        let mut siblings = Vec::new();
        for parent in self.get_parents(id, feature_type)? {
            if let Some(parent_id) = parent.id() {
                siblings.extend(self.get_children(parent_id, feature_type)?);
            }
        }
        Ok(siblings)
    }

    /// Returns the features on `seq_id`, optionally of `feature_type`.
    ///
    /// If either bound is given, a feature is kept when its `start` or its
    /// `end` lies in `[left, right)`. A missing or zero bound is unset: left
    /// defaults to `0`, right to unbounded. Features spanning the whole
    /// window without an endpoint in it are not reported.
    pub fn features_on_chromosome(
        &self,
        seq_id: &str,
        left: Option<PosType>,
        right: Option<PosType>,
        feature_type: Option<&str>,
    ) -> Vec<&GffEntry> {
        let on_chrom = self
            .features
            .iter()
            .filter(|f| f.seqid.as_str() == seq_id && f.matches_type(feature_type));

        let left = left.filter(|l| *l != 0);
        let right = right.filter(|r| *r != 0);
        if left.is_none() && right.is_none() {
            return on_chrom.collect();
        }
        let window = left.unwrap_or(0)..right.unwrap_or(PosType::MAX);
        on_chrom
            .filter(|f| window.contains(&f.start) || window.contains(&f.end))
            .collect()
    }

    /// Returns the features on `seq_id` with `start <= pos < end`,
    /// optionally of `feature_type`.
    pub fn overlapping_features(
        &self,
        seq_id: &str,
        pos: PosType,
        feature_type: Option<&str>,
    ) -> Vec<&GffEntry> {
        self.features
            .iter()
            .filter(|f| {
                f.seqid.as_str() == seq_id
                    && f.start <= pos
                    && pos < f.end
                    && f.matches_type(feature_type)
            })
            .collect()
    }

    /// Returns the features on `seq_id` whose closed interval
    /// `[start, end]` contains the 1-based position `pos`, optionally of
    /// `feature_type`.
    pub fn covering_features(
        &self,
        seq_id: &str,
        pos: PosType,
        feature_type: Option<&str>,
    ) -> Vec<&GffEntry> {
        self.features
            .iter()
            .filter(|f| {
                f.seqid.as_str() == seq_id
                    && f.start <= pos
                    && pos <= f.end
                    && f.matches_type(feature_type)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a FeatureIndex {
    type IntoIter = std::slice::Iter<'a, GffEntry>;
    type Item = &'a GffEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
