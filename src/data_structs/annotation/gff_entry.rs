use std::fmt::{self, Write};
use std::str::FromStr;

use arcstr::ArcStr;
use log::{debug, warn};
use serde::{Serialize, Serializer};

use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::{FeatureId, PosType};
use crate::errors::{GffError, Result};
use crate::with_field_fn;

/// Number of tab-separated columns in a GFF record.
pub const GFF_COLUMNS: usize = 9;
const MISSING: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GffEntryAttributes {
    pub id:            Option<FeatureId>,
    pub name:          Option<String>,
    pub alias:         Option<Vec<String>>,
    pub parent:        Option<Vec<FeatureId>>,
    pub target:        Option<String>,
    pub gap:           Option<String>,
    pub derives_from:  Option<String>,
    pub note:          Option<Vec<String>>,
    pub dbxref:        Option<Vec<String>>,
    pub ontology_term: Option<Vec<String>>,
    pub is_circular:   Option<bool>,
}

fn split_list<T: for<'a> From<&'a str>>(value: &str) -> Vec<T> {
    value
        .split(',')
        .map(|s| s.into())
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

impl GffEntryAttributes {
    /// Sets the ID attribute.
    pub fn with_id<S: Into<FeatureId>>(
        mut self,
        id: Option<S>,
    ) -> Self {
        self.id = id.map(|s| s.into());
        self
    }

    /// Sets the Parent attribute.
    pub fn with_parent<S: Into<FeatureId>>(
        mut self,
        parent: Option<Vec<S>>,
    ) -> Self {
        self.parent = parent.map(|v| {
            v.into_iter()
                .map(|s| s.into())
                .collect()
        });
        self
    }

    with_field_fn!(name, Option<String>);

    with_field_fn!(alias, Option<Vec<String>>);

    with_field_fn!(target, Option<String>);

    with_field_fn!(gap, Option<String>);

    with_field_fn!(derives_from, Option<String>);

    with_field_fn!(note, Option<Vec<String>>);

    with_field_fn!(dbxref, Option<Vec<String>>);

    with_field_fn!(ontology_term, Option<Vec<String>>);

    with_field_fn!(is_circular, Option<bool>);
}

impl FromStr for GffEntryAttributes {
    type Err = GffError;

    /// Parses the ninth GFF column. Keys outside the recognized set are
    /// dropped, as are pairs without a value.
    fn from_str(s: &str) -> Result<Self> {
        let mut attributes = GffEntryAttributes::default();
        for pair in s.split(';') {
            let pair = pair.trim();
            if pair.is_empty() || pair == MISSING {
                continue;
            }

            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default().trim();
            let Some(value) = parts.next().map(str::trim) else {
                debug!("Skipping attribute without value: {}", pair);
                continue;
            };

            match key {
                "ID" => attributes.id = Some(value.into()),
                "Name" => attributes.name = Some(value.to_string()),
                "Alias" => attributes.alias = Some(split_list(value)),
                "Parent" => attributes.parent = Some(split_list(value)),
                "Target" => attributes.target = Some(value.to_string()),
                "Gap" => attributes.gap = Some(value.to_string()),
                "Derives_from" => {
                    attributes.derives_from = Some(value.to_string())
                },
                "Note" => attributes.note = Some(split_list(value)),
                "Dbxref" => attributes.dbxref = Some(split_list(value)),
                "Ontology_term" => {
                    attributes.ontology_term = Some(split_list(value))
                },
                "Is_circular" => attributes.is_circular = Some(parse_flag(value)),
                _ => debug!("Dropping unrecognized attribute {}", key),
            }
        }

        Ok(attributes)
    }
}

impl fmt::Display for GffEntryAttributes {
    /// Renders the attributes column in canonical key order.
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut serialized = String::with_capacity(128);
        let mut first = true;

        macro_rules! write_attr {
            // Single-valued fields
            ($field:expr, $key:literal) => {
                if let Some(val) = $field.as_ref() {
                    if !first {
                        serialized.push(';');
                    }
                    else {
                        first = false;
                    }
                    write!(serialized, "{}={}", $key, val)?;
                }
            };
            // List-valued fields
            ($field:expr, $key:literal, list) => {
                if let Some(val) = $field.as_ref() {
                    if !first {
                        serialized.push(';');
                    }
                    else {
                        first = false;
                    }
                    write!(serialized, "{}=", $key)?;
                    let mut first_val = true;
                    for item in val {
                        if !first_val {
                            serialized.push(',');
                        }
                        else {
                            first_val = false;
                        }
                        write!(serialized, "{}", item)?;
                    }
                }
            };
        }

        write_attr!(self.id, "ID");
        write_attr!(self.name, "Name");
        write_attr!(self.alias, "Alias", list);
        write_attr!(self.parent, "Parent", list);
        write_attr!(self.target, "Target");
        write_attr!(self.gap, "Gap");
        write_attr!(self.derives_from, "Derives_from");
        write_attr!(self.note, "Note", list);
        write_attr!(self.dbxref, "Dbxref", list);
        write_attr!(self.ontology_term, "Ontology_term", list);
        write_attr!(self.is_circular, "Is_circular");

        if first {
            serialized.push_str(MISSING);
        }
        f.write_str(&serialized)
    }
}

impl Serialize for GffEntryAttributes {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer, {
        serializer.collect_str(self)
    }
}

/// A single annotation record. Coordinates are kept as in the file:
/// 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GffEntry {
    pub seqid:        ArcStr,
    pub source:       ArcStr,
    pub feature_type: ArcStr,
    pub start:        PosType,
    pub end:          PosType,
    pub score:        Option<f64>,
    pub strand:       Strand,
    pub phase:        Option<u8>,
    pub attributes:   GffEntryAttributes,
}

fn malformed(reason: String) -> GffError {
    GffError::MalformedRecord { line: 0, reason }
}

fn parse_coordinate(
    value: &str,
    column: &str,
) -> Result<PosType> {
    value.trim().parse::<PosType>().map_err(|_| {
        malformed(format!("{} is not an integer: {:?}", column, value))
    })
}

impl GffEntry {
    pub fn new(
        seqid: ArcStr,
        start: PosType,
        end: PosType,
        strand: Strand,
        feature_type: Option<ArcStr>,
        attributes: Option<GffEntryAttributes>,
    ) -> Self {
        Self {
            seqid,
            start,
            end,
            strand,
            source: ArcStr::from(MISSING),
            feature_type: feature_type.unwrap_or_default(),
            score: None,
            phase: None,
            attributes: attributes.unwrap_or_default(),
        }
    }

    with_field_fn!(source, ArcStr);

    with_field_fn!(score, Option<f64>);

    with_field_fn!(phase, Option<u8>);

    /// The `ID` attribute, if present.
    pub fn id(&self) -> Option<&str> {
        self.attributes.id.as_ref().map(|id| id.as_str())
    }

    /// The `Parent` attribute, empty if absent.
    pub fn parents(&self) -> &[FeatureId] {
        self.attributes
            .parent
            .as_deref()
            .unwrap_or_default()
    }

    pub fn has_parent(
        &self,
        id: &str,
    ) -> bool {
        self.parents()
            .iter()
            .any(|p| p.as_str() == id)
    }

    /// `true` when no type filter is given or the feature has that type.
    pub fn matches_type(
        &self,
        feature_type: Option<&str>,
    ) -> bool {
        feature_type.map_or(true, |t| self.feature_type.as_str() == t)
    }
}

impl FromStr for GffEntry {
    type Err = GffError;

    /// Parses one GFF line. Only the column count and the coordinates are
    /// validated; an unreadable score or phase is treated as absent.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < GFF_COLUMNS {
            return Err(malformed(format!(
                "expected {} tab-separated fields, found {}",
                GFF_COLUMNS,
                fields.len()
            )));
        }

        let start = parse_coordinate(fields[3], "start")?;
        let end = parse_coordinate(fields[4], "end")?;
        if start > end {
            warn!(
                "Feature on {} has start {} after end {}",
                fields[0], start, end
            );
        }

        let score = match fields[5].trim() {
            MISSING | "" => None,
            raw => {
                raw.parse::<f64>()
                    .map_err(|_| warn!("Ignoring unreadable score {:?}", raw))
                    .ok()
            },
        };
        let phase = match fields[7].trim() {
            MISSING | "" => None,
            raw => {
                raw.parse::<u8>()
                    .map_err(|_| warn!("Ignoring unreadable phase {:?}", raw))
                    .ok()
            },
        };
        let strand = Strand::from_str(fields[6].trim()).unwrap_or_default();
        let attributes = GffEntryAttributes::from_str(fields[8])?;

        Ok(GffEntry {
            seqid: ArcStr::from(fields[0]),
            source: ArcStr::from(fields[1]),
            feature_type: ArcStr::from(fields[2]),
            start,
            end,
            score,
            strand,
            phase,
            attributes,
        })
    }
}

impl fmt::Display for GffEntry {
    /// Renders the record as a 9-column GFF line (without newline).
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let score = self
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| MISSING.to_string());
        let phase = self
            .phase
            .map(|p| p.to_string())
            .unwrap_or_else(|| MISSING.to_string());
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.seqid,
            self.source,
            self.feature_type,
            self.start,
            self.end,
            score,
            self.strand,
            phase,
            self.attributes
        )
    }
}
