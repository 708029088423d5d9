use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use gffsnp::prelude::*;
use log::info;

use crate::strings::query as strings;
use crate::utils::{validate_input, UtilsArgs};
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub(crate) struct QueryArgs {
    #[arg(short, long, required = true, help = strings::GFF)]
    gff: PathBuf,

    #[arg(long, default_value_t = false, help = strings::JSON)]
    json: bool,

    #[command(subcommand)]
    query: QueryKind,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum QueryKind {
    /// First feature with the given ID
    Feature { id: String },
    /// Parents of the features with the given ID
    Parents {
        id:           String,
        #[arg(short = 't', long = "type", help = strings::FEATURE_TYPE)]
        feature_type: Option<String>,
    },
    /// Features listing the given ID as a parent
    Children {
        id:           String,
        #[arg(short = 't', long = "type", help = strings::FEATURE_TYPE)]
        feature_type: Option<String>,
    },
    /// Children of every parent of the given ID
    Siblings {
        id:           String,
        #[arg(short = 't', long = "type", help = strings::FEATURE_TYPE)]
        feature_type: Option<String>,
    },
    /// Features on a sequence, optionally within a window
    Region {
        seq_id:       String,
        #[arg(long, help = strings::LEFT)]
        left:         Option<u64>,
        #[arg(long, help = strings::RIGHT)]
        right:        Option<u64>,
        #[arg(short = 't', long = "type", help = strings::FEATURE_TYPE)]
        feature_type: Option<String>,
    },
    /// Features with start <= POS < end
    Overlap {
        seq_id:       String,
        pos:          u64,
        #[arg(short = 't', long = "type", help = strings::FEATURE_TYPE)]
        feature_type: Option<String>,
    },
}

impl QueryKind {
    fn execute<'a>(
        &self,
        index: &'a FeatureIndex,
    ) -> gffsnp::errors::Result<Vec<&'a GffEntry>> {
        match self {
            QueryKind::Feature { id } => Ok(vec![index.get_feature(id)?]),
            QueryKind::Parents { id, feature_type } => {
                index.get_parents(id, feature_type.as_deref())
            },
            QueryKind::Children { id, feature_type } => {
                index.get_children(id, feature_type.as_deref())
            },
            QueryKind::Siblings { id, feature_type } => {
                index.get_siblings(id, feature_type.as_deref())
            },
            QueryKind::Region {
                seq_id,
                left,
                right,
                feature_type,
            } => {
                Ok(index.features_on_chromosome(
                    seq_id,
                    *left,
                    *right,
                    feature_type.as_deref(),
                ))
            },
            QueryKind::Overlap {
                seq_id,
                pos,
                feature_type,
            } => {
                Ok(index.overlapping_features(
                    seq_id,
                    *pos,
                    feature_type.as_deref(),
                ))
            },
        }
    }
}

impl PipelineCommand for QueryArgs {
    fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let index = GffReader::from_path(validate_input(&self.gff)?)
            .and_then(GffReader::read_index)
            .with_context(|| format!("Failed to load {}", self.gff.display()))?;

        let features = self.query.execute(&index)?;
        info!("{} matching features", features.len());

        let mut handle = BufWriter::new(stdout().lock());
        if self.json {
            serde_json::to_writer_pretty(&mut handle, &features)?;
            writeln!(handle)?;
        }
        else {
            for feature in features {
                writeln!(handle, "{}", feature)?;
            }
        }
        handle.flush()?;
        Ok(())
    }
}
