use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use gffsnp::prelude::*;
use log::info;

use crate::strings::predict as strings;
use crate::utils::{init_progress, validate_input, validate_output, UtilsArgs};
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub(crate) struct PredictArgs {
    #[arg(short, long, required = true, help = strings::REFERENCE)]
    reference: PathBuf,

    #[arg(short, long, required = true, help = strings::GFF)]
    gff: PathBuf,

    #[arg(short, long, required = true, help = strings::VCF)]
    vcf: PathBuf,

    #[arg(short, long, help = strings::OUTPUT)]
    output: Option<PathBuf>,

    #[arg(long = "coding-type", default_value = "CDS", help = strings::CODING_TYPE)]
    coding_type: String,

    #[arg(long = "skip-noncoding", default_value_t = false, help = strings::SKIP_NONCODING)]
    skip_noncoding: bool,
}

impl PredictArgs {
    fn open_output(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                validate_output(path)?;
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                info!("Writing effects to {}", path.display());
                Ok(Box::new(BufWriter::new(file)))
            },
            None => Ok(Box::new(BufWriter::new(stdout().lock()))),
        }
    }
}

impl PipelineCommand for PredictArgs {
    fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let index = GffReader::from_path(validate_input(&self.gff)?)
            .and_then(GffReader::read_index)
            .with_context(|| format!("Failed to load {}", self.gff.display()))?;
        let reference = read_reference_path(validate_input(&self.reference)?)
            .with_context(|| format!("Failed to load {}", self.reference.display()))?;
        let variants = VariantReader::from_path(validate_input(&self.vcf)?)?;

        let predictor = PredictorConfig::default()
            .with_coding_type(self.coding_type.clone())
            .with_report_noncoding(!self.skip_noncoding)
            .finish(&index, &reference);
        let mut writer = EffectWriter::new(self.open_output()?);
        let progress_bar = init_progress(utils.progress)?;

        let (mut total, mut coding, mut written) = (0usize, 0usize, 0usize);
        for variant in variants {
            let variant =
                variant.with_context(|| format!("Failed to read {}", self.vcf.display()))?;
            total += 1;
            progress_bar.inc(1);

            if let Some(record) = predictor
                .predict(&variant)
                .with_context(|| format!("Failed to predict effect of {}", variant.id))?
            {
                if record.is_coding() {
                    coding += 1;
                }
                writer.write_record(&record)?;
                written += 1;
            }
        }
        writer.flush()?;
        progress_bar.finish_and_clear();

        info!(
            "Processed {} variants: {} rows written, {} in coding sequence",
            total, written, coding
        );
        Ok(())
    }
}
