use crate::data_structs::annotation::FeatureIndex;
use crate::data_structs::typedef::CODING_TYPE;
use crate::io::fasta::ReferenceMap;
use crate::tools::effect::EffectPredictor;
use crate::with_field_fn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Feature type assembled into coding sequences
    pub coding_type:      String,
    /// Emit a row for variants outside every coding feature
    pub report_noncoding: bool,
}

impl PredictorConfig {
    with_field_fn!(coding_type, String);
    with_field_fn!(report_noncoding, bool);

    pub fn new(
        coding_type: &str,
        report_noncoding: bool,
    ) -> Self {
        Self {
            coding_type: coding_type.to_string(),
            report_noncoding,
        }
    }

    pub fn finish<'a>(
        &self,
        index: &'a FeatureIndex,
        reference: &'a ReferenceMap,
    ) -> EffectPredictor<'a> {
        EffectPredictor::with_config(index, reference, self.clone())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            coding_type:      CODING_TYPE.to_string(),
            report_noncoding: true,
        }
    }
}
