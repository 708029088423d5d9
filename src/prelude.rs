pub use crate::data_structs::annotation::{
    FeatureIndex,
    GffEntry,
    GffEntryAttributes,
};
pub use crate::data_structs::coords::Contig;
pub use crate::data_structs::typedef::{
    FeatureId,
    PosType,
};
pub use crate::data_structs::Strand;
pub use crate::errors::{
    GffError,
    Result,
};
pub use crate::io::{
    read_reference,
    read_reference_path,
    EffectRecord,
    EffectWriter,
    GffReader,
    ReferenceMap,
    VariantReader,
    VariantRecord,
};
pub use crate::tools::effect::{
    assemble_coding_sequence,
    locate_and_translate,
    EffectPredictor,
    PredictorConfig,
    SpliceAssembly,
    Translation,
};
