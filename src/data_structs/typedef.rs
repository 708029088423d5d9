use smallstr::SmallString;

pub const SMALLSTR_SIZE: usize = 20;
/// Inline string used for feature identifiers (`ID` and `Parent` values).
pub type FeatureId = SmallString<[u8; SMALLSTR_SIZE]>;
/// Genomic coordinate type.
pub type PosType = u64;
/// Feature type used for coding sub-features unless configured otherwise.
pub const CODING_TYPE: &str = "CDS";
