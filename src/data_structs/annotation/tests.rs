use std::str::FromStr;

use arcstr::ArcStr;
use assert_approx_eq::assert_approx_eq;
use rstest::{fixture, rstest};

use super::*;
use crate::data_structs::enums::Strand;
use crate::errors::GffError;

const ANNOTATION: &str = "\
##gff-version 3
# a comment
chr1\ttest\tgene\t90\t300\t.\t+\t.\tID=g1;Name=GeneOne
chr1\ttest\tmRNA\t101\t203\t.\t+\t.\tID=t1;Parent=g1
chr1\ttest\texon\t101\t103\t.\t+\t.\tID=e1;Parent=t1
chr1\ttest\tCDS\t101\t103\t.\t+\t0\tID=c1;Parent=t1
chr1\ttest\tCDS\t201\t203\t.\t+\t0\tID=c2;Parent=t1

chr1\ttest\tsnoRNA\t400\t420\t7.5\t-\t.\tNote=no id here
chr2\ttest\tgene\t5\t50\t.\t-\t.\tID=g2
";

#[fixture]
fn index() -> FeatureIndex {
    FeatureIndex::from_gff(ANNOTATION.as_bytes()).unwrap()
}

fn ids<'a>(features: &[&'a GffEntry]) -> Vec<&'a str> {
    features
        .iter()
        .map(|f| f.id().unwrap_or("-"))
        .collect()
}

#[test]
fn test_gff_entry_attributes_deserialization() {
    let gff_string =
        "ID=gene123;Name=my_gene;Alias=another_name,other_name;custom=value;";
    let deserialized = GffEntryAttributes::from_str(gff_string).unwrap();

    let expected_attributes = GffEntryAttributes::default()
        .with_id(Some("gene123"))
        .with_name(Some("my_gene".to_string()))
        .with_alias(Some(vec!["another_name".into(), "other_name".into()]));

    assert_eq!(deserialized, expected_attributes);
}

#[test]
fn test_gff_entry_attributes_list_fields() {
    let attributes = GffEntryAttributes::from_str(
        "Parent=t1,t2;Note=first,second;Dbxref=GO:1,GO:2;Ontology_term=SO:0000316;\
         Target=EST23 1 21;Gap=M8 D3 M6;Derives_from=p1;Is_circular=true",
    )
    .unwrap();

    assert_eq!(
        attributes.parent,
        Some(vec!["t1".into(), "t2".into()])
    );
    assert_eq!(
        attributes.note,
        Some(vec!["first".to_string(), "second".to_string()])
    );
    assert_eq!(attributes.dbxref.as_ref().map(Vec::len), Some(2));
    assert_eq!(
        attributes.ontology_term,
        Some(vec!["SO:0000316".to_string()])
    );
    assert_eq!(attributes.target.as_deref(), Some("EST23 1 21"));
    assert_eq!(attributes.gap.as_deref(), Some("M8 D3 M6"));
    assert_eq!(attributes.derives_from.as_deref(), Some("p1"));
    assert_eq!(attributes.is_circular, Some(true));
    assert_eq!(attributes.id, None);
}

#[test]
fn test_gff_entry_attributes_serialization() {
    let attributes = GffEntryAttributes::default()
        .with_parent(Some(vec!["t1", "t2"]))
        .with_id(Some("gene123"))
        .with_name(Some("my_gene".to_string()));

    assert_eq!(attributes.to_string(), "ID=gene123;Name=my_gene;Parent=t1,t2");
    assert_eq!(GffEntryAttributes::default().to_string(), ".");
}

#[test]
fn test_gff_entry_parse() {
    let entry = GffEntry::from_str(
        "chr1\tsrc\tCDS\t100\t200\t0.9\t-\t2\tID=c1;Parent=t1\r\n",
    )
    .unwrap();

    assert_eq!(entry.seqid, ArcStr::from("chr1"));
    assert_eq!(entry.source, ArcStr::from("src"));
    assert_eq!(entry.feature_type, ArcStr::from("CDS"));
    assert_eq!(entry.start, 100);
    assert_eq!(entry.end, 200);
    assert_approx_eq!(entry.score.unwrap(), 0.9);
    assert_eq!(entry.strand, Strand::Reverse);
    assert_eq!(entry.phase, Some(2));
    assert_eq!(entry.id(), Some("c1"));
    assert!(entry.has_parent("t1"));
}

#[test]
fn test_gff_entry_missing_optionals() {
    let entry =
        GffEntry::from_str("chr1\tsrc\tgene\t1\t10\t.\t.\t.\t.").unwrap();
    assert_eq!(entry.score, None);
    assert_eq!(entry.phase, None);
    assert_eq!(entry.strand, Strand::None);
    assert_eq!(entry.attributes, GffEntryAttributes::default());
    assert!(entry.parents().is_empty());
}

#[rstest]
#[case::too_few_fields("chr1\tsrc\tgene\t1\t10\t.\t+\t.")]
#[case::start_not_integer("chr1\tsrc\tgene\tone\t10\t.\t+\t.\tID=g")]
#[case::end_not_integer("chr1\tsrc\tgene\t1\t10.5\t.\t+\t.\tID=g")]
#[case::negative_start("chr1\tsrc\tgene\t-1\t10\t.\t+\t.\tID=g")]
fn test_gff_entry_malformed(#[case] line: &str) {
    let err = GffEntry::from_str(line).unwrap_err();
    assert!(matches!(err, GffError::MalformedRecord { .. }));
}

#[rstest]
#[case("chr1\ttest\tgene\t90\t300\t.\t+\t.\tID=g1;Name=GeneOne")]
#[case("chr1\ttest\tCDS\t101\t103\t1.5\t-\t0\tID=c1;Parent=t1,t2")]
#[case("scaffold_9\tmaker\tmRNA\t7\t7\t.\t.\t.\tAlias=x,y;Note=free text")]
fn test_gff_entry_parse_idempotent(#[case] line: &str) {
    let first = GffEntry::from_str(line).unwrap();
    let second = GffEntry::from_str(line).unwrap();
    assert_eq!(first, second);

    let rendered = GffEntry::from_str(&first.to_string()).unwrap();
    assert_eq!(first, rendered);
}

#[rstest]
fn test_index_load(index: FeatureIndex) {
    assert_eq!(index.len(), 7);
    assert!(!index.is_empty());
    assert_eq!(index.ids()[5], None);
    assert_eq!(index.ids()[0].as_deref(), Some("g1"));
    assert_eq!(index.seqids(), vec!["chr1", "chr2"]);
    assert_eq!(
        index.feature_types(),
        vec!["gene", "mRNA", "exon", "CDS", "snoRNA"]
    );
    assert_approx_eq!(index.features()[5].score.unwrap(), 7.5);
}

#[rstest]
fn test_get_feature(index: FeatureIndex) {
    let feature = index.get_feature("c2").unwrap();
    assert_eq!(feature.start, 201);
    assert!(matches!(
        index.get_feature("missing"),
        Err(GffError::FeatureNotFound(id)) if id == "missing"
    ));
}

#[test]
fn test_get_feature_duplicate_ids_first_match() {
    let attributes = GffEntryAttributes::default().with_id(Some("dup"));
    let index = FeatureIndex::from_iter(vec![
        GffEntry::new(
            "chr1".into(),
            10,
            20,
            Strand::Forward,
            Some("CDS".into()),
            Some(attributes.clone()),
        ),
        GffEntry::new(
            "chr1".into(),
            30,
            40,
            Strand::Forward,
            Some("CDS".into()),
            Some(attributes),
        ),
    ]);

    assert_eq!(index.len(), 2);
    assert_eq!(index.get_feature("dup").unwrap().start, 10);
    assert_eq!(index.ids().iter().flatten().count(), 2);
}

#[rstest]
fn test_get_parents(index: FeatureIndex) {
    assert_eq!(ids(&index.get_parents("c1", None).unwrap()), vec!["t1"]);
    assert_eq!(ids(&index.get_parents("t1", None).unwrap()), vec!["g1"]);
    assert_eq!(
        ids(&index.get_parents("c1", Some("CDS")).unwrap()),
        vec!["t1"]
    );
    // The type filter selects which records contribute their parents
    assert!(index
        .get_parents("c1", Some("mRNA"))
        .unwrap()
        .is_empty());
    assert!(index.get_parents("g1", None).unwrap().is_empty());
    assert!(matches!(
        index.get_parents("nope", None),
        Err(GffError::FeatureNotFound(_))
    ));
}

#[rstest]
fn test_get_children(index: FeatureIndex) {
    assert_eq!(
        ids(&index.get_children("t1", None).unwrap()),
        vec!["e1", "c1", "c2"]
    );
    assert_eq!(
        ids(&index.get_children("t1", Some("CDS")).unwrap()),
        vec!["c1", "c2"]
    );
    assert!(index.get_children("c1", None).unwrap().is_empty());
    assert!(matches!(
        index.get_children("nope", None),
        Err(GffError::FeatureNotFound(_))
    ));
}

#[rstest]
fn test_get_siblings(index: FeatureIndex) {
    assert_eq!(
        ids(&index.get_siblings("c1", Some("CDS")).unwrap()),
        vec!["c1", "c2"]
    );
    assert_eq!(
        ids(&index.get_siblings("c1", None).unwrap()),
        vec!["e1", "c1", "c2"]
    );
    assert!(matches!(
        index.get_siblings("nope", None),
        Err(GffError::FeatureNotFound(_))
    ));
}

#[rstest]
fn test_get_siblings_type_filters_both_lookups(index: FeatureIndex) {
    // e1 is an exon: no exon-typed record named e1 contributes parents,
    // so no siblings are reported even though t1 has CDS children.
    assert!(index
        .get_siblings("e1", Some("CDS"))
        .unwrap()
        .is_empty());
}

#[rstest]
fn test_parent_child_consistency(index: FeatureIndex) {
    for feature in index.iter() {
        let Some(id) = feature.id() else {
            continue;
        };
        for parent in index.get_parents(id, None).unwrap() {
            let children = index
                .get_children(parent.id().unwrap(), None)
                .unwrap();
            assert!(children.iter().any(|c| c.id() == Some(id)));
        }
    }
}

#[rstest]
fn test_features_on_chromosome(index: FeatureIndex) {
    assert_eq!(
        index
            .features_on_chromosome("chr1", None, None, None)
            .len(),
        6
    );
    assert_eq!(
        ids(&index.features_on_chromosome("chr1", None, None, Some("CDS"))),
        vec!["c1", "c2"]
    );
    assert_eq!(
        ids(&index.features_on_chromosome("chr1", Some(100), Some(200), None)),
        vec!["t1", "e1", "c1"]
    );
    assert_eq!(
        ids(&index.features_on_chromosome("chr1", Some(200), None, None)),
        vec!["g1", "t1", "c2", "-"]
    );
    assert_eq!(
        ids(&index.features_on_chromosome("chr1", None, Some(101), None)),
        vec!["g1"]
    );
    assert!(index
        .features_on_chromosome("chrX", None, None, None)
        .is_empty());
}

#[rstest]
#[case::zero_right(Some(200), Some(0))]
#[case::zero_left(Some(0), Some(0))]
#[case::only_zero_right(None, Some(0))]
fn test_features_on_chromosome_zero_bound_is_unset(
    index: FeatureIndex,
    #[case] left: Option<u64>,
    #[case] right: Option<u64>,
) {
    let expected =
        index.features_on_chromosome("chr1", left.filter(|l| *l != 0), None, None);
    let found = index.features_on_chromosome("chr1", left, right, None);

    assert!(!found.is_empty());
    assert_eq!(ids(&found), ids(&expected));
}

#[rstest]
fn test_features_on_chromosome_zero_right_keeps_later_features(index: FeatureIndex) {
    assert_eq!(
        ids(&index.features_on_chromosome("chr1", Some(200), Some(0), None)),
        vec!["g1", "t1", "c2", "-"]
    );
    assert_eq!(
        index
            .features_on_chromosome("chr1", None, Some(0), None)
            .len(),
        6
    );
}

#[rstest]
fn test_features_on_chromosome_spanning_feature_excluded(index: FeatureIndex) {
    // g1 spans [90, 300] but neither endpoint falls in the window
    let found = index.features_on_chromosome("chr1", Some(150), Some(160), Some("gene"));
    assert!(found.is_empty());
}

#[rstest]
fn test_overlapping_features(index: FeatureIndex) {
    assert_eq!(
        ids(&index.overlapping_features("chr1", 102, None)),
        vec!["g1", "t1", "e1", "c1"]
    );
    // Half-open: the end coordinate itself is not contained
    assert!(index
        .overlapping_features("chr1", 103, Some("CDS"))
        .is_empty());
    assert!(index
        .overlapping_features("chr3", 10, None)
        .is_empty());
}

#[rstest]
#[case(89)]
#[case(90)]
#[case(101)]
#[case(203)]
#[case(299)]
#[case(300)]
#[case(410)]
fn test_overlapping_features_matches_definition(
    index: FeatureIndex,
    #[case] pos: u64,
) {
    let expected: Vec<&GffEntry> = index
        .iter()
        .filter(|f| f.seqid.as_str() == "chr1" && f.start <= pos && pos < f.end)
        .collect();
    assert_eq!(index.overlapping_features("chr1", pos, None), expected);
}

#[rstest]
fn test_covering_features_closed_interval(index: FeatureIndex) {
    assert_eq!(
        ids(&index.covering_features("chr1", 103, Some("CDS"))),
        vec!["c1"]
    );
    assert_eq!(
        ids(&index.covering_features("chr1", 101, Some("CDS"))),
        vec!["c1"]
    );
    assert!(index
        .covering_features("chr1", 104, Some("CDS"))
        .is_empty());
}

#[rstest]
fn test_gff_entry_json(index: FeatureIndex) {
    let cds = index.get_feature("c1").unwrap();
    let value = serde_json::to_value(cds).unwrap();

    assert_eq!(value["seqid"], "chr1");
    assert_eq!(value["feature_type"], "CDS");
    assert_eq!(value["start"], 101);
    assert_eq!(value["end"], 103);
    assert_eq!(value["strand"], "+");
    assert_eq!(value["phase"], 0);
    assert!(value["score"].is_null());
    assert_eq!(value["attributes"], "ID=c1;Parent=t1");
}
