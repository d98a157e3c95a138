use super::{element::Element, join_index::JoinMode};
use crate::{
    constants::{DEFAULT_ACCESSION_ATTRIBUTE, DEFAULT_ACCESSION_TYPE, MISSING_DATE},
    utils::util::log_warning,
};
use std::{cell::OnceCell, collections::BTreeSet};

pub const CLINVAR_ASSERTION: &str = "ClinVarAssertion";
pub const CLINVAR_ACCESSION: &str = "ClinVarAccession";
pub const CLINVAR_SUBMISSION_ID: &str = "ClinVarSubmissionID";
pub const CLINICAL_SIGNIFICANCE: &str = "ClinicalSignificance";
pub const MEASURE_SET: &str = "MeasureSet";
pub const TRAIT_SET: &str = "TraitSet";
const ORIGIN_PATH: [&str; 3] = ["ObservedIn", "Sample", "Origin"];
const UNKNOWN_RECORD: &str = "<unknown>";

/// The canonical significance categories counted by [`description_counts`].
pub const SIGNIFICANCE_CATEGORIES: [&str; 5] = [
    "pathogenic",
    "likely_pathogenic",
    "uncertain_significance",
    "benign",
    "likely_benign",
];

#[derive(Debug, Clone)]
pub struct ClinVarRecord<'a> {
    pub set: &'a Element,
    pub measure_set_id: Option<&'a str>,
    pub assertions: Vec<&'a Element>,
    scv_accessions: OnceCell<Vec<String>>,
}

impl<'a> ClinVarRecord<'a> {
    pub fn new(set: &'a Element) -> Self {
        ClinVarRecord {
            set,
            measure_set_id: measure_set_id(set),
            assertions: assertions(set),
            scv_accessions: OnceCell::new(),
        }
    }

    /// SCV `Acc` per assertion, extracted on first use.
    pub fn scv_accessions(&self) -> &[String] {
        self.scv_accessions.get_or_init(|| {
            accessions(
                &self.assertions,
                DEFAULT_ACCESSION_TYPE,
                DEFAULT_ACCESSION_ATTRIBUTE,
                self.record_id(),
            )
        })
    }

    pub fn record_id(&self) -> &'a str {
        self.measure_set_id.unwrap_or(UNKNOWN_RECORD)
    }

    pub fn join_key(&self, mode: JoinMode) -> Option<&'a str> {
        match mode {
            JoinMode::Modern => self.measure_set_id,
            JoinMode::Legacy => primary_accession(self.set),
        }
    }
}

pub fn measure_set_id(set: &Element) -> Option<&str> {
    set.first_descendant(MEASURE_SET)
        .and_then(|measure_set| measure_set.attr("ID"))
}

/// `Acc` of the first ClinVarAccession in the record, the RCV accession.
pub fn primary_accession(set: &Element) -> Option<&str> {
    set.first_descendant(CLINVAR_ACCESSION)
        .and_then(|accession| accession.attr("Acc"))
}

pub fn assertions(set: &Element) -> Vec<&Element> {
    set.children_named(CLINVAR_ASSERTION).collect()
}

/// `submitter` of every ClinVarSubmissionID in the record, in document order.
pub fn submitters(set: &Element, record_id: &str) -> Vec<String> {
    set.descendants_named(CLINVAR_SUBMISSION_ID)
        .into_iter()
        .filter_map(|submission| match submission.attr("submitter") {
            Some(submitter) => Some(submitter.to_string()),
            None => log_warning(
                format!("Record {record_id} has a {CLINVAR_SUBMISSION_ID} without submitter"),
                None,
            ),
        })
        .collect()
}

pub fn unique_submitters(set: &Element, record_id: &str) -> BTreeSet<String> {
    submitters(set, record_id).into_iter().collect()
}

/// Leaf values read from each assertion's ClinicalSignificance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceFacet {
    ReviewStatus,
    Description,
    LastEvaluated,
    Comment,
}

impl SignificanceFacet {
    fn value(self, clinical_significance: &Element, record_id: &str, parent_tag: &str) -> String {
        match self {
            SignificanceFacet::ReviewStatus | SignificanceFacet::Description => {
                let tag = self.tag();
                child_text(clinical_significance, tag).unwrap_or_else(|| {
                    log_warning(
                        format!("Record {record_id} has no {tag} field in {parent_tag}"),
                        String::new(),
                    )
                })
            }
            SignificanceFacet::LastEvaluated => clinical_significance
                .attr(self.tag())
                .unwrap_or(MISSING_DATE)
                .to_string(),
            // Most submissions carry no comment
            SignificanceFacet::Comment => {
                child_text(clinical_significance, self.tag()).unwrap_or_default()
            }
        }
    }

    fn tag(self) -> &'static str {
        match self {
            SignificanceFacet::ReviewStatus => "ReviewStatus",
            SignificanceFacet::Description => "Description",
            SignificanceFacet::LastEvaluated => "DateLastEvaluated",
            SignificanceFacet::Comment => "Comment",
        }
    }
}

/// One value per ClinicalSignificance element under the given assertions, in
/// assertion order.
pub fn clinical_significance(
    assertions: &[&Element],
    facet: SignificanceFacet,
    record_id: &str,
) -> Vec<String> {
    let parent_tag = assertions
        .first()
        .map_or(CLINVAR_ASSERTION, |assertion| assertion.name());
    let significances: Vec<&Element> = assertions
        .iter()
        .flat_map(|assertion| assertion.children_named(CLINICAL_SIGNIFICANCE))
        .collect();

    if significances.is_empty() {
        return log_warning(
            format!("Record {record_id} has no {CLINICAL_SIGNIFICANCE} in {parent_tag}"),
            Vec::new(),
        );
    }

    significances
        .into_iter()
        .map(|significance| facet.value(significance, record_id, parent_tag))
        .collect()
}

/// Counts of the canonical categories among `Description` values, as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionCounts {
    counts: [(&'static str, String); 5],
}

impl DescriptionCounts {
    pub fn get(&self, category: &str) -> Option<&str> {
        self.counts
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, count)| count.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.counts.iter().map(|(name, count)| (*name, count.as_str()))
    }
}

pub fn description_counts(descriptions: &[String]) -> DescriptionCounts {
    let lowered: Vec<String> = descriptions.iter().map(|d| d.to_lowercase()).collect();
    let counts = SIGNIFICANCE_CATEGORIES.map(|category| {
        let label = category.replace('_', " ");
        let count = lowered.iter().filter(|d| **d == label).count();
        (category, count.to_string())
    });
    DescriptionCounts { counts }
}

/// `attribute` of each assertion's ClinVarSubmissionID, `0000-00-00` when
/// absent.
pub fn submission_dates(assertions: &[&Element], attribute: &str, record_id: &str) -> Vec<String> {
    if assertions.is_empty() {
        return log_warning(
            format!("Record {record_id} has no {CLINVAR_SUBMISSION_ID} field"),
            Vec::new(),
        );
    }
    assertions
        .iter()
        .map(|assertion| match assertion.child(CLINVAR_SUBMISSION_ID) {
            Some(submission) => submission.attr(attribute).unwrap_or(MISSING_DATE).to_string(),
            None => log_warning(
                format!("Record {record_id} has no {CLINVAR_SUBMISSION_ID} field"),
                MISSING_DATE.to_string(),
            ),
        })
        .collect()
}

/// `attribute` of each assertion's ClinVarAccession whose `Type` is
/// `accession_type`. Assertions of another type contribute nothing.
pub fn accessions(
    assertions: &[&Element],
    accession_type: &str,
    attribute: &str,
    record_id: &str,
) -> Vec<String> {
    let mut values = Vec::new();
    for assertion in assertions {
        let Some(accession) = assertion.child(CLINVAR_ACCESSION) else {
            log::warn!("Record {} has no {} record", record_id, accession_type);
            continue;
        };
        if accession.attr("Type") != Some(accession_type) {
            continue;
        }
        match accession.attr(attribute) {
            Some(value) => values.push(value.to_string()),
            None => log::warn!(
                "Record {} has a {} {} without {}",
                record_id,
                accession_type,
                CLINVAR_ACCESSION,
                attribute
            ),
        }
    }
    values
}

pub fn origins(assertions: &[&Element]) -> Vec<String> {
    assertions
        .iter()
        .map(|assertion| {
            assertion
                .find_path(&ORIGIN_PATH)
                .and_then(Element::text)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

pub fn unique_origins(assertions: &[&Element]) -> BTreeSet<String> {
    origins(assertions).into_iter().collect()
}

pub fn trait_names(set: &Element) -> Vec<String> {
    let Some(trait_set) = set.first_descendant(TRAIT_SET) else {
        return Vec::new();
    };
    trait_set
        .descendants_named("Name")
        .into_iter()
        .flat_map(|name| name.children_named("ElementValue"))
        .filter(|value| value.attr("Type") == Some("Preferred"))
        .map(|value| value.text().unwrap_or_default().to_string())
        .collect()
}

pub fn trait_mechanisms(set: &Element) -> BTreeSet<String> {
    let Some(trait_set) = set.first_descendant(TRAIT_SET) else {
        return BTreeSet::new();
    };
    trait_set
        .descendants_named("AttributeSet")
        .into_iter()
        .flat_map(|attribute_set| attribute_set.children_named("Attribute"))
        .filter(|attribute| attribute.attr("Type") == Some("disease mechanism"))
        .map(|attribute| attribute.text().unwrap_or_default().trim().to_string())
        .collect()
}

pub fn trait_xrefs(set: &Element) -> BTreeSet<String> {
    let Some(trait_set) = set.first_descendant(TRAIT_SET) else {
        return BTreeSet::new();
    };
    trait_set
        .descendants_named("XRef")
        .into_iter()
        .map(|xref| {
            format!(
                "{}:{}",
                xref.attr("DB").unwrap_or_default(),
                xref.attr("ID").unwrap_or_default()
            )
            .replace(';', ",")
        })
        .collect()
}

fn child_text(parent: &Element, name: &str) -> Option<String> {
    parent
        .child(name)
        .map(|child| child.text().unwrap_or_default().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::test_utils::{parse_first_set, CLINVAR_XML_ONE_RECORD, CLINVAR_XML_TWO_ASSERTIONS},
        utils::util::init_logger,
    };

    const INVITAE_COMMENT: &str = r#"This sequence change replaces alanine with threonine at codon 36 of the SAMD11 protein (p.Ala36Thr). Algorithms developed to predict the effect of missense changes on protein structure and function output the following: SIFT: "Tolerated"; PolyPhen-2: "Benign"; Align-GVGD: "Class C0"."#;

    #[test]
    fn test_record_keys() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        let record = ClinVarRecord::new(&set);
        assert_eq!(record.measure_set_id, Some("1019397"));
        assert_eq!(record.record_id(), "1019397");
        assert_eq!(record.join_key(JoinMode::Modern), Some("1019397"));
        assert_eq!(record.join_key(JoinMode::Legacy), Some("RCV000953221"));
        assert_eq!(record.assertions.len(), 1);
    }

    #[test]
    fn test_get_accession() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        let cva = assertions(&set);
        assert_eq!(
            accessions(&cva, "SCV", "Acc", "1019397"),
            vec!["SCV001214463".to_string()]
        );
        assert_eq!(
            accessions(&cva, "SCV", "DateUpdated", "1019397"),
            vec!["2020-03-16".to_string()]
        );
        assert!(accessions(&cva, "RCV", "Acc", "1019397").is_empty());
    }

    #[test]
    fn test_get_clinsig_status_ordered() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        let cva = assertions(&set);
        assert_eq!(
            clinical_significance(&cva, SignificanceFacet::ReviewStatus, "1019397"),
            vec!["criteria provided, single submitter".to_string()]
        );
    }

    #[test]
    fn test_get_clinsig_last_eval() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        let cva = assertions(&set);
        assert_eq!(
            clinical_significance(&cva, SignificanceFacet::LastEvaluated, "1019397"),
            vec!["2019-12-11".to_string()]
        );
    }

    #[test]
    fn test_get_clinsig_description() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        let cva = assertions(&set);
        assert_eq!(
            clinical_significance(&cva, SignificanceFacet::Description, "1019397"),
            vec!["Uncertain significance".to_string()]
        );
    }

    #[test]
    fn test_get_clinsig_comment() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        let cva = assertions(&set);
        assert_eq!(
            clinical_significance(&cva, SignificanceFacet::Comment, "1019397"),
            vec![INVITAE_COMMENT.to_string()]
        );
    }

    #[test]
    fn test_clinsig_degrades_per_assertion() {
        init_logger();
        let set = parse_first_set(CLINVAR_XML_TWO_ASSERTIONS);
        let cva = assertions(&set);
        assert_eq!(cva.len(), 3);
        assert_eq!(
            clinical_significance(&cva, SignificanceFacet::Description, "2"),
            vec!["Pathogenic".to_string(), String::new()]
        );
        assert_eq!(
            clinical_significance(&cva, SignificanceFacet::LastEvaluated, "2"),
            vec!["2018-01-01".to_string(), MISSING_DATE.to_string()]
        );
        assert_eq!(
            clinical_significance(&cva, SignificanceFacet::Comment, "2"),
            vec![String::new(), "Seen in two families".to_string()]
        );
        assert_eq!(
            clinical_significance(&cva, SignificanceFacet::ReviewStatus, "2"),
            vec!["no assertion criteria provided".to_string(), String::new()]
        );
    }

    #[test]
    fn test_clinsig_without_any_clinical_significance() {
        init_logger();
        let set = Element::new("ClinVarSet")
            .with_child(Element::new("ClinVarAssertion").with_child(Element::new("RecordStatus")));
        let cva = assertions(&set);
        for facet in [
            SignificanceFacet::ReviewStatus,
            SignificanceFacet::Description,
            SignificanceFacet::LastEvaluated,
            SignificanceFacet::Comment,
        ] {
            assert!(clinical_significance(&cva, facet, "42").is_empty());
        }
        assert!(clinical_significance(&[], SignificanceFacet::Description, "42").is_empty());
    }

    #[test]
    fn test_description_counts() {
        let descriptions: Vec<String> = [
            "Pathogenic",
            "Likely pathogenic",
            "pathogenic",
            "Uncertain significance",
            "Benign",
            "conflicting data from submitters",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let counts = description_counts(&descriptions);
        assert_eq!(counts.get("pathogenic"), Some("2"));
        assert_eq!(counts.get("likely_pathogenic"), Some("1"));
        assert_eq!(counts.get("uncertain_significance"), Some("1"));
        assert_eq!(counts.get("benign"), Some("1"));
        assert_eq!(counts.get("likely_benign"), Some("0"));
        assert_eq!(counts.get("risk_factor"), None);
        let keys: Vec<&str> = counts.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, SIGNIFICANCE_CATEGORIES.to_vec());
    }

    #[test]
    fn test_get_origin() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        let cva = assertions(&set);
        assert_eq!(origins(&cva), vec!["germline".to_string()]);

        let set = parse_first_set(CLINVAR_XML_TWO_ASSERTIONS);
        let cva = assertions(&set);
        assert_eq!(
            origins(&cva),
            vec!["germline".to_string(), String::new(), "germline".to_string()]
        );
        assert_eq!(
            unique_origins(&cva),
            BTreeSet::from([String::new(), "germline".to_string()])
        );
    }

    #[test]
    fn test_get_submitdate() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        let cva = assertions(&set);
        assert_eq!(
            submission_dates(&cva, "submitterDate", "1019397"),
            vec!["2020-02-06".to_string()]
        );
        assert_eq!(
            submission_dates(&cva, "noSuchDate", "1019397"),
            vec![MISSING_DATE.to_string()]
        );
        assert!(submission_dates(&[], "submitterDate", "1019397").is_empty());
    }

    #[test]
    fn test_get_submitters() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        assert_eq!(submitters(&set, "1019397"), vec!["Invitae".to_string()]);

        init_logger();
        let set = parse_first_set(CLINVAR_XML_TWO_ASSERTIONS);
        assert_eq!(
            submitters(&set, "2"),
            vec!["OMIM".to_string(), "GeneDx".to_string(), "OMIM".to_string()]
        );
        assert_eq!(
            unique_submitters(&set, "2"),
            BTreeSet::from(["GeneDx".to_string(), "OMIM".to_string()])
        );
    }

    #[test]
    fn test_get_traits() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        assert_eq!(trait_names(&set), vec!["not provided".to_string()]);
        assert!(trait_names(&Element::new("ClinVarSet")).is_empty());
    }

    #[test]
    fn test_trait_mechanisms_and_xrefs() {
        let set = parse_first_set(CLINVAR_XML_ONE_RECORD);
        assert_eq!(
            trait_mechanisms(&set),
            BTreeSet::from(["loss of function".to_string()])
        );
        assert_eq!(
            trait_xrefs(&set),
            BTreeSet::from([
                "Developmental Genetics Unit, King Faisal Specialist Hospital & Research Centre:13DG0619"
                    .to_string(),
                "MedGen:C3661900".to_string(),
                "OMIM:MTHD,0001".to_string(),
            ])
        );
    }
}
