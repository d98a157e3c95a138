use super::extract::{self, ClinVarRecord, SignificanceFacet};
use crate::constants::{DISEASE_NAME_SEPARATOR, SUBMITTER_DATE_ATTRIBUTE};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InfoField {
    Submitters,
    ReviewStatus,
    LastEvaluated,
    SubmissionDate,
    Significance,
    Origin,
    Comment,
    ScvAccession,
    DiseaseName,
}

impl InfoField {
    /// Order of the `##INFO` declarations in the output header.
    pub const HEADER_ORDER: [InfoField; 9] = [
        InfoField::Submitters,
        InfoField::Significance,
        InfoField::LastEvaluated,
        InfoField::SubmissionDate,
        InfoField::ReviewStatus,
        InfoField::Origin,
        InfoField::ScvAccession,
        InfoField::DiseaseName,
        InfoField::Comment,
    ];

    /// Order in which the fields are appended to a row's INFO.
    pub const BODY_ORDER: [InfoField; 9] = [
        InfoField::Submitters,
        InfoField::ReviewStatus,
        InfoField::LastEvaluated,
        InfoField::SubmissionDate,
        InfoField::Significance,
        InfoField::Origin,
        InfoField::Comment,
        InfoField::ScvAccession,
        InfoField::DiseaseName,
    ];

    pub fn id(self) -> &'static str {
        match self {
            InfoField::Submitters => "CLNSUBA",
            InfoField::ReviewStatus => "CLNREVSTATA",
            InfoField::LastEvaluated => "CLNDATEA",
            InfoField::SubmissionDate => "CLNDATESUBA",
            InfoField::Significance => "CLNSIGA",
            InfoField::Origin => "CLNORA",
            InfoField::Comment => "CLNCOMA",
            InfoField::ScvAccession => "CLNSCVA",
            InfoField::DiseaseName => "CLNDNA",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            InfoField::Submitters => "Submitters - all, ordered",
            InfoField::ReviewStatus => "ClinVar review status for the Variation ID - all, ordered",
            InfoField::LastEvaluated => "Date pathogenicity last reviewed - all, ordered",
            InfoField::SubmissionDate => "Submission date - all, ordered",
            InfoField::Significance => "Clinical significance - all, ordered",
            InfoField::Origin => "Allele origin - all, ordered",
            InfoField::Comment => "Comment on clinical significance - all, ordered",
            InfoField::ScvAccession => "SCV IDs - all, ordered",
            InfoField::DiseaseName => "Preferred disease name - all, ordered",
        }
    }

    pub fn header_line(self) -> String {
        format!(
            "##INFO=<ID={},Number=.,Type=String,Description=\"{}\">",
            self.id(),
            self.description()
        )
    }

    /// The record's values for this field, one per contributing assertion.
    pub fn extract(self, record: &ClinVarRecord) -> Vec<String> {
        let record_id = record.record_id();
        let assertions = &record.assertions;
        match self {
            InfoField::Submitters => extract::submitters(record.set, record_id),
            InfoField::ReviewStatus => extract::clinical_significance(
                assertions,
                SignificanceFacet::ReviewStatus,
                record_id,
            ),
            InfoField::LastEvaluated => extract::clinical_significance(
                assertions,
                SignificanceFacet::LastEvaluated,
                record_id,
            ),
            InfoField::SubmissionDate => {
                extract::submission_dates(assertions, SUBMITTER_DATE_ATTRIBUTE, record_id)
            }
            InfoField::Significance => extract::clinical_significance(
                assertions,
                SignificanceFacet::Description,
                record_id,
            ),
            InfoField::Origin => extract::origins(assertions),
            InfoField::Comment => {
                extract::clinical_significance(assertions, SignificanceFacet::Comment, record_id)
            }
            InfoField::ScvAccession => record.scv_accessions().to_vec(),
            // One combined disease name per SCV accession
            InfoField::DiseaseName => {
                let n_accessions = record.scv_accessions().len();
                let name = extract::trait_names(record.set).join(DISEASE_NAME_SEPARATOR);
                vec![name; n_accessions]
            }
        }
    }
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
