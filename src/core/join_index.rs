use super::record::VcfRecord;
use crate::constants::{
    ACCESSION_MARKER, INFO_SEPARATOR, MISSING_VALUE, RCV_PREFIX, VALUE_SEPARATOR,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// How ClinVarSet records are matched against VCF rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// VCF `ID` column holds the ClinVar Variation ID (MeasureSet `ID`).
    Modern,
    /// Pre May 2017: RCV accessions live in the `CLNACC` INFO field.
    Legacy,
}

impl JoinMode {
    pub fn from_pre_may_2017(pre_may_2017: bool) -> Self {
        if pre_may_2017 {
            JoinMode::Legacy
        } else {
            JoinMode::Modern
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinIndex {
    keys: HashMap<String, BTreeSet<usize>>,
}

impl JoinIndex {
    pub fn build(records: &[VcfRecord], mode: JoinMode) -> Self {
        match mode {
            JoinMode::Modern => Self::from_ids(records),
            JoinMode::Legacy => Self::from_accessions(records),
        }
    }

    /// One row per `ID`. A repeated ID points at its last row; `.` is skipped.
    pub fn from_ids(records: &[VcfRecord]) -> Self {
        let mut keys: HashMap<String, BTreeSet<usize>> = HashMap::with_capacity(records.len());
        let mut repeats: BTreeMap<&str, usize> = BTreeMap::new();
        for (row, record) in records.iter().enumerate() {
            if record.id == MISSING_VALUE {
                continue;
            }
            if keys
                .insert(record.id.clone(), BTreeSet::from([row]))
                .is_some()
            {
                *repeats.entry(record.id.as_str()).or_insert(1) += 1;
            }
        }
        for (id, count) in repeats {
            if let Some(last) = keys.get(id).and_then(|rows| rows.first()) {
                log::warn!(
                    "VCF ID {} appears on {} rows, only row {} will be annotated",
                    id,
                    count,
                    last
                );
            }
        }
        JoinIndex { keys }
    }

    /// Every version-stripped accession of every `CLNACC` field, each mapped
    /// to all rows that list it.
    pub fn from_accessions(records: &[VcfRecord]) -> Self {
        let mut keys: HashMap<String, BTreeSet<usize>> = HashMap::new();
        for (row, record) in records.iter().enumerate() {
            for field in record.info.split(INFO_SEPARATOR) {
                let Some(accessions) = field.strip_prefix(ACCESSION_MARKER) else {
                    continue;
                };
                for versioned in accessions.split(VALUE_SEPARATOR) {
                    let accession = strip_version(versioned);
                    if !accession.is_empty() && !accession.starts_with(RCV_PREFIX) {
                        log::warn!(
                            "VCF {} at index {} is not correctly formatted, should be {}{}XXX",
                            field,
                            row,
                            ACCESSION_MARKER,
                            RCV_PREFIX
                        );
                    }
                    keys.entry(accession.to_string()).or_default().insert(row);
                }
            }
        }
        JoinIndex { keys }
    }

    pub fn rows(&self, key: &str) -> Option<&BTreeSet<usize>> {
        self.keys.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// `RCV000123456.2` -> `RCV000123456`
pub fn strip_version(accession: &str) -> &str {
    accession.split('.').next().unwrap_or(accession)
}
