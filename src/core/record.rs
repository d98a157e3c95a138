use crate::{constants::INFO_SEPARATOR, error::ClinvarError, utils::util::Result};
use std::borrow::Cow;

pub const REQUIRED_COLUMNS: [&str; 8] = ["#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcfRecord {
    pub chrom: String,
    pub pos: u64,
    pub id: String,
    pub reference: String,
    pub alt: String,
    pub qual: String,
    pub filter: String,
    pub info: String,
    pub extra: Vec<String>,
}

impl VcfRecord {
    pub fn from_line(line: &str, line_number: usize, n_columns: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != n_columns {
            return Err(ClinvarError::TruncatedRecord {
                line: line_number,
                expected: n_columns,
                found: fields.len(),
            });
        }

        let pos = fields[1].trim().parse::<u64>().map_err(|e| {
            crate::clinvar_error!(
                "VCF line {}: invalid POS '{}': {}",
                line_number,
                fields[1],
                e
            )
        })?;

        Ok(VcfRecord {
            chrom: fields[0].to_string(),
            pos,
            id: fields[2].to_string(),
            reference: fields[3].to_string(),
            alt: fields[4].to_string(),
            qual: fields[5].to_string(),
            filter: fields[6].to_string(),
            info: fields[7].to_string(),
            extra: fields[8..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// INFO column with the normalized ClinVar fields appended, or the
    /// original INFO when the row had no match.
    pub fn annotated_info<'a>(&'a self, additional: Option<&str>) -> Cow<'a, str> {
        match additional {
            Some(fields) => Cow::Owned(format!("{}{}{}", self.info, INFO_SEPARATOR, fields)),
            None => Cow::Borrowed(&self.info),
        }
    }

    pub fn to_line(&self, info: &str) -> String {
        let mut line = format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.pos,
            self.id,
            self.reference,
            self.alt,
            self.qual,
            self.filter,
            info
        );
        for column in &self.extra {
            line.push('\t');
            line.push_str(column);
        }
        line
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VcfTable {
    pub header: Vec<String>,
    pub columns: Vec<String>,
    pub records: Vec<VcfRecord>,
}

impl VcfTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_line(&self) -> String {
        self.columns.join("\t")
    }
}
