use super::readers::open_input_reader;
use crate::{
    constants::HEADER_PREFIX,
    core::record::{VcfRecord, VcfTable, REQUIRED_COLUMNS},
    error::ClinvarError,
    utils::util::Result,
};
use std::{io::BufRead, path::Path};

pub fn read_vcf(path: &Path) -> Result<VcfTable> {
    let reader = open_input_reader(path)?;
    let table = parse_vcf(reader)?;
    log::info!(
        "Read {} header lines and {} records from {}",
        table.header.len(),
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Splits the stream into `##` meta lines, the `#CHROM` column line and
/// data rows. Blank lines in the body are ignored.
pub fn parse_vcf<R: BufRead>(reader: R) -> Result<VcfTable> {
    let mut table = VcfTable::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        let line_number = index + 1;

        if table.columns.is_empty() {
            if line.starts_with(HEADER_PREFIX) {
                table.header.push(line.to_string());
            } else if line.starts_with('#') {
                table.columns = parse_column_line(line)?;
            } else if !line.is_empty() {
                return Err(ClinvarError::MissingColumnHeader);
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }
        let record = VcfRecord::from_line(line, line_number, table.columns.len())?;
        table.records.push(record);
    }

    if table.columns.is_empty() {
        return Err(ClinvarError::MissingColumnHeader);
    }
    Ok(table)
}

fn parse_column_line(line: &str) -> Result<Vec<String>> {
    let columns: Vec<String> = line.split('\t').map(str::to_string).collect();
    for (index, &expected) in REQUIRED_COLUMNS.iter().enumerate() {
        match columns.get(index) {
            Some(found) if found == expected => {}
            found => {
                return Err(ClinvarError::UnexpectedColumn {
                    index,
                    expected,
                    found: found.cloned().unwrap_or_default(),
                })
            }
        }
    }
    Ok(columns)
}
