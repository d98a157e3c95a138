use super::record::VcfRecord;
use crate::constants::{
    ALLELE_MARKER, ALT_SEPARATOR, CLINVAR_INFO_PREFIX, INFO_SEPARATOR, MISSING_VALUE,
};

/// One row per ALT allele, in place of the original. Rows without `CLNALLE`
/// are kept as-is.
pub fn split_multi_vcf(records: Vec<VcfRecord>) -> Vec<VcfRecord> {
    let mut expanded = Vec::with_capacity(records.len());
    for (row, record) in records.into_iter().enumerate() {
        if !record.alt.contains(ALT_SEPARATOR) {
            expanded.push(record);
            continue;
        }

        let Some(marker_positions) = parse_allele_marker(&record.info) else {
            log::warn!(
                "Multi-allelic VCF row {} ({}:{} {}) has no {} field, keeping it unsplit",
                row,
                record.chrom,
                record.pos,
                record.alt,
                ALLELE_MARKER.trim_end_matches('=')
            );
            expanded.push(record);
            continue;
        };

        for (allele_index, alt) in record.alt.split(ALT_SEPARATOR).enumerate() {
            let mut allele_record = record.clone();
            allele_record.alt = alt.to_string();
            allele_record.info = expand_info(&record.info, allele_index + 1, &marker_positions);
            expanded.push(allele_record);
        }
    }
    expanded
}

/// Values of the `CLNALLE` field. Entries that are not integers can never
/// match an allele position and are kept as `None` to preserve alignment.
pub fn parse_allele_marker(info: &str) -> Option<Vec<Option<i64>>> {
    info.split(INFO_SEPARATOR)
        .find_map(|field| field.strip_prefix(ALLELE_MARKER))
        .map(|values| {
            values
                .split(ALT_SEPARATOR)
                .map(|value| value.trim().parse::<i64>().ok())
                .collect()
        })
}

pub fn expand_info(info: &str, allele: usize, marker_positions: &[Option<i64>]) -> String {
    let position = marker_positions
        .iter()
        .position(|value| *value == Some(allele as i64));

    info.split(INFO_SEPARATOR)
        .map(|field| {
            if field.starts_with(ALLELE_MARKER) {
                return format!("{ALLELE_MARKER}1");
            }
            if !field.starts_with(CLINVAR_INFO_PREFIX) {
                return field.to_string();
            }
            let Some((field_id, values)) = field.split_once('=') else {
                return field.to_string();
            };
            let value = position
                .and_then(|index| values.split(ALT_SEPARATOR).nth(index))
                .unwrap_or(MISSING_VALUE);
            format!("{field_id}={value}")
        })
        .collect::<Vec<_>>()
        .join(&INFO_SEPARATOR.to_string())
}
