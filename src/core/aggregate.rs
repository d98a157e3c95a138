use super::{
    accumulator::{AnnotationAccumulator, FieldValues},
    extract::ClinVarRecord,
    info_field::InfoField,
    join_index::{JoinIndex, JoinMode},
};
use crate::{
    constants::PROGRESS_INTERVAL,
    io::xml_reader::ClinVarSetReader,
    utils::util::{format_number_with_commas, Result},
};
use std::io::BufRead;

#[derive(Debug, Default)]
pub struct Aggregation {
    pub accumulator: AnnotationAccumulator,
    pub records_processed: usize,
    pub records_matched: usize,
}

/// Accumulates the fields of every ClinVarSet onto the rows its join key maps to.
pub fn aggregate<R: BufRead>(
    reader: ClinVarSetReader<R>,
    index: &JoinIndex,
    mode: JoinMode,
) -> Result<Aggregation> {
    let mut aggregation = Aggregation::default();

    for clinvar_set in reader.sets() {
        let clinvar_set = clinvar_set?;
        aggregation.records_processed += 1;
        if aggregation.records_processed % PROGRESS_INTERVAL == 0 {
            log::info!(
                "Processed {} ClinVarSet records",
                format_number_with_commas(aggregation.records_processed)
            );
        }

        let record = ClinVarRecord::new(&clinvar_set);
        let Some(key) = record.join_key(mode) else {
            log::warn!(
                "ClinVarSet {} has no join key, skipping",
                clinvar_set.attr("ID").unwrap_or_default()
            );
            continue;
        };
        let Some(rows) = index.rows(key) else {
            continue;
        };

        aggregation.records_matched += 1;
        let values: Vec<(InfoField, Vec<String>)> = InfoField::BODY_ORDER
            .iter()
            .map(|field| (*field, field.extract(&record)))
            .collect();
        for row in rows {
            aggregation.accumulator.touch(*row);
            for (field, field_values) in &values {
                aggregation
                    .accumulator
                    .append(*row, *field, FieldValues::List(field_values.clone()));
            }
        }
    }

    log::info!(
        "Processed {} ClinVarSet records, {} matched the VCF",
        format_number_with_commas(aggregation.records_processed),
        format_number_with_commas(aggregation.records_matched)
    );
    Ok(aggregation)
}
