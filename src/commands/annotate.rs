use crate::{
    cli::AnnotateArgs,
    core::{
        aggregate::aggregate,
        join_index::{JoinIndex, JoinMode},
        normalize::NormalizedAnnotations,
        record::VcfTable,
        split::split_multi_vcf,
    },
    io::{vcf_reader::read_vcf, vcf_writer::VcfWriter, xml_reader::ClinVarSetReader},
    utils::util::{format_number_with_commas, Result},
};

#[cfg(test)]
mod tests;

/// Counts describing one annotation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotateSummary {
    pub rows_read: usize,
    pub rows_after_split: usize,
    pub index_keys: usize,
    pub records_processed: usize,
    pub records_matched: usize,
    pub rows_annotated: usize,
    pub rows_written: usize,
}

impl AnnotateSummary {
    pub fn log(&self) {
        log::info!("VCF rows read: {}", format_number_with_commas(self.rows_read));
        log::info!(
            "VCF rows after allele split: {}",
            format_number_with_commas(self.rows_after_split)
        );
        log::info!("Join keys: {}", format_number_with_commas(self.index_keys));
        log::info!(
            "ClinVarSet records processed: {}",
            format_number_with_commas(self.records_processed)
        );
        log::info!(
            "ClinVarSet records matched: {}",
            format_number_with_commas(self.records_matched)
        );
        log::info!(
            "VCF rows annotated: {} of {}",
            format_number_with_commas(self.rows_annotated),
            format_number_with_commas(self.rows_written)
        );
    }
}

/// Joins the ClinVar XML onto the VCF and writes the annotated copy.
///
/// The output header is written before the XML pass; a failure part way
/// leaves a partial output file behind.
pub fn annotate(args: &AnnotateArgs) -> Result<AnnotateSummary> {
    let mode = args.join_mode();
    let table = read_vcf(&args.input)?;
    let rows_read = table.len();

    let mut writer = VcfWriter::from_path(&args.out)?;
    log::info!("Writing out updated VCF header to {}", args.out.display());
    writer.write_header(&table.header)?;

    let table = match mode {
        JoinMode::Legacy => {
            let VcfTable {
                header,
                columns,
                records,
            } = table;
            let records = split_multi_vcf(records);
            log::info!(
                "Split multi-allelic rows: {} rows became {}",
                format_number_with_commas(rows_read),
                format_number_with_commas(records.len())
            );
            VcfTable {
                header,
                columns,
                records,
            }
        }
        JoinMode::Modern => table,
    };

    let index = JoinIndex::build(&table.records, mode);
    log::info!(
        "Join index ({:?}) holds {} keys",
        mode,
        format_number_with_commas(index.len())
    );

    log::info!("Parsing ClinVar XML {}", args.xml.display());
    let aggregation = aggregate(ClinVarSetReader::from_path(&args.xml)?, &index, mode)?;
    let annotations = NormalizedAnnotations::from(&aggregation.accumulator);

    log::info!("Writing out updated VCF body");
    writer.write_body(&table, &annotations)?;
    let rows_annotated = writer.rows_annotated();
    let rows_written = writer.rows_written();
    writer.finish()?;

    Ok(AnnotateSummary {
        rows_read,
        rows_after_split: table.len(),
        index_keys: index.len(),
        records_processed: aggregation.records_processed,
        records_matched: aggregation.records_matched,
        rows_annotated,
        rows_written,
    })
}
