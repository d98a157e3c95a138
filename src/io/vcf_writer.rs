use super::readers::create_output_writer;
use crate::{
    core::{info_field::InfoField, normalize::NormalizedAnnotations, record::VcfTable},
    utils::util::Result,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Input meta lines followed by the `##INFO` declarations of the appended
/// fields.
pub fn create_output_header(header: &[String]) -> Vec<String> {
    let mut output_header = header.to_vec();
    output_header.extend(InfoField::HEADER_ORDER.iter().map(|field| field.header_line()));
    output_header
}

pub struct VcfWriter<W: Write> {
    writer: W,
    rows_written: usize,
    rows_annotated: usize,
}

impl VcfWriter<BufWriter<File>> {
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(create_output_writer(path)?))
    }
}

impl<W: Write> VcfWriter<W> {
    pub fn new(writer: W) -> Self {
        VcfWriter {
            writer,
            rows_written: 0,
            rows_annotated: 0,
        }
    }

    pub fn write_header(&mut self, header: &[String]) -> Result<()> {
        for line in create_output_header(header) {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    /// Column line and every row in order. Matched rows get the normalized
    /// fields appended to INFO, the others are written unchanged.
    pub fn write_body(&mut self, table: &VcfTable, annotations: &NormalizedAnnotations) -> Result<()> {
        writeln!(self.writer, "{}", table.column_line())?;
        for (row, record) in table.records.iter().enumerate() {
            let suffix = annotations.info_suffix(row);
            if suffix.is_some() {
                self.rows_annotated += 1;
            }
            let info = record.annotated_info(suffix.as_deref());
            writeln!(self.writer, "{}", record.to_line(&info))?;
            self.rows_written += 1;
        }
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn rows_annotated(&self) -> usize {
        self.rows_annotated
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
