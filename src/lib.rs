pub mod cli;
pub mod error;

pub mod commands {
    pub mod annotate;

    pub use annotate::{annotate, AnnotateSummary};
}

pub mod core {
    pub mod accumulator;
    pub mod aggregate;
    pub mod element;
    pub mod extract;
    pub mod info_field;
    pub mod join_index;
    pub mod normalize;
    pub mod record;
    pub mod split;

    #[cfg(test)]
    pub mod test_utils;
}

pub mod io {
    pub mod readers;
    pub mod vcf_reader;
    pub mod vcf_writer;
    pub mod xml_reader;
}

pub mod utils {
    pub mod util;
    pub mod util_intern;
}

pub mod constants;

pub use constants::*;
