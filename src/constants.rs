pub const HEADER_PREFIX: &str = "##";
pub const INFO_SEPARATOR: char = ';';
pub const VALUE_SEPARATOR: char = '|';
pub const ALT_SEPARATOR: char = ',';

// Legacy (pre May 2017) INFO conventions
pub const ALLELE_MARKER: &str = "CLNALLE=";
pub const CLINVAR_INFO_PREFIX: &str = "CLN";
pub const ACCESSION_MARKER: &str = "CLNACC=";
pub const RCV_PREFIX: &str = "RCV";
pub const MISSING_VALUE: &str = ".";

pub const MISSING_DATE: &str = "0000-00-00";
pub const DEFAULT_ACCESSION_TYPE: &str = "SCV";
pub const DEFAULT_ACCESSION_ATTRIBUTE: &str = "Acc";
pub const SUBMITTER_DATE_ATTRIBUTE: &str = "submitterDate";
pub const DISEASE_NAME_SEPARATOR: &str = "/";

/// Characters that would break INFO/list delimiting and what they become.
pub const SEPARATOR_REPLACEMENTS: [(char, &str); 5] =
    [(';', ":"), ('|', ":"), (' ', "_"), ('"', ""), (',', "&")];

pub const PROGRESS_INTERVAL: usize = 50_000;
pub const DEFAULT_LOG_FILENAME: &str = "clinvar_vcf_parser.log";
