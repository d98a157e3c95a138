use super::{annotate, AnnotateSummary};
use crate::{
    cli::AnnotateArgs,
    core::test_utils::{
        make_temp_file, make_temp_gz_file, make_temp_path, CLINVAR_VCF_LEGACY,
        CLINVAR_VCF_MODERN, CLINVAR_VCF_ONE_RECORD, CLINVAR_XML_ONE_RECORD,
        CLINVAR_XML_THREE_RECORDS,
    },
    utils::util::init_logger,
};
use std::{fs, path::PathBuf};

const NEW_INFO_HEADER: &str = "##INFO=<ID=CLNSUBA,Number=.,Type=String,Description=\"Submitters - all, ordered\">
##INFO=<ID=CLNSIGA,Number=.,Type=String,Description=\"Clinical significance - all, ordered\">
##INFO=<ID=CLNDATEA,Number=.,Type=String,Description=\"Date pathogenicity last reviewed - all, ordered\">
##INFO=<ID=CLNDATESUBA,Number=.,Type=String,Description=\"Submission date - all, ordered\">
##INFO=<ID=CLNREVSTATA,Number=.,Type=String,Description=\"ClinVar review status for the Variation ID - all, ordered\">
##INFO=<ID=CLNORA,Number=.,Type=String,Description=\"Allele origin - all, ordered\">
##INFO=<ID=CLNSCVA,Number=.,Type=String,Description=\"SCV IDs - all, ordered\">
##INFO=<ID=CLNDNA,Number=.,Type=String,Description=\"Preferred disease name - all, ordered\">
##INFO=<ID=CLNCOMA,Number=.,Type=String,Description=\"Comment on clinical significance - all, ordered\">
";

const COLUMNS: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";

const SAMD11_FIELDS: &str = "CLNSUBA=Invitae;CLNREVSTATA=criteria_provided&_single_submitter;CLNDATEA=2019-12-11;CLNDATESUBA=2020-02-06;CLNSIGA=Uncertain_significance;CLNORA=germline;CLNCOMA=This_sequence_change_replaces_alanine_with_threonine_at_codon_36_of_the_SAMD11_protein_(p.Ala36Thr)._Algorithms_developed_to_predict_the_effect_of_missense_changes_on_protein_structure_and_function_output_the_following:_SIFT:_Tolerated:_PolyPhen-2:_Benign:_Align-GVGD:_Class_C0.;CLNSCVA=SCV001214463;CLNDNA=not_provided";

const LAB_A_FIELDS: &str = "CLNSUBA=Lab_A;CLNREVSTATA=criteria_provided&_single_submitter;CLNDATEA=2016-04-01;CLNDATESUBA=2016-05-01;CLNSIGA=Pathogenic;CLNORA=germline;CLNCOMA=;CLNSCVA=SCV000000111;CLNDNA=Long_QT_syndrome";

const LAB_B_C_FIELDS: &str = "CLNSUBA=Lab_B|Lab_C;CLNREVSTATA=criteria_provided&_single_submitter|no_assertion_criteria_provided;CLNDATEA=2015-01-01|0000-00-00;CLNDATESUBA=2015-02-02|2015-03-03;CLNSIGA=Benign|Likely_benign;CLNORA=germline|maternal;CLNCOMA=|;CLNSCVA=SCV000000221|SCV000000222;CLNDNA=not_specified|not_specified";

const LAB_B_C_D_FIELDS: &str = "CLNSUBA=Lab_B|Lab_C|Lab_D;CLNREVSTATA=criteria_provided&_single_submitter|no_assertion_criteria_provided|criteria_provided&_single_submitter;CLNDATEA=2015-01-01|0000-00-00|2016-06-01;CLNDATESUBA=2015-02-02|2015-03-03|2016-06-06;CLNSIGA=Benign|Likely_benign|Uncertain_significance;CLNORA=germline|maternal|unknown;CLNCOMA=||Reported_in_one_proband&_segregation_unknown;CLNSCVA=SCV000000221|SCV000000222|SCV000000331;CLNDNA=not_specified|not_specified|Brugada_syndrome";

fn args(xml: PathBuf, input: PathBuf, pre_may_2017: bool) -> AnnotateArgs {
    AnnotateArgs {
        xml,
        input,
        out: make_temp_path("annotate_out", "vcf"),
        log: None,
        pre_may_2017,
    }
}

fn run(args: &AnnotateArgs) -> (AnnotateSummary, String) {
    init_logger();
    let summary = annotate(args).expect("annotate should succeed");
    let output = fs::read_to_string(&args.out).expect("output should be readable");
    (summary, output)
}

fn one_record_expected() -> String {
    format!(
        "##fileformat=VCFv4.1
##fileDate=2021-03-02
##source=ClinVar
##reference=GRCh37
##INFO=<ID=ALLELEID,Number=1,Type=Integer,Description=\"the ClinVar Allele ID\">
##INFO=<ID=CLNSIG,Number=.,Type=String,Description=\"Clinical significance for this single variant\">
{NEW_INFO_HEADER}{COLUMNS}1\t866438\t1019397\tG\tA\t.\t.\tALLELEID=1005896;CLNDISDB=MedGen:CN517202;CLNDN=not_provided;CLNHGVS=NC_000001.10:g.866438G>A;CLNREVSTAT=criteria_provided,_single_submitter;CLNSIG=Uncertain_significance;{SAMD11_FIELDS}
1\t866461\t1000001\tG\tA\t.\t.\tALLELEID=1005897;CLNSIG=Likely_benign
"
    )
}

#[test]
fn test_expand_clinvar_vcf() {
    let args = args(
        make_temp_file("one_record", "xml", CLINVAR_XML_ONE_RECORD),
        make_temp_file("one_record", "vcf", CLINVAR_VCF_ONE_RECORD),
        false,
    );
    let (summary, output) = run(&args);
    assert_eq!(output, one_record_expected());
    assert_eq!(
        summary,
        AnnotateSummary {
            rows_read: 2,
            rows_after_split: 2,
            index_keys: 2,
            records_processed: 1,
            records_matched: 1,
            rows_annotated: 1,
            rows_written: 2,
        }
    );
}

#[test]
fn test_expand_clinvar_vcf_gzipped_inputs() {
    let args = args(
        make_temp_gz_file("one_record", "xml.gz", CLINVAR_XML_ONE_RECORD),
        make_temp_gz_file("one_record", "vcf.gz", CLINVAR_VCF_ONE_RECORD),
        false,
    );
    let (_, output) = run(&args);
    assert_eq!(output, one_record_expected());
}

#[test]
fn test_modern_join_leaves_unmatched_rows_untouched() {
    let args = args(
        make_temp_file("three_records", "xml", CLINVAR_XML_THREE_RECORDS),
        make_temp_file("modern", "vcf", CLINVAR_VCF_MODERN),
        false,
    );
    let (summary, output) = run(&args);
    let expected = format!(
        "##fileformat=VCFv4.1
##source=ClinVar
{NEW_INFO_HEADER}{COLUMNS}1\t1000\t101\tG\tA\t.\t.\tALLELEID=1;{LAB_A_FIELDS}
1\t2000\t102\tC\tT\t.\t.\tALLELEID=2;{LAB_B_C_FIELDS}
1\t3000\t999\tT\tC\t.\t.\tALLELEID=3
"
    );
    assert_eq!(output, expected);
    assert_eq!(summary.records_processed, 3);
    assert_eq!(summary.records_matched, 2);
    assert_eq!(summary.rows_annotated, 2);
}

#[test]
fn test_legacy_join_splits_and_accumulates() {
    let args = args(
        make_temp_file("three_records", "xml", CLINVAR_XML_THREE_RECORDS),
        make_temp_file("legacy", "vcf", CLINVAR_VCF_LEGACY),
        true,
    );
    let (summary, output) = run(&args);
    let expected = format!(
        "##fileformat=VCFv4.0
##source=ClinVar and dbSNP
{NEW_INFO_HEADER}{COLUMNS}1\t1000\trs1\tG\tA\t.\t.\tRS=1;CLNALLE=1;CLNSIG=5;CLNACC=RCV000000011.2;{LAB_A_FIELDS}
1\t2000\trs2\tC\tA\t.\t.\tRS=2;CLNALLE=1;CLNSIG=.;CLNACC=.
1\t2000\trs2\tC\tT\t.\t.\tRS=2;CLNALLE=1;CLNSIG=2|3;CLNACC=RCV000000022.1|RCV000000033.1;{LAB_B_C_D_FIELDS}
1\t3000\trs3\tT\tC\t.\t.\tRS=3;CLNALLE=1;CLNSIG=255;CLNACC=.
"
    );
    assert_eq!(output, expected);
    assert_eq!(
        summary,
        AnnotateSummary {
            rows_read: 3,
            rows_after_split: 4,
            index_keys: 4,
            records_processed: 3,
            records_matched: 3,
            rows_annotated: 2,
            rows_written: 4,
        }
    );
}

#[test]
fn test_legacy_flag_off_uses_id_column() {
    let args = args(
        make_temp_file("three_records", "xml", CLINVAR_XML_THREE_RECORDS),
        make_temp_file("legacy", "vcf", CLINVAR_VCF_LEGACY),
        false,
    );
    let (summary, output) = run(&args);
    assert_eq!(summary.rows_after_split, 3);
    assert_eq!(summary.records_matched, 0);
    assert!(output.ends_with("RS=3;CLNALLE=1;CLNSIG=255;CLNACC=.\n"));
    assert!(output.contains("\tA,T\t"));
}

#[test]
fn test_missing_input_is_an_error() {
    init_logger();
    let args = args(
        make_temp_file("three_records", "xml", CLINVAR_XML_THREE_RECORDS),
        PathBuf::from("/definitely/not/here.vcf"),
        false,
    );
    assert!(annotate(&args).is_err());
}

#[test]
fn test_truncated_xml_is_an_error() {
    init_logger();
    let args = args(
        make_temp_file(
            "truncated",
            "xml",
            "<ReleaseSet><ClinVarSet ID=\"1\"><ReferenceClinVarAssertion>",
        ),
        make_temp_file("modern", "vcf", CLINVAR_VCF_MODERN),
        false,
    );
    assert!(annotate(&args).is_err());
}
