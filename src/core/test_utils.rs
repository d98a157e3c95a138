use crate::{core::element::Element, io::xml_reader::ClinVarSetReader};
use flate2::{write::GzEncoder, Compression};
use std::{fs, io::Write, path::PathBuf};

/// A single ClinVarSet from the March 2021 full release (trimmed).
pub const CLINVAR_XML_ONE_RECORD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<ReleaseSet Dated="2021-03-01" Type="full" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="http://ftp.ncbi.nlm.nih.gov/pub/clinvar/xsd_public/clinvar_public_1.60.xsd">
  <ClinVarSet ID="79284357">
    <RecordStatus>current</RecordStatus>
    <Title>NM_152486.3(SAMD11):c.106G&gt;A (p.Ala36Thr) AND not provided</Title>
    <ReferenceClinVarAssertion DateCreated="2020-03-16" DateLastUpdated="2021-02-28" ID="2453478">
      <ClinVarAccession Acc="RCV000953221" DateUpdated="2021-02-28" DateCreated="2020-03-16" Type="RCV" Version="1"/>
      <RecordStatus>current</RecordStatus>
      <ClinicalSignificance DateLastEvaluated="2019-12-11">
        <ReviewStatus>criteria provided, single submitter</ReviewStatus>
        <Description>Uncertain significance</Description>
      </ClinicalSignificance>
      <Assertion Type="variation to disease"/>
      <ObservedIn>
        <Sample>
          <Origin>germline</Origin>
          <Species TaxonomyId="9606">human</Species>
          <AffectedStatus>unknown</AffectedStatus>
        </Sample>
        <Method>
          <MethodType>clinical testing</MethodType>
        </Method>
      </ObservedIn>
      <MeasureSet Type="Variant" ID="1019397" Acc="VCV001019397" Version="1">
        <Measure Type="single nucleotide variant" ID="1005896">
          <Name>
            <ElementValue Type="Preferred">NM_152486.3(SAMD11):c.106G&gt;A (p.Ala36Thr)</ElementValue>
          </Name>
          <SequenceLocation Assembly="GRCh37" Chr="1" Accession="NC_000001.10" start="866438" stop="866438" referenceAllele="G" alternateAllele="A"/>
        </Measure>
      </MeasureSet>
      <TraitSet Type="Disease" ID="9460">
        <Trait ID="17556" Type="Disease">
          <Name>
            <ElementValue Type="Preferred">not provided</ElementValue>
            <XRef ID="13DG0619" DB="Developmental Genetics Unit, King Faisal Specialist Hospital &amp; Research Centre"/>
          </Name>
          <Name>
            <ElementValue Type="Alternate">none provided</ElementValue>
          </Name>
          <AttributeSet>
            <Attribute Type="disease mechanism"> loss of function </Attribute>
          </AttributeSet>
          <AttributeSet>
            <Attribute Type="public definition">The term 'not provided' is registered in MedGen.</Attribute>
          </AttributeSet>
          <XRef ID="C3661900" DB="MedGen"/>
          <XRef ID="MTHD;0001" DB="OMIM"/>
        </Trait>
      </TraitSet>
    </ReferenceClinVarAssertion>
    <ClinVarAssertion ID="2453014">
      <ClinVarSubmissionID localKey="NM_152486.2:c.106G&gt;A|not provided" submitter="Invitae" submitterDate="2020-02-06" title="NM_152486.2:c.106G&gt;A AND not provided"/>
      <ClinVarAccession Acc="SCV001214463" DateUpdated="2020-03-16" DateCreated="2020-03-16" Type="SCV" Version="1" OrgID="500031" OrganizationCategory="laboratory" OrgAbbreviation="Invitae"/>
      <RecordStatus>current</RecordStatus>
      <ClinicalSignificance DateLastEvaluated="2019-12-11">
        <ReviewStatus>criteria provided, single submitter</ReviewStatus>
        <Description>Uncertain significance</Description>
        <Comment>This sequence change replaces alanine with threonine at codon 36 of the SAMD11 protein (p.Ala36Thr). Algorithms developed to predict the effect of missense changes on protein structure and function output the following: SIFT: "Tolerated"; PolyPhen-2: "Benign"; Align-GVGD: "Class C0".</Comment>
      </ClinicalSignificance>
      <Assertion Type="variation to disease"/>
      <ObservedIn>
        <Sample>
          <Origin>germline</Origin>
          <Species TaxonomyId="9606">human</Species>
          <AffectedStatus>unknown</AffectedStatus>
        </Sample>
        <Method>
          <MethodType>clinical testing</MethodType>
        </Method>
      </ObservedIn>
      <MeasureSet Type="Variant">
        <Measure Type="Variation">
          <AttributeSet>
            <Attribute Type="HGVS">NM_152486.2:c.106G&gt;A</Attribute>
          </AttributeSet>
        </Measure>
      </MeasureSet>
      <TraitSet Type="Disease">
        <Trait Type="Disease">
          <XRef DB="MedGen" ID="CN517202" Type="CUI"/>
        </Trait>
      </TraitSet>
    </ClinVarAssertion>
  </ClinVarSet>
</ReleaseSet>
"#;

/// One ClinVarSet with three submissions, one without any classification and
/// one missing most optional fields.
pub const CLINVAR_XML_TWO_ASSERTIONS: &str = r#"<ReleaseSet Type="full">
  <ClinVarSet ID="2">
    <ReferenceClinVarAssertion ID="20">
      <ClinVarAccession Acc="RCV000000002" Type="RCV" Version="3"/>
      <MeasureSet Type="Variant" ID="2"/>
      <TraitSet Type="Disease">
        <Trait Type="Disease">
          <Name><ElementValue Type="Preferred">Cardiomyopathy, dilated; 1A</ElementValue></Name>
        </Trait>
        <Trait Type="Disease">
          <Name><ElementValue Type="Preferred">Heart failure</ElementValue></Name>
        </Trait>
      </TraitSet>
    </ReferenceClinVarAssertion>
    <ClinVarAssertion ID="21">
      <ClinVarSubmissionID submitter="OMIM" submitterDate="2017-01-01"/>
      <ClinVarAccession Acc="SCV000000021" Type="SCV" Version="1"/>
      <ClinicalSignificance DateLastEvaluated="2018-01-01">
        <ReviewStatus>no assertion criteria provided</ReviewStatus>
        <Description>Pathogenic</Description>
      </ClinicalSignificance>
      <ObservedIn><Sample><Origin>germline</Origin></Sample></ObservedIn>
    </ClinVarAssertion>
    <ClinVarAssertion ID="22">
      <ClinVarSubmissionID submitter="GeneDx"/>
      <ClinVarAccession Acc="SCV000000022" Type="SCV" Version="2"/>
      <ClinicalSignificance>
        <Comment>Seen in two families</Comment>
      </ClinicalSignificance>
      <ObservedIn><Sample><Species>human</Species></Sample></ObservedIn>
    </ClinVarAssertion>
    <ClinVarAssertion ID="23">
      <ClinVarSubmissionID submitter="OMIM" submitterDate="2019-07-07"/>
      <ClinVarAccession Acc="SCV000000023" Type="SCV" Version="1"/>
      <ObservedIn><Sample><Origin>germline</Origin></Sample></ObservedIn>
    </ClinVarAssertion>
  </ClinVarSet>
</ReleaseSet>
"#;

/// Three small ClinVarSets (IDs 1, 2 and 3) with MeasureSet IDs 101, 102 and
/// 103 and RCV accessions RCV000000011, RCV000000022 and RCV000000033.
pub const CLINVAR_XML_THREE_RECORDS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ReleaseSet Dated="2017-04-01" Type="full">
  <ClinVarSet ID="1">
    <ReferenceClinVarAssertion ID="10">
      <ClinVarAccession Acc="RCV000000011" Type="RCV" Version="2"/>
      <MeasureSet Type="Variant" ID="101"/>
      <TraitSet Type="Disease">
        <Trait Type="Disease"><Name><ElementValue Type="Preferred">Long QT syndrome</ElementValue></Name></Trait>
      </TraitSet>
    </ReferenceClinVarAssertion>
    <ClinVarAssertion ID="11">
      <ClinVarSubmissionID submitter="Lab A" submitterDate="2016-05-01"/>
      <ClinVarAccession Acc="SCV000000111" Type="SCV" Version="1"/>
      <ClinicalSignificance DateLastEvaluated="2016-04-01">
        <ReviewStatus>criteria provided, single submitter</ReviewStatus>
        <Description>Pathogenic</Description>
      </ClinicalSignificance>
      <ObservedIn><Sample><Origin>germline</Origin></Sample></ObservedIn>
    </ClinVarAssertion>
  </ClinVarSet>
  <ClinVarSet ID="2">
    <ReferenceClinVarAssertion ID="20">
      <ClinVarAccession Acc="RCV000000022" Type="RCV" Version="1"/>
      <MeasureSet Type="Variant" ID="102"/>
      <TraitSet Type="Disease">
        <Trait Type="Disease"><Name><ElementValue Type="Preferred">not specified</ElementValue></Name></Trait>
      </TraitSet>
    </ReferenceClinVarAssertion>
    <ClinVarAssertion ID="21">
      <ClinVarSubmissionID submitter="Lab B" submitterDate="2015-02-02"/>
      <ClinVarAccession Acc="SCV000000221" Type="SCV" Version="1"/>
      <ClinicalSignificance DateLastEvaluated="2015-01-01">
        <ReviewStatus>criteria provided, single submitter</ReviewStatus>
        <Description>Benign</Description>
      </ClinicalSignificance>
      <ObservedIn><Sample><Origin>germline</Origin></Sample></ObservedIn>
    </ClinVarAssertion>
    <ClinVarAssertion ID="22">
      <ClinVarSubmissionID submitter="Lab C" submitterDate="2015-03-03"/>
      <ClinVarAccession Acc="SCV000000222" Type="SCV" Version="1"/>
      <ClinicalSignificance>
        <ReviewStatus>no assertion criteria provided</ReviewStatus>
        <Description>Likely benign</Description>
      </ClinicalSignificance>
      <ObservedIn><Sample><Origin>maternal</Origin></Sample></ObservedIn>
    </ClinVarAssertion>
  </ClinVarSet>
  <ClinVarSet ID="3">
    <ReferenceClinVarAssertion ID="30">
      <ClinVarAccession Acc="RCV000000033" Type="RCV" Version="1"/>
      <MeasureSet Type="Variant" ID="103"/>
      <TraitSet Type="Disease">
        <Trait Type="Disease"><Name><ElementValue Type="Preferred">Brugada syndrome</ElementValue></Name></Trait>
      </TraitSet>
    </ReferenceClinVarAssertion>
    <ClinVarAssertion ID="31">
      <ClinVarSubmissionID submitter="Lab D" submitterDate="2016-06-06"/>
      <ClinVarAccession Acc="SCV000000331" Type="SCV" Version="2"/>
      <ClinicalSignificance DateLastEvaluated="2016-06-01">
        <ReviewStatus>criteria provided, single submitter</ReviewStatus>
        <Description>Uncertain significance</Description>
        <Comment>Reported in one proband, segregation unknown</Comment>
      </ClinicalSignificance>
      <ObservedIn><Sample><Origin>unknown</Origin></Sample></ObservedIn>
    </ClinVarAssertion>
  </ClinVarSet>
</ReleaseSet>
"#;

/// Current-format VCF: the `ID` column is the Variation ID.
pub const CLINVAR_VCF_ONE_RECORD: &str = "##fileformat=VCFv4.1
##fileDate=2021-03-02
##source=ClinVar
##reference=GRCh37
##INFO=<ID=ALLELEID,Number=1,Type=Integer,Description=\"the ClinVar Allele ID\">
##INFO=<ID=CLNSIG,Number=.,Type=String,Description=\"Clinical significance for this single variant\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
1\t866438\t1019397\tG\tA\t.\t.\tALLELEID=1005896;CLNDISDB=MedGen:CN517202;CLNDN=not_provided;CLNHGVS=NC_000001.10:g.866438G>A;CLNREVSTAT=criteria_provided,_single_submitter;CLNSIG=Uncertain_significance
1\t866461\t1000001\tG\tA\t.\t.\tALLELEID=1005897;CLNSIG=Likely_benign
";

/// Current-format VCF keyed on the MeasureSet IDs of the three record release.
pub const CLINVAR_VCF_MODERN: &str = "##fileformat=VCFv4.1
##source=ClinVar
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
1\t1000\t101\tG\tA\t.\t.\tALLELEID=1
1\t2000\t102\tC\tT\t.\t.\tALLELEID=2
1\t3000\t999\tT\tC\t.\t.\tALLELEID=3
";

/// Pre May 2017 VCF. The second line holds two ALT alleles of which only
/// the second carries ClinVar data.
pub const CLINVAR_VCF_LEGACY: &str = "##fileformat=VCFv4.0
##source=ClinVar and dbSNP
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
1\t1000\trs1\tG\tA\t.\t.\tRS=1;CLNALLE=1;CLNSIG=5;CLNACC=RCV000000011.2
1\t2000\trs2\tC\tA,T\t.\t.\tRS=2;CLNALLE=2;CLNSIG=2|3;CLNACC=RCV000000022.1|RCV000000033.1
1\t3000\trs3\tT\tC\t.\t.\tRS=3;CLNALLE=1;CLNSIG=255;CLNACC=.
";

pub fn make_temp_path(stem: &str, ext: &str) -> PathBuf {
    let prefix = format!("clinvar_vcf_test_{stem}_");
    let suffix = format!(".{ext}");
    let (_, path) = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(&suffix)
        .tempfile_in(std::env::temp_dir())
        .expect("temp file should be creatable")
        .keep()
        .expect("temp file should be persistable");
    path
}

pub fn make_temp_file(stem: &str, ext: &str, contents: &str) -> PathBuf {
    let path = make_temp_path(stem, ext);
    fs::write(&path, contents).expect("test file should be writable");
    path
}

/// Writes `contents` gzip-compressed; `ext` should end in `.gz`.
pub fn make_temp_gz_file(stem: &str, ext: &str, contents: &str) -> PathBuf {
    let path = make_temp_path(stem, ext);
    let file = fs::File::create(&path).expect("test file should be creatable");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(contents.as_bytes())
        .expect("test file should be writable");
    encoder.finish().expect("gzip stream should finish");
    path
}

pub fn parse_first_set(xml: &str) -> Element {
    ClinVarSetReader::new(xml.as_bytes())
        .next_set()
        .expect("fixture XML should parse")
        .expect("fixture XML should hold a ClinVarSet")
}
