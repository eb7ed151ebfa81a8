//! End-to-end conversion tests over real files

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use varscan_vcf::{
    convert_file, ConversionStats, ConvertOptions, ErrorPolicy, InputFormat, VarscanVcfError,
};

const NATIVE_HEADER: &str =
    "chrom\tposition\tref\tvar\tnormal_reads1\tnormal_reads2\tnormal_var_freq\tnormal_gt\ttumor_reads1\ttumor_reads\ttumor_var_freq\ttumor_gt\tsomatic_status\tvariant_p_value\tsomatic_p_value\ttumor_reads1_plus\ttumor_reads1_minus\ttumor_reads2_plus\ttumor_reads2_minus\tnormal_reads1_plus\tnormal_reads1_minus\tnormal_reads2_plus\tnormal_reads2_minus";

const SCENARIO: &str =
    "chr1\t100\tC\t-AT\t5\t10\t66.7%\t0/1\t3\t20\t87%\t0/1\t2\t0.01\t0.0001\t2\t1\t6\t4\t3\t2\t5\t5";

const INSERTION: &str =
    "chr3\t5000\tC\t+AT\t40\t0\t0%\tC\t20\t18\t47,5%\tY\tSomatic\t1.0\t2.5E-5\t10\t10\t9\t9\t20\t20\t0\t0";

/// The legacy converter's output for INSERTION, byte for byte
const INSERTION_LEGACY_VCF: &str =
    "chr3\t5000\t.\tC\tCAT\t.\tPASS\tAF=0.475;DP=78;SOMATIC;SS=2;SSC=46;GPV=1.0;SPV=2.5E-5";

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(content.as_bytes()).unwrap();
    temp.flush().unwrap();
    temp
}

fn run(path: &Path, options: &ConvertOptions) -> (varscan_vcf::Result<ConversionStats>, String) {
    let mut out = Vec::new();
    let result = convert_file(path, &mut out, options);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_scenario_record() {
    let temp = write_temp(&format!("{}\n{}\n", NATIVE_HEADER, SCENARIO));
    let (result, out) = run(temp.path(), &ConvertOptions::default());
    assert_eq!(result.unwrap().success, 1);

    let record = out.lines().last().unwrap();
    let fields: Vec<&str> = record.split('\t').collect();
    assert_eq!(fields[4], "C");
    assert!(fields[7].contains("SOMATIC;SS=2"));
    assert!(fields[7].contains(";DP=38;"));
}

#[test]
fn test_legacy_output_is_byte_identical() {
    let temp = write_temp(&format!("{}\n{}\n", NATIVE_HEADER, INSERTION));
    let (result, out) = run(temp.path(), &ConvertOptions::legacy());
    result.unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[18], "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO");
    assert_eq!(lines[19], INSERTION_LEGACY_VCF);
}

#[test]
fn test_vcf_round_trip_through_files() {
    let native = write_temp(&format!("{}\n{}\n{}\n", NATIVE_HEADER, SCENARIO, INSERTION));
    let (result, vcf) = run(native.path(), &ConvertOptions::default());
    assert_eq!(result.unwrap().input_format, Some(InputFormat::Native));

    let vcf_file = write_temp(&vcf);
    let (result, back) = run(vcf_file.path(), &ConvertOptions::default());
    let stats = result.unwrap();
    assert_eq!(stats.input_format, Some(InputFormat::Vcf));
    assert_eq!(stats.success, 2);

    let lines: Vec<&str> = back.lines().collect();
    assert_eq!(lines[0], NATIVE_HEADER);
    assert!(lines[1].starts_with(
        "chr1\t100\tC\tC\t5\t10\t66.7%\t0/1\t3\t20\t87%\t1/1\tSomatic\t0.01\t0.0001\t"
    ));
    assert!(lines[1].ends_with("\t2\t1\t6\t4\t3\t2\t5\t5\t"));
    assert!(lines[2].starts_with(
        "chr3\t5000\tC\tCAT\t40\t0\t0%\t0/0\t20\t18\t47,5%\t0/1\tSomatic\t"
    ));
}

#[test]
fn test_gzip_input() {
    let mut temp = NamedTempFile::new().unwrap();
    {
        let mut encoder =
            flate2::write::GzEncoder::new(temp.as_file_mut(), flate2::Compression::default());
        writeln!(encoder, "{}", NATIVE_HEADER).unwrap();
        writeln!(encoder, "{}", INSERTION).unwrap();
        encoder.finish().unwrap();
    }

    let (result, out) = run(temp.path(), &ConvertOptions::legacy());
    assert_eq!(result.unwrap().success, 1);
    assert!(out.ends_with(&format!("{}\n", INSERTION_LEGACY_VCF)));
}

#[test]
fn test_bzip2_input() {
    let mut temp = NamedTempFile::new().unwrap();
    {
        let mut encoder =
            bzip2::write::BzEncoder::new(temp.as_file_mut(), bzip2::Compression::default());
        writeln!(encoder, "{}", INSERTION).unwrap();
        encoder.finish().unwrap();
    }

    let (result, out) = run(temp.path(), &ConvertOptions::legacy());
    assert_eq!(result.unwrap().success, 1);
    assert!(out.ends_with(&format!("{}\n", INSERTION_LEGACY_VCF)));
}

#[test]
fn test_error_reports_line_and_field() {
    let bad = SCENARIO.replace("\t87%\t", "\tNA\t");
    let temp = write_temp(&format!("{}\n{}\n{}\n", NATIVE_HEADER, INSERTION, bad));
    let (result, out) = run(temp.path(), &ConvertOptions::default());

    let err = result.unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.to_string(), "line 3: failed to parse tumor_var_freq 'NA'");
    // No partial line for the failed record
    assert!(out.ends_with('\n'));
    assert!(!out.contains("chr1\t100"));
    assert!(out.contains("chr3\t5000"));
}

#[test]
fn test_skip_invalid_keeps_going() {
    let bad = SCENARIO.replace("\t2\t0.01\t", "\t4\t0.01\t");
    let temp = write_temp(&format!("{}\n{}\n{}\n", NATIVE_HEADER, bad, INSERTION));
    let options = ConvertOptions {
        on_error: ErrorPolicy::Skip,
        ..ConvertOptions::default()
    };
    let (result, out) = run(temp.path(), &options);

    let stats = result.unwrap();
    assert_eq!((stats.total, stats.success, stats.failed), (2, 1, 1));
    assert!(out.contains("chr3\t5000"));
}

#[test]
fn test_missing_input_file() {
    let (result, out) = run(Path::new("/nonexistent/input.snp"), &ConvertOptions::default());
    assert!(matches!(result, Err(VarscanVcfError::Io(_))));
    assert!(out.is_empty());
}
