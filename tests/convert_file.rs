use fastq2csv::{ConvertError, convert_path, csv_output_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn convert_plain_file_two_records() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sample.fq");
    fs::write(
        &input,
        "@read1 desc\nACGTN\n+\n!!!!!\n@read2 other\nACGT\n+\n####\n",
    )
    .unwrap();

    let output = csv_output_path(&input);
    assert_eq!(output, dir.path().join("sample.csv"));

    let written = convert_path(&input, &output).unwrap();
    assert_eq!(written, 2);

    let got = fs::read_to_string(&output).unwrap();
    assert_eq!(
        got,
        "id,description,sequence,quality\n\
         \"@read1\",\"desc\",\"ACGTN\",\"!!!!!\"\n\
         \"@read2\",\"other\",\"ACGT\",\"####\"\n"
    );
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.fq");
    let err = convert_path(&input, &dir.path().join("nope.csv")).unwrap_err();
    match err {
        ConvertError::Io { .. } => {}
        other => panic!("expected I/O error, got {other:?}"),
    }
}
