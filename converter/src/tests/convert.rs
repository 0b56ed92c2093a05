use crate::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "\
P|Ann|Smith
T|0700000000|
F|Smiths|1990
A|Main St|Springfield|12345
P|Bo|Larsson
";

#[test]
fn test_convert_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.txt");
    let output = dir.path().join(DEFAULT_OUTPUT_FILE);
    fs::write(&input, SAMPLE).unwrap();

    let conversion = convert(Some(&input), &output).unwrap();
    assert_eq!(conversion.people, 2);
    assert!(conversion.warnings.is_empty());
    assert!(conversion.output_path.is_absolute());

    let document = fs::read_to_string(&output).unwrap();
    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<people>"));
    assert!(document.contains("<firstname>Ann</firstname>"));
    assert!(document.contains("<mobile>0700000000</mobile>"));
    assert!(document.contains("<landline/>"));
    assert!(document.contains("<name>Smiths</name>"));
    assert!(document.contains("<street>Main St</street>"));
    assert!(document.ends_with("</people>\n"));
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.txt");
    fs::write(&input, SAMPLE).unwrap();

    let first = dir.path().join("first.xml");
    let second = dir.path().join("second.xml");
    convert(Some(&input), &first).unwrap();
    convert(Some(&input), &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_output_is_fully_overwritten() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.txt");
    let output = dir.path().join(DEFAULT_OUTPUT_FILE);
    fs::write(&input, SAMPLE).unwrap();
    fs::write(&output, "stale content that is much longer than the real document would ever need to be, repeated a few times to be sure. stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale stale").unwrap();

    convert(Some(&input), &output).unwrap();

    let document = fs::read_to_string(&output).unwrap();
    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(!document.contains("stale"));
}

#[test]
fn test_empty_input_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join(DEFAULT_OUTPUT_FILE);
    fs::write(&input, "").unwrap();

    let conversion = convert(Some(&input), &output).unwrap();
    assert_eq!(conversion.people, 0);

    let document = fs::read_to_string(&output).unwrap();
    assert_eq!(document, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<people/>\n");
}

#[test]
fn test_no_input_selected() {
    let dir = tempdir().unwrap();
    let output = dir.path().join(DEFAULT_OUTPUT_FILE);

    let err = convert(None, &output).unwrap_err();
    assert!(matches!(err, ConvertError::NoInputSelected));
    assert_eq!(err.to_string(), "No input file selected.");
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("does-not-exist.txt");
    let output = dir.path().join(DEFAULT_OUTPUT_FILE);

    let err = convert(Some(&input), &output).unwrap_err();
    assert!(matches!(err, ConvertError::UnreadableInput { .. }));
    assert!(!output.exists());
}

#[test]
fn test_input_that_is_not_utf8() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("binary.txt");
    let output = dir.path().join(DEFAULT_OUTPUT_FILE);
    fs::write(&input, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = convert(Some(&input), &output).unwrap_err();
    assert!(matches!(err, ConvertError::UnreadableInput { .. }));
    assert!(!output.exists());
}

#[test]
fn test_parse_failure_writes_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("orphans.txt");
    let output = dir.path().join(DEFAULT_OUTPUT_FILE);
    fs::write(&input, "T|1|\nP|Ann|Smith\n").unwrap();

    let err = convert(Some(&input), &output).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
    assert!(err.to_string().contains("Orphan 'T' record"));
    assert!(!output.exists());
}

#[test]
fn test_warnings_are_passed_through() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.txt");
    let output = dir.path().join(DEFAULT_OUTPUT_FILE);
    fs::write(&input, "P|Ann|Smith\nX|foo|bar\n").unwrap();

    let conversion = convert(Some(&input), &output).unwrap();
    assert_eq!(conversion.warnings.len(), 1);
    assert_eq!(conversion.warnings[0].file, input);
    assert_eq!(conversion.warnings[0].line, 2);
}
