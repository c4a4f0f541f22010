use std::io::Write;

use idcheck::{check_ids, load_frames, Checking, Error, JumpChecker, ObjectId, Thresholds};

fn write_json(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn check_file(contents: &str) -> idcheck::Report {
    let file = write_json(contents);
    let frames = load_frames(file.path()).unwrap();
    check_ids(&frames, &Thresholds::default())
}

#[test]
fn small_step_passes() {
    let report = check_file(
        r#"[
            {"tracked_objects": [{"id": 1, "x": 0.0, "y": 0.0}]},
            {"tracked_objects": [{"id": 1, "x": 0.05, "y": 0.0}]}
        ]"#,
    );
    assert!(report.is_ok());
    assert_eq!(report.message(), "IDs are consistent");
}

#[test]
fn jump_within_gap_fails() {
    let report = check_file(
        r#"[
            {"tracked_objects": [{"id": 1, "x": 0.0, "y": 0.0}]},
            {"tracked_objects": [{"id": 1, "x": 0.9, "y": 0.0}]}
        ]"#,
    );
    assert!(!report.is_ok());
    assert_eq!(
        report.message(),
        "ID 1 jumps between frames 0 and 1 (gap 1, dist 0.900)"
    );
}

#[test]
fn jump_after_long_gap_passes() {
    let report = check_file(
        r#"[
            {"tracked_objects": [{"id": 1, "x": 0.0, "y": 0.0}]},
            {"tracked_objects": []},
            {"tracked_objects": []},
            {"tracked_objects": []},
            {"tracked_objects": []},
            {"tracked_objects": [{"id": 1, "x": 0.9, "y": 0.0}]}
        ]"#,
    );
    assert!(report.is_ok());
}

#[test]
fn reports_the_bad_id_among_good_ones() {
    let report = check_file(
        r#"[
            {"tracked_objects": [{"id": 1, "x": 0.0, "y": 0.0}, {"id": 2, "x": 0.0, "y": 0.0}]},
            {"tracked_objects": [{"id": 1, "x": 0.01, "y": 0.0}, {"id": 2, "x": 1.0, "y": 1.0}]},
            {"tracked_objects": [{"id": 1, "x": 0.02, "y": 0.01}]},
            {"tracked_objects": [{"id": 1, "x": 0.0, "y": 0.02}]}
        ]"#,
    );
    let violation = report.violation().unwrap();
    assert_eq!(violation.id, ObjectId::Int(2));
    assert_eq!(
        report.message(),
        "ID 2 jumps between frames 0 and 1 (gap 1, dist 1.414)"
    );
}

#[test]
fn string_ids_are_reported_verbatim() {
    let report = check_file(
        r#"[
            {"tracked_objects": [{"id": "truck", "x": "0.1", "y": "0.1"}]},
            {"tracked_objects": [{"id": "truck", "x": "0.6", "y": "0.1"}]}
        ]"#,
    );
    assert!(report.message().starts_with("ID truck jumps between frames 0 and 1"));
}

#[test]
fn empty_input_is_consistent() {
    assert!(check_file("[]").is_ok());
}

#[test]
fn constant_small_steps_never_fail() {
    let frames: Vec<_> = (0..500)
        .map(|i| {
            idcheck::Frame::new(vec![idcheck::TrackedObject::new(
                7,
                i as f64 * 0.01,
                i as f64 * 0.005,
            )])
        })
        .collect();

    let checker = JumpChecker::new(Thresholds::new(3, 0.15).unwrap());
    assert_eq!(checker.thresholds(), &Thresholds::default());
    assert!(checker.check(&frames).is_ok());
}

#[test]
fn repeated_checks_agree() {
    let contents = r#"[
        {"tracked_objects": [{"id": 3, "x": 0.0, "y": 0.0}, {"id": 8, "x": 0.5, "y": 0.5}]},
        {"tracked_objects": [{"id": 8, "x": 0.0, "y": 0.0}, {"id": 3, "x": 0.5, "y": 0.5}]}
    ]"#;
    let file = write_json(contents);
    let frames = load_frames(file.path()).unwrap();

    let checker: Box<dyn Checking> = Box::new(JumpChecker::default());
    let first = checker.check(&frames);
    for _ in 0..10 {
        assert_eq!(checker.check(&frames), first);
    }
    assert_eq!(first.violation().unwrap().id, ObjectId::Int(3));
}

#[test]
fn malformed_inputs_are_load_errors() {
    for contents in [
        r#"[{"frame_id": 0}]"#,
        r#"[{"tracked_objects": [{"id": 1, "x": 0.0}]}]"#,
        r#"[{"tracked_objects": [{"id": 1, "x": "abc", "y": 0.0}]}]"#,
        r#"[{"tracked_objects": [{"x": 0.0, "y": 0.0}]}]"#,
        "[{",
    ] {
        let file = write_json(contents);
        assert!(
            matches!(load_frames(file.path()), Err(Error::Json(_))),
            "{}",
            contents
        );
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_frames(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
