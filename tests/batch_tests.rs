mod common;
use common::temp_input;
use fitness_tracker::core::batch::{InputFormat, load_packages, summarize};
use fitness_tracker::errors::AppError;
use fitness_tracker::models::SensorPackage;
use std::path::Path;

#[test]
fn test_load_json_packages() {
    let path = temp_input(
        "batch_json",
        "json",
        r#"[{"type": "RUN", "data": [15000, 1, 75]}, {"type": "SWM", "data": [720, 1, 80, 25, 40]}]"#,
    );

    let packages = load_packages(Path::new(&path), None).unwrap();
    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0], SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
}

#[test]
fn test_load_yaml_packages() {
    let path = temp_input(
        "batch_yaml",
        "yml",
        "- type: WLK\n  data: [9000, 1, 75, 180]\n",
    );

    let packages = load_packages(Path::new(&path), None).unwrap();
    assert_eq!(packages, vec![SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0])]);
}

#[test]
fn test_load_csv_packages() {
    let path = temp_input(
        "batch_csv",
        "csv",
        "# code,values...\nSWM,720,1,80,25,40\nRUN, 15000, 1, 75\nWLK,9000,1,75,180\n",
    );

    let packages = load_packages(Path::new(&path), None).unwrap();
    assert_eq!(packages.len(), 3);
    assert_eq!(packages[1].data, vec![15000.0, 1.0, 75.0]);

    let messages = summarize(&packages).unwrap();
    let labels: Vec<&str> = messages.iter().map(|m| m.training_type.as_str()).collect();
    assert_eq!(labels, ["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn test_explicit_format_overrides_extension() {
    let path = temp_input("batch_explicit", "txt", "RUN,15000,1,75\n");

    assert!(matches!(
        load_packages(Path::new(&path), None),
        Err(AppError::InvalidInputFormat(_))
    ));
    assert_eq!(
        load_packages(Path::new(&path), Some(InputFormat::Csv)).unwrap().len(),
        1
    );
}

#[test]
fn test_csv_non_numeric_cell() {
    let path = temp_input("batch_bad_cell", "csv", "RUN,15000,one,75\n");

    assert!(matches!(
        load_packages(Path::new(&path), None),
        Err(AppError::InvalidNumber(cell)) if cell == "one"
    ));
}

#[test]
fn test_summarize_stops_at_first_fault() {
    let packages = vec![
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("XYZ", vec![1.0]),
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];

    assert!(matches!(
        summarize(&packages),
        Err(AppError::UnknownWorkoutType(code)) if code == "XYZ"
    ));
}

#[test]
fn test_samples_order() {
    let codes: Vec<String> = SensorPackage::samples()
        .into_iter()
        .map(|p| p.workout_type)
        .collect();
    assert_eq!(codes, ["SWM", "RUN", "WLK"]);
}

#[test]
fn test_csv_row_with_only_a_code() {
    let path = temp_input("batch_code_only", "csv", "RUN\n");

    let packages = load_packages(Path::new(&path), None).unwrap();
    assert_eq!(packages, vec![SensorPackage::new("RUN", vec![])]);

    assert!(matches!(
        summarize(&packages),
        Err(AppError::WrongFieldCount {
            expected: 3,
            got: 0,
            ..
        })
    ));
}

#[test]
fn test_csv_comment_between_rows() {
    let path = temp_input(
        "batch_mid_comment",
        "csv",
        "RUN,15000,1,75\n# pool session\nSWM,720,1,80,25,40\n",
    );

    let packages = load_packages(Path::new(&path), None).unwrap();
    let codes: Vec<&str> = packages.iter().map(|p| p.workout_type.as_str()).collect();
    assert_eq!(codes, ["RUN", "SWM"]);
}
