//! Integration tests for the report pipeline.

use std::fs;

use tempfile::TempDir;

use survey_cli::pipeline::run_report;
use survey_cli::types::ReportRequest;
use survey_report::{EXPORT_FILE_NAME, SectionBody};

const SURVEY_CSV: &str = "\
Q1_Age,Q2_Gender,Q3_Education,Q4_LifeSatisfaction,Q5_CarOwnership,Q6_IncomeLevel,Q7_Employed,Q8_MaritalStatus,Q9_HomeOwner,Q10_HoursWorkedPerWeek,Q11_OE_Neighborhood
28,Female,Tertiary,8,Yes,6,Yes,Married,Yes,42,Lovely parks and quiet streets
45,Male,Secondary,5,Yes,4,Yes,Divorced,Yes,50,
33,Female,Primary,6,No,2,No,Single,No,0,Friendly neighbours
51,Male,Tertiary,7,Yes,7,Yes,Married,Yes,45,The parks are great
";

fn write_survey(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn full_run_writes_export_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(&dir, "survey.csv", SURVEY_CSV);

    let outcome = run_report(&ReportRequest::new(&input)).unwrap();

    let artifact = outcome.export.unwrap();
    assert_eq!(artifact.path, dir.path().join("output").join(EXPORT_FILE_NAME));
    assert!(artifact.path.is_file());
    assert_eq!(outcome.report.rows, 4);
    assert_eq!(outcome.report.unavailable_count(), 0);
    assert!(outcome.json.is_none());
}

#[test]
fn json_and_custom_output_dir() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(&dir, "survey.csv", SURVEY_CSV);
    let mut request = ReportRequest::new(&input);
    request.output_dir = Some(dir.path().join("exports"));
    request.json = Some(dir.path().join("report.json"));

    let outcome = run_report(&request).unwrap();

    assert!(dir.path().join("exports").join(EXPORT_FILE_NAME).is_file());
    let json = fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(json.contains("\"age_distribution\""));
    assert_eq!(outcome.json, Some(dir.path().join("report.json")));
}

#[test]
fn no_export_leaves_directory_untouched() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(&dir, "survey.csv", SURVEY_CSV);
    let mut request = ReportRequest::new(&input);
    request.export = false;

    let outcome = run_report(&request).unwrap();

    assert!(outcome.export.is_none());
    assert!(!dir.path().join("output").exists());
}

#[test]
fn missing_columns_do_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(&dir, "partial.csv", "Q1_Age,Q2_Gender\n30,Male\n41,Female\n");
    let mut request = ReportRequest::new(&input);
    request.export = false;

    let outcome = run_report(&request).unwrap();

    let report = &outcome.report;
    assert!(report.section("age_distribution").unwrap().body.is_ready());
    assert!(report.section("gender_distribution").unwrap().body.is_ready());
    assert!(matches!(
        report.section("car_home_ownership").unwrap().body,
        SectionBody::Skipped { .. }
    ));
    assert!(report.word_clouds.iter().all(|cloud| cloud.is_no_data()));
}

#[test]
fn unreadable_input_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");

    let error = run_report(&ReportRequest::new(&input)).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.starts_with("load "));
    assert!(message.contains("absent.csv"));
}

#[test]
fn unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(&dir, "survey.json", "{}");

    assert!(run_report(&ReportRequest::new(&input)).is_err());
}
