//! End-to-end tests running the pipeline against files in a temp directory.

use std::fs;
use std::path::Path;

use rusqlite::Connection;
use tempfile::TempDir;

use mdq_cli::pipeline::run_pipeline;
use mdq_model::{DatabaseTarget, RunOptions, Rule, TableName};

const INPUT: &str = "\
id,name,email,role,start_date,active,department
7,Ann  Lee,a@b.com,eng,15.05.2023,yes,R&D
8,Bo Berg,not-an-email,ops,2023-01-02,no,Ops
42,Cy Chan,cy@example.com,qa,01/02/2021,1,QA
42,Cy Duplicate,cy2@example.com,qa,01/02/2021,1,QA
9,Dee Dahl,dee@example.com,eng,,maybe,R&D
";

fn options(dir: &TempDir, input: &str) -> RunOptions {
    let input_path = dir.path().join("data/sample_raw.csv");
    fs::create_dir_all(input_path.parent().unwrap()).unwrap();
    fs::write(&input_path, input).unwrap();
    let db_path = dir.path().join("db/stammdaten.db");
    RunOptions {
        input: input_path,
        database: DatabaseTarget::parse(&format!("sqlite:///{}", db_path.display())).unwrap(),
        table: TableName::parse("stammdaten_clean").unwrap(),
        valid_csv: dir.path().join("out/clean.csv"),
        invalid_csv: dir.path().join("out/rejects.csv"),
        report_md: dir.path().join("docs/report.md"),
        dry_run: false,
    }
}

fn table_ids(db_path: &Path) -> Vec<String> {
    let conn = Connection::open(db_path).unwrap();
    let mut stmt = conn
        .prepare("SELECT id FROM stammdaten_clean ORDER BY rowid")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn full_run_writes_every_output() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(&dir, INPUT);
    let result = run_pipeline(&options).unwrap();

    assert_eq!(result.rows_read, 5);
    assert_eq!(result.valid_count, 2);
    assert_eq!(result.invalid_count, 2);
    assert_eq!(result.duplicates_dropped, 1);

    let clean = fs::read_to_string(&options.valid_csv).unwrap();
    assert_eq!(
        clean,
        "id,name,email,role,start_date,active\n\
         7,Ann Lee,a@b.com,eng,2023-05-15,true\n\
         42,Cy Chan,cy@example.com,qa,2021-02-01,true\n"
    );

    let rejects = fs::read_to_string(&options.invalid_csv).unwrap();
    assert_eq!(
        rejects,
        "id,name,email,role,start_date,active,error\n\
         8,Bo Berg,not-an-email,ops,2023-01-02,false,invalid_email\n\
         9,Dee Dahl,dee@example.com,eng,,,invalid_start_date;invalid_active\n"
    );

    assert_eq!(table_ids(options.database.path()), vec!["7", "42"]);

    let report = fs::read_to_string(&options.report_md).unwrap();
    assert_eq!(report, result.report);
    assert!(report.contains("- Gültige Datensätze: **2**"));
    assert!(report.contains("- Ungültige Datensätze: **2**"));
    assert!(report.ends_with(
        "## Fehlerübersicht (Top 5)\n- invalid_email: 1\n- invalid_start_date: 1\n- invalid_active: 1"
    ));
    assert_eq!(result.top_errors[0].rule, Rule::InvalidEmail);
}

#[test]
fn rerun_replaces_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(&dir, INPUT);
    run_pipeline(&options).unwrap();

    fs::write(
        &options.input,
        "id,name,email,role,start_date,active\n1,Eve,eve@example.com,eng,2020-01-01,true\n",
    )
    .unwrap();
    let result = run_pipeline(&options).unwrap();

    assert_eq!(result.valid_count, 1);
    assert_eq!(table_ids(options.database.path()), vec!["1"]);
    let report = fs::read_to_string(&options.report_md).unwrap();
    assert!(report.ends_with("- keine"));
    assert_eq!(
        fs::read_to_string(&options.invalid_csv).unwrap(),
        "id,name,email,role,start_date,active,error\n"
    );
}

#[test]
fn missing_role_column_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(
        &dir,
        "id,name,email,start_date,active\n1,Ann,a@b.com,2023-05-15,yes\n",
    );

    let error = run_pipeline(&options).unwrap_err();
    let chain = format!("{error:#}");
    assert!(chain.contains("missing required columns"), "{chain}");
    assert!(chain.contains("role"), "{chain}");
    assert!(!options.valid_csv.exists());
    assert!(!options.report_md.exists());
    assert!(!options.database.path().exists());
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options(&dir, INPUT);
    options.input = dir.path().join("nope.csv");
    let error = run_pipeline(&options).unwrap_err();
    assert!(format!("{error:#}").contains("nope.csv"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options(&dir, INPUT);
    options.dry_run = true;

    let result = run_pipeline(&options).unwrap();

    assert!(result.dry_run);
    assert_eq!(result.valid_count, 2);
    assert!(result.report.starts_with("# Stammdaten-Report"));
    assert!(!options.valid_csv.exists());
    assert!(!options.invalid_csv.exists());
    assert!(!options.report_md.exists());
    assert!(!options.database.path().exists());
}

#[test]
fn padded_identifier_is_trimmed_in_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(
        &dir,
        "id,name,email,role,start_date,active\n 7 ,Ann  Lee,a@b.com,eng,15.05.2023,yes\n",
    );

    let result = run_pipeline(&options).unwrap();

    assert_eq!(result.valid_count, 1);
    assert_eq!(
        fs::read_to_string(&options.valid_csv).unwrap(),
        "id,name,email,role,start_date,active\n7,Ann Lee,a@b.com,eng,2023-05-15,true\n"
    );
    assert_eq!(table_ids(options.database.path()), vec!["7".to_string()]);
}

#[test]
fn float_active_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(
        &dir,
        "id,name,email,role,start_date,active\n1,Ann,a@b.com,eng,2023-05-15,1.0\n",
    );

    let result = run_pipeline(&options).unwrap();

    assert_eq!(result.valid_count, 0);
    assert_eq!(result.invalid_count, 1);
    let rejects = fs::read_to_string(&options.invalid_csv).unwrap();
    assert!(rejects.ends_with(",invalid_active\n"), "{rejects}");
}
