use std::fs;
use std::path::Path;

use clap::Parser;
use mailroom::{DonorCollection, app, cli::Cli};

fn run_cli(snapshot: &Path, args: &[&str]) -> String {
    let mut argv = vec![
        "mailroom".to_string(),
        "--snapshot".to_string(),
        snapshot.display().to_string(),
        "--config".to_string(),
        snapshot.with_extension("toml").display().to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));

    let mut out = Vec::<u8>::new();
    app::run(Cli::parse_from(argv), &mut out).expect("command failed");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn report_for(snapshot: &str) -> String {
    DonorCollection::load_from_file(snapshot)
        .expect("failed to load snapshot")
        .get_donor_report()
}

#[test]
fn case1_ties_keep_snapshot_order() {
    let expected = fs::read_to_string("tests/fixtures/case1_expected_report.txt").unwrap();
    let actual = report_for("tests/fixtures/case1_snapshot.json");
    assert_eq!(actual, expected);
}

#[test]
fn case2_fractional_amounts_and_empty_donor() {
    let expected = fs::read_to_string("tests/fixtures/case2_expected_report.txt").unwrap();
    let actual = report_for("tests/fixtures/case2_snapshot.json");
    assert_eq!(actual, expected);
}

#[test]
fn snapshot_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let copy = dir.path().join("donors.json");

    let original = DonorCollection::load_from_file("tests/fixtures/case2_snapshot.json").unwrap();
    original.save_to_file(&copy).unwrap();
    let reloaded = DonorCollection::load_from_file(&copy).unwrap();

    assert_eq!(reloaded.donors(), original.donors());
    assert_eq!(reloaded.get_donor_report(), original.get_donor_report());
}

#[test]
fn thank_you_on_first_run_creates_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("donors.json");

    let letter = run_cli(&snapshot, &["thank-you", "Ada Lovelace", "10"]);
    assert_eq!(
        letter,
        "\nDear Ada Lovelace,\n\nThank you for your donation of $10.00.\n"
    );

    let letter = run_cli(&snapshot, &["thank-you", "Ada Lovelace", "25.5"]);
    assert!(letter.contains("Thank you for your donation of $25.50."));

    assert_eq!(
        fs::read_to_string(&snapshot).unwrap(),
        r#"{"Ada Lovelace":[10.0,25.5]}"#
    );
}

#[test]
fn read_only_commands_do_not_touch_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("donors.json");

    let report = run_cli(&snapshot, &["report"]);
    assert!(report.contains("Donor Name"));
    assert_eq!(run_cli(&snapshot, &["list"]), "");
    assert!(!snapshot.exists());
}

#[test]
fn rename_then_list_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("donors.json");
    fs::copy("tests/fixtures/case1_snapshot.json", &snapshot).unwrap();

    run_cli(&snapshot, &["rename", "Bob", "Robert"]);
    assert_eq!(run_cli(&snapshot, &["list"]), "Alice\nRobert\nCarol\nDave\n");

    let csv = dir.path().join("summary.csv");
    run_cli(&snapshot, &["export", csv.to_str().unwrap()]);
    let lines: Vec<String> = fs::read_to_string(&csv)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(
        lines,
        [
            "name,total,num_gifts,average",
            "Alice,300.00,2,150.00",
            "Dave,300.00,1,300.00",
            "Robert,50.00,1,50.00",
            "Carol,50.00,2,25.00",
        ]
    );
}

#[test]
fn letters_are_written_per_donor() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("donors.json");
    fs::copy("tests/fixtures/case2_snapshot.json", &snapshot).unwrap();
    let letters = dir.path().join("out");

    let out = run_cli(&snapshot, &["letters", "--dir", letters.to_str().unwrap()]);

    assert!(out.starts_with("Wrote 4 letter(s)"));
    let gates = fs::read_to_string(letters.join("William_Gates,_III.txt")).unwrap();
    assert!(gates.contains("Thank you for your donation of $12.17."));
    assert!(!letters.join("New_Donor.txt").exists());
}

#[test]
fn malformed_snapshot_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("donors.json");
    fs::write(&snapshot, "{ not json").unwrap();

    let cli = Cli::parse_from(["mailroom", "--snapshot", snapshot.to_str().unwrap(), "report"]);
    let err = app::run(cli, Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("malformed snapshot"));
}
