//! End-to-end tests: intake → ledger → tally → chart

use anemia_domain::{Category, Intake, RecordStore, Severity};
use anemia_report::{render, summarize, svg, ReportError, SeverityTally};
use anemia_store::CsvStore;
use tempfile::TempDir;

fn intake(name: &str, category: Category, hemoglobin: f64) -> Intake {
    Intake {
        name: name.to_string(),
        age: 30,
        category,
        weight: 55.0,
        hemoglobin,
    }
}

#[test]
fn test_single_diagnosis_yields_one_full_slice() {
    let dir = TempDir::new().unwrap();
    let mut store = CsvStore::new(dir.path().join("ledger.csv"));

    let (record, classification) = intake("Asha", Category::Female, 11.5).diagnose().unwrap();
    assert_eq!(classification.severity, Severity::MildAnemia);
    store.append(&record).unwrap();

    let history = store.read_all().unwrap();
    assert_eq!(history.len(), 1);

    let tally = summarize(history.records()).unwrap();
    assert_eq!(tally.count(Severity::MildAnemia), 1);
    assert_eq!(tally.len(), 1);

    let chart = render(&tally).unwrap();
    assert_eq!(chart.slices.len(), 1);
    assert_eq!(chart.slices[0].severity, Severity::MildAnemia);
    assert_eq!(chart.slices[0].percentage_label(), "100.0%");
}

#[test]
fn test_tally_sums_to_record_count() {
    let dir = TempDir::new().unwrap();
    let mut store = CsvStore::new(dir.path().join("ledger.csv"));
    let forms = [
        intake("a", Category::Male, 14.2),
        intake("b", Category::Male, 12.1),
        intake("c", Category::Female, 7.5),
        intake("d", Category::Child, 9.0),
        intake("e", Category::PregnantWoman, 10.4),
        intake("f", Category::Female, 12.5),
    ];
    for form in forms {
        let (record, _) = form.diagnose().unwrap();
        store.append(&record).unwrap();
    }

    let history = store.read_all().unwrap();
    let tally = summarize(history.records()).unwrap();
    assert_eq!(tally.total(), history.len());
    assert_eq!(tally.count(Severity::Normal), 2);
    assert_eq!(tally.count(Severity::MildAnemia), 2);
    assert_eq!(tally.count(Severity::ModerateAnemia), 1);
    assert_eq!(tally.count(Severity::SevereAnemia), 1);
}

#[test]
fn test_missing_ledger_has_nothing_to_chart() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("absent.csv"));

    let history = store.read_all().unwrap();
    assert!(history.is_no_data());

    let err = summarize(history.records()).unwrap_err();
    assert!(err.is_empty());
}

#[test]
fn test_write_svg_creates_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts").join("distribution.svg");

    let tally: SeverityTally = [Severity::Normal, Severity::ModerateAnemia].into_iter().collect();
    let chart = render(&tally).unwrap();
    svg::write_svg(&chart, &out).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("<svg"));
}

#[test]
fn test_empty_report_error_message() {
    assert_eq!(ReportError::Empty.to_string(), "No diagnosis records to display");
}
