use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use engine::{Category, EngineError, Ledger, Money, NewExpense, Store};

static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);

fn data_file() -> std::path::PathBuf {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_data");
    std::fs::create_dir_all(&root).unwrap();
    let n = NEXT_FILE.fetch_add(1, Ordering::Relaxed);
    root.join(format!("ledger_{}_{n}.csv", std::process::id()))
}

fn submission(description: &str, paise: i64) -> NewExpense {
    NewExpense {
        date: NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
        category: Category::Food,
        description: description.to_string(),
        amount: Money::new(paise),
    }
}

#[test]
fn add_appends_in_insertion_order() {
    let mut ledger = Ledger::in_memory();

    let first = ledger.add(submission("chai", 20_00)).unwrap();
    let second = ledger.add(submission("groceries", 450_00)).unwrap();

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(ledger.expenses()[0].description, "chai");
    assert_eq!(ledger.expenses()[1].description, "groceries");
}

#[test]
fn add_then_remove_restores_prior_total() {
    let mut ledger = Ledger::in_memory();
    ledger.add(submission("chai", 20_00)).unwrap();
    let before = ledger.summary().total;

    let index = ledger.add(submission("movie", 300_00)).unwrap();
    assert_eq!(ledger.summary().total, Money::new(320_00));

    let removed = ledger.remove(index).unwrap();
    assert_eq!(removed.description, "movie");
    assert_eq!(ledger.summary().total, before);
}

#[test]
fn remove_shifts_later_indices_down() {
    let mut ledger = Ledger::in_memory();
    ledger.add(submission("a", 100)).unwrap();
    ledger.add(submission("b", 200)).unwrap();
    ledger.add(submission("c", 300)).unwrap();

    ledger.remove(1).unwrap();

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.expenses()[1].description, "c");
}

#[test]
fn remove_out_of_range_is_an_error() {
    let mut ledger = Ledger::in_memory();
    ledger.add(submission("chai", 20_00)).unwrap();

    let err = ledger.remove(5).unwrap_err();
    assert_eq!(err, EngineError::IndexOutOfRange { index: 5, len: 1 });
    assert_eq!(ledger.len(), 1);
}

#[test]
fn validation_rejects_bad_submissions_without_mutating() {
    let mut ledger = Ledger::in_memory();

    assert!(matches!(
        ledger.add(submission("", 100)),
        Err(EngineError::InvalidDescription(_))
    ));
    assert!(matches!(
        ledger.add(submission("chai", 0)),
        Err(EngineError::InvalidAmount(_))
    ));
    assert!(ledger.is_empty());
}

#[test]
fn clear_removes_everything() {
    let mut ledger = Ledger::in_memory();
    ledger.add(submission("a", 100)).unwrap();
    ledger.add(submission("b", 200)).unwrap();

    assert_eq!(ledger.clear().unwrap(), 2);
    assert!(ledger.is_empty());
    assert_eq!(ledger.summary().total, Money::ZERO);
}

#[test]
fn csv_ledger_persists_and_reloads() {
    let path = data_file();

    {
        let mut ledger = Ledger::open(Store::csv(&path)).unwrap();
        ledger.add(submission("chai", 20_00)).unwrap();
        let mut dinner = submission("dinner", 450_50);
        dinner.category = Category::Entertainment;
        ledger.add(dinner).unwrap();
    }

    let reloaded = Ledger::open(Store::csv(&path)).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.expenses()[0].description, "chai");
    assert_eq!(reloaded.expenses()[1].amount, Money::new(450_50));
    assert_eq!(reloaded.expenses()[1].category, Category::Entertainment);

    std::fs::remove_file(&path).ok();
}

#[test]
fn csv_ledger_rewrites_file_on_delete() {
    let path = data_file();

    let mut ledger = Ledger::open(Store::csv(&path)).unwrap();
    ledger.add(submission("a", 100)).unwrap();
    ledger.add(submission("b", 200)).unwrap();
    ledger.remove(0).unwrap();

    let reloaded = Ledger::open(Store::csv(&path)).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.expenses()[0].description, "b");

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_opens_empty() {
    let path = data_file();
    let ledger = Ledger::open(Store::csv(&path)).unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn load_accepts_any_category_casing() {
    let path = data_file();
    std::fs::write(
        &path,
        "Date,Category,Description,Amount\n\
         2024-05-12,food,chai,20.00\n\
         2024-05-13,ENTERTAINMENT,movie,300.00\n",
    )
    .unwrap();

    let ledger = Ledger::open(Store::csv(&path)).unwrap();
    assert_eq!(ledger.expenses()[0].category, Category::Food);
    assert_eq!(ledger.expenses()[1].category, Category::Entertainment);

    std::fs::remove_file(&path).ok();
}

#[test]
fn load_rejects_category_outside_the_set() {
    let path = data_file();
    std::fs::write(
        &path,
        "Date,Category,Description,Amount\n2024-05-12,Groceries,chai,20.00\n",
    )
    .unwrap();

    let err = Ledger::open(Store::csv(&path)).unwrap_err();
    assert_eq!(err, EngineError::UnknownCategory("Groceries".to_string()));

    std::fs::remove_file(&path).ok();
}

#[test]
fn malformed_row_is_a_load_error() {
    let path = data_file();
    std::fs::write(
        &path,
        "Date,Category,Description,Amount\n2024-05-12,Food,chai,not-a-number\n",
    )
    .unwrap();

    assert!(Ledger::open(Store::csv(&path)).is_err());

    std::fs::remove_file(&path).ok();
}

#[test]
fn export_matches_data_file_format() {
    let mut ledger = Ledger::in_memory();
    ledger.add(submission("chai", 20_00)).unwrap();

    let bytes = ledger.export_csv().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "Date,Category,Description,Amount\n2024-05-12,Food,chai,20.00\n"
    );
}
