use chrono::NaiveDate;

use quickspend::services::EntryService;
use quickspend::session::{Session, WizardStep};
use quickspend::sheets::MemorySheet;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

fn session_at_details(amount: f64, what: &str, where_at: &str) -> Session {
    let mut session = Session::new(today());
    session.save_amount(amount);
    session.save_what(what.into());
    session.save_where(where_at.into());
    session
}

#[test]
fn append_index_is_count_of_existing_rows_plus_one() {
    let sheet = MemorySheet::new();
    // Header plus nine data rows: ten non-empty cells in column A.
    for i in 0..9 {
        sheet.push_row([
            "item",
            "place",
            "General Spending",
            "Misc",
            "Credit Card",
            "1",
            &format!("01/{:02}/24", i + 1),
        ]);
    }

    let mut session = session_at_details(5.0, "Coffee", "Cafe X");
    let receipt = EntryService::finalize(
        &mut session,
        &sheet,
        "General Spending",
        "Food",
        "Credit Card",
        today(),
    )
    .expect("finalize succeeds");
    assert_eq!(receipt.row_index, 11);
}

#[test]
fn end_to_end_submission_appends_then_sorts_by_date() {
    let sheet = MemorySheet::new();
    sheet.push_row([
        "Flights",
        "Airline",
        "Travel",
        "Holiday",
        "Credit Card",
        "250",
        "07/04/24",
    ]);

    let mut session = session_at_details(45.0, "Groceries", "Market");
    let receipt = EntryService::finalize(
        &mut session,
        &sheet,
        "General Spending",
        "Food",
        "Credit Card",
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
    )
    .expect("finalize succeeds");

    // Written at the first empty row (header + 1 data row = 2, so 3)...
    assert_eq!(receipt.row_index, 3);
    assert_eq!(receipt.amount, 45.0);

    // ...then the re-sort moves it ahead of the July row.
    let rows = sheet.rows();
    assert_eq!(
        rows[1],
        vec![
            "Groceries".to_string(),
            "Market".to_string(),
            "General Spending".to_string(),
            "Food".to_string(),
            "Credit Card".to_string(),
            "45".to_string(),
            "06/01/24".to_string(),
        ]
    );
    assert_eq!(rows[2][0], "Flights");
}

#[test]
fn successful_submission_resets_the_session() {
    let sheet = MemorySheet::new();
    let mut session = session_at_details(5.0, "Coffee", "Cafe X");
    EntryService::finalize(
        &mut session,
        &sheet,
        "General Spending",
        "Food",
        "Credit Card",
        today(),
    )
    .expect("finalize succeeds");

    assert_eq!(session.step(), WizardStep::Amount);
    assert_eq!(session.draft().amount, 0.0);
    assert_eq!(session.draft().what, "");
}

#[test]
fn quick_save_submits_with_the_draft_defaults() {
    let sheet = MemorySheet::new();
    let mut session = Session::new(today());
    session.save_amount(3.25);
    session.save_what("Parking".into());

    let receipt = EntryService::quick_save(&mut session, &sheet, "Garage".into())
        .expect("quick save succeeds");
    assert_eq!(receipt.row_index, 2);

    let rows = sheet.rows();
    assert_eq!(
        rows[1],
        vec![
            "Parking".to_string(),
            "Garage".to_string(),
            "General Spending".to_string(),
            String::new(),
            "Credit Card".to_string(),
            "3.25".to_string(),
            "06/01/24".to_string(),
        ]
    );
    assert_eq!(session.step(), WizardStep::Amount);
}

#[test]
fn failed_submission_keeps_the_draft_and_step() {
    let sheet = MemorySheet::new();
    sheet.set_offline(true);

    let mut session = session_at_details(45.0, "Groceries", "Market");
    let result = EntryService::finalize(
        &mut session,
        &sheet,
        "General Spending",
        "Food",
        "Credit Card",
        today(),
    );

    assert!(result.is_err());
    assert_eq!(session.step(), WizardStep::Details);
    assert_eq!(session.draft().amount, 45.0);
    assert_eq!(session.draft().what, "Groceries");
    assert_eq!(session.draft().where_at, "Market");
}
