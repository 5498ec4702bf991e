use std::io::Cursor;
use std::path::Path;

use corner_grocer::Menu;
use grocer_tally::FrequencyTable;

fn sample_table() -> FrequencyTable {
    FrequencyTable::from_lines(["apple", "banana 2", "Apple", "BANANA", "cherry"])
}

fn run_menu(table: &FrequencyTable, export_path: &Path, input: &str) -> (bool, String) {
    let mut out = Vec::new();
    let exported = Menu::new(table, export_path, Cursor::new(input.as_bytes()), &mut out)
        .run()
        .expect("menu runs");
    (exported, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn looks_up_items_and_exports_on_exit() {
    let table = sample_table();
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("frequency.dat");

    let (exported, output) = run_menu(&table, &export, "1\n  Apple!\n\n6\n");
    assert!(exported);
    assert!(output.contains("Enter item name to search: "));
    assert!(output.contains("  Apple! 2\n"));
    assert!(output.contains("Press ENTER to continue..."));
    assert!(output.contains(&format!("Exiting and writing {}...", export.display())));
    assert!(output.ends_with(&format!("Exported to {}\n", export.display())));

    let reloaded = FrequencyTable::load(&export);
    assert_eq!(reloaded.list_sorted_alpha(), table.list_sorted_alpha());
}

#[test]
fn prints_sorted_listings_and_histograms() {
    let table = sample_table();
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("frequency.dat");

    let (_, output) = run_menu(&table, &export, "2\n\n3\n\n4\n\n5\n\n6\n");
    assert!(output.contains("Item Frequencies (A->Z):\napple 2\nbanana 3\ncherry 1\n"));
    assert!(
        output.contains("Item Frequencies (highest count first):\nbanana 3\napple 2\ncherry 1\n")
    );
    assert!(output.contains("Histogram (A->Z):\napple **\nbanana ***\ncherry *\n"));
    assert!(output.contains("Histogram (highest count first):\nbanana ***\napple **\ncherry *\n"));
}

#[test]
fn rejects_bad_choices_and_keeps_going() {
    let table = sample_table();
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("frequency.dat");

    let (exported, output) = run_menu(&table, &export, "abc\n9\n6\n");
    assert!(exported);
    assert!(output.contains("Invalid input. Please enter a number 1-6."));
    assert!(output.contains("Please choose a number 1-6."));
    assert_eq!(output.matches("Choose an option: ").count(), 3);
}

#[test]
fn end_of_input_still_exports_once() {
    let table = sample_table();
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("frequency.dat");

    let (exported, output) = run_menu(&table, &export, "");
    assert!(exported);
    assert_eq!(output.matches("Exported to").count(), 1);
    assert!(export.exists());
}

#[test]
fn reports_failed_export() {
    let table = sample_table();
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("missing").join("frequency.dat");

    let (exported, output) = run_menu(&table, &export, "6\n");
    assert!(!exported);
    assert!(output.ends_with(&format!("Failed to write {}\n", export.display())));
}

#[test]
fn choice_uses_leading_digits() {
    let table = sample_table();
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("frequency.dat");

    let (exported, output) = run_menu(&table, &export, "2x\n\n6!\n");
    assert!(exported);
    assert!(output.contains("Item Frequencies (A->Z):\napple 2\nbanana 3\ncherry 1\n"));
    assert!(!output.contains("Invalid input"));
}

#[test]
fn nbsp_is_not_a_choice_separator() {
    let table = sample_table();
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("frequency.dat");

    let (_, output) = run_menu(&table, &export, "\u{a0}2\n\x0b6\n");
    assert!(output.contains("Invalid input. Please enter a number 1-6."));
    assert!(output.contains("Exiting and writing"));
}
