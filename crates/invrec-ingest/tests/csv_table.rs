//! Tests for CSV input loading.

use std::fs;
use std::path::Path;

use invrec_ingest::{InputLayout, list_csv_files, load_inputs, read_csv_table};
use invrec_model::{InputRole, ReconcileError};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

#[test]
fn reads_quoted_multi_value_cells_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        "supplier.csv",
        "SKU,Size,Qty,Unit Cost,Title\nA1,\"S,M,L\",\"1,2,3\",5.00,Tee\nB2,OS,05,7,\n",
    );
    let table = read_csv_table(&dir.path().join("supplier.csv"), InputRole::SupplierCatalog)
        .expect("read csv");
    assert_eq!(table.headers, vec!["SKU", "Size", "Qty", "Unit Cost", "Title"]);
    assert_eq!(table.rows[0], vec!["A1", "S,M,L", "1,2,3", "5.00", "Tee"]);
    assert_eq!(table.rows[1], vec!["B2", "OS", "05", "7", ""]);
}

#[test]
fn short_rows_are_padded() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "skus.csv", "SKU,Note\nA1\nB2,kept\n");
    let table =
        read_csv_table(&dir.path().join("skus.csv"), InputRole::KnownSkuSet).expect("read csv");
    assert_eq!(table.rows, vec![vec!["A1", ""], vec!["B2", "kept"]]);
}

#[test]
fn long_rows_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "to_add.csv", "SKU\nA1,extra\n");
    let err = read_csv_table(&dir.path().join("to_add.csv"), InputRole::OnboardingQueue)
        .expect_err("too many fields");
    assert!(matches!(
        err,
        ReconcileError::Parse {
            role: InputRole::OnboardingQueue,
            ..
        }
    ));
    assert!(err.to_string().contains("row 1 has 2 fields"));
}

#[test]
fn missing_file_is_missing_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_csv_table(&dir.path().join("absent.csv"), InputRole::StorefrontCatalog)
        .expect_err("missing file");
    assert!(matches!(
        err,
        ReconcileError::MissingInput {
            role: InputRole::StorefrontCatalog,
            ..
        }
    ));
}

#[test]
fn layout_resolves_fixed_and_clean_file_names() {
    let layout = InputLayout::new("/data/run", "clean_feed.csv");
    assert_eq!(
        layout.path(InputRole::SupplierCatalog),
        Path::new("/data/run/clean_feed.csv")
    );
    assert_eq!(
        layout.path(InputRole::KnownSkuSet),
        Path::new("/data/run/all_skus.csv")
    );
    assert_eq!(
        layout.path(InputRole::StorefrontCatalog),
        Path::new("/data/run/shopify_data.csv")
    );
    assert_eq!(
        layout.path(InputRole::OnboardingQueue),
        Path::new("/data/run/to_add.csv")
    );
}

#[test]
fn load_inputs_reads_all_four_tables() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "clean.csv", "SKU,Size,Qty,Unit Cost\nA1,OS,10,5\n");
    write(dir.path(), "all_skus.csv", "SKU\nA1\nZ9\n");
    write(
        dir.path(),
        "shopify_data.csv",
        "SKU,Sizes,Quantities,Unit Cost\nA1,OS,8,5\n",
    );
    write(dir.path(), "to_add.csv", "SKU\n");

    let inputs = load_inputs(&InputLayout::new(dir.path(), "clean.csv")).expect("load inputs");
    assert_eq!(inputs.supplier.len(), 1);
    assert_eq!(inputs.known_skus.len(), 2);
    assert_eq!(inputs.storefront.headers[1], "Sizes");
    assert!(inputs.onboarding.is_empty());
    assert_eq!(inputs.onboarding.headers, vec!["SKU"]);
}

#[test]
fn load_inputs_fails_on_first_missing_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "clean.csv", "SKU,Size,Qty,Unit Cost\n");
    write(dir.path(), "all_skus.csv", "SKU\n");
    write(dir.path(), "to_add.csv", "SKU\n");

    let err = load_inputs(&InputLayout::new(dir.path(), "clean.csv")).expect_err("missing");
    match err {
        ReconcileError::MissingInput { role, path, .. } => {
            assert_eq!(role, InputRole::StorefrontCatalog);
            assert!(path.ends_with("shopify_data.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lists_csv_files_sorted() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "b.csv", "SKU\n");
    write(dir.path(), "A.CSV", "SKU\n");
    write(dir.path(), "notes.txt", "");
    fs::create_dir(dir.path().join("nested.csv")).expect("create dir");

    let files = list_csv_files(dir.path()).expect("list csv");
    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .collect();
    assert_eq!(names, vec!["A.CSV", "b.csv"]);
}
