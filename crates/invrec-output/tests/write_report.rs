//! Integration tests for report writing.

use std::fs;

use invrec_model::{OutputRole, ReconcileError, ReconcileReport, Table};
use invrec_output::{OutputLayout, write_report};

fn report() -> ReconcileReport {
    ReconcileReport {
        new_products_one_size: Table::new(["SKU", "Size", "Qty", "Unit Cost"])
            .with_rows([["C3", "OS", "4", "3"]]),
        new_products_multi_size: Table::new(["SKU", "Size", "Qty", "Unit Cost"])
            .with_rows([["D4", "S,M", "1,2", "9"]]),
        known_skus: Table::new(["SKU"]).with_rows([["A1"], ["C3"], ["D4"]]),
        zero_inventory: Table::new(["SKU"]).with_rows([["Z9"]]),
        qty_mismatches: Table::new(["SKU", "Size", "Qty_shopify", "Qty_supplier"])
            .with_rows([["A1", "OS", "8", "10"], ["B2", "M", "5", "2"]]),
        cost_mismatches: Table::new(["SKU", "Unit Cost_shopify", "Unit Cost_supplier"]),
        skipped_rows: Vec::new(),
    }
}

#[test]
fn writes_all_six_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout = OutputLayout::new(dir.path());
    let written = write_report(&report(), &layout).expect("write report");

    assert_eq!(written.len(), 6);
    for file in &written {
        assert!(file.path.is_file(), "{} missing", file.path.display());
        assert_eq!(file.path, layout.path(file.role));
    }
    let counts: Vec<(OutputRole, usize)> = written.iter().map(|f| (f.role, f.rows)).collect();
    assert_eq!(counts, report().row_counts());

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn quantity_report_layout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout = OutputLayout::new(dir.path());
    write_report(&report(), &layout).expect("write report");

    let qty = fs::read_to_string(layout.path(OutputRole::QtyMismatches)).expect("read qty");
    insta::assert_snapshot!(qty, @r"
    SKU,Size,Qty_shopify,Qty_supplier
    A1,OS,8,10
    B2,M,5,2
    ");

    let multi =
        fs::read_to_string(layout.path(OutputRole::NewProductsMultiSize)).expect("read multi");
    insta::assert_snapshot!(multi, @r#"
    SKU,Size,Qty,Unit Cost
    D4,"S,M","1,2",9
    "#);

    let costs = fs::read_to_string(layout.path(OutputRole::CostMismatches)).expect("read costs");
    assert_eq!(costs, "SKU,Unit Cost_shopify,Unit Cost_supplier\n");
}

#[test]
fn known_sku_file_is_replaced() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout = OutputLayout::new(dir.path());
    fs::write(layout.path(OutputRole::KnownSkus), "SKU\nA1\n").expect("seed known skus");

    write_report(&report(), &layout).expect("write report");
    let known = fs::read_to_string(layout.path(OutputRole::KnownSkus)).expect("read known");
    assert_eq!(known, "SKU\nA1\nC3\nD4\n");
}

#[test]
fn blocked_destination_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout = OutputLayout::new(dir.path());
    fs::create_dir(layout.path(OutputRole::CostMismatches)).expect("block destination");

    let err = write_report(&report(), &layout).expect_err("blocked");
    assert!(matches!(err, ReconcileError::Output { .. }));
    for role in OutputRole::ALL {
        if role != OutputRole::CostMismatches {
            assert!(!layout.path(role).exists(), "{role} should not be written");
        }
    }
}

#[test]
fn failed_staging_cleans_up_temp_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout = OutputLayout::new(dir.path());
    let mut report = report();
    // The last table staged carries a row wider than its header.
    report
        .cost_mismatches
        .rows
        .push(vec!["A1".into(), "5".into(), "6".into(), "extra".into()]);

    let err = write_report(&report, &layout).expect_err("ragged row");
    match err {
        ReconcileError::Output { path, .. } => {
            assert_eq!(path, layout.path(OutputRole::CostMismatches));
        }
        other => panic!("unexpected error: {other}"),
    }
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(leftovers.is_empty(), "left behind: {leftovers:?}");
}

#[test]
fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let layout = OutputLayout::new(dir.path().join("reports").join("today"));
    write_report(&report(), &layout).expect("write report");
    assert!(layout.path(OutputRole::ZeroInventory).is_file());
}
