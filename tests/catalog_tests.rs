//! Product catalog command tests

mod common;

use common::{add_test_product, setup_data_dir, sst, write_document};
use predicates::prelude::*;

// ============================================================================
// Product Add Tests
// ============================================================================

#[test]
fn test_add_first_product_gets_index_one() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args(["product", "add", "--name", "Widget", "--category", "Tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added product"))
        .stdout(predicate::str::contains("(index 1)"));
}

#[test]
fn test_add_assigns_sequential_indexes() {
    let tmp = setup_data_dir();

    assert_eq!(add_test_product(&tmp, "Widget", "Tools"), 1);
    assert_eq!(add_test_product(&tmp, "Gadget", "Tools"), 2);
    assert_eq!(add_test_product(&tmp, "Kettle", "Kitchen"), 3);
}

#[test]
fn test_add_index_is_max_plus_one() {
    let tmp = setup_data_dir();
    write_document(
        &tmp,
        "final_sku.json",
        r#"{
            "metadata": { "total_products": 2 },
            "products": [
                { "product_index": 3, "product_name": "A", "category_name": "X" },
                { "product_index": 7, "product_name": "B", "category_name": "X" }
            ]
        }"#,
    );

    assert_eq!(add_test_product(&tmp, "C", "X"), 8);
}

#[test]
fn test_add_requires_name() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args(["product", "add", "--category", "Tools"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product name is required"));
}

#[test]
fn test_add_requires_category() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args(["product", "add", "--name", "Widget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category is required"));
}

#[test]
fn test_add_rejection_writes_nothing() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args(["product", "add", "--category", "Tools"])
        .assert()
        .failure();

    sst()
        .current_dir(tmp.path())
        .args(["product", "list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0"));

    sst()
        .current_dir(tmp.path())
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No log entries found"));
}

#[test]
fn test_add_rejects_negative_price() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args([
            "product",
            "add",
            "--name",
            "Widget",
            "--category",
            "Tools",
            "--price=-5.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Price must be non-negative"));

    sst()
        .current_dir(tmp.path())
        .args(["product", "list", "--count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_add_accepts_zero_price() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args([
            "product",
            "add",
            "--name",
            "Freebie",
            "--category",
            "Promo",
            "--price",
            "0",
        ])
        .assert()
        .success();
}

#[test]
fn test_add_with_optional_fields() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args([
            "product",
            "add",
            "--name",
            "Kettle",
            "--category",
            "Kitchen",
            "--price",
            "23.99",
            "--weight",
            "1.2kg",
            "--description",
            "Stainless electric kettle",
        ])
        .assert()
        .success();

    sst()
        .current_dir(tmp.path())
        .args(["product", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kettle"))
        .stdout(predicate::str::contains("23.99"))
        .stdout(predicate::str::contains("1.2kg"))
        .stdout(predicate::str::contains("Stainless electric kettle"));
}

// ============================================================================
// Product List Tests
// ============================================================================

#[test]
fn test_list_empty_catalog() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"));
}

#[test]
fn test_list_shows_products() {
    let tmp = setup_data_dir();
    add_test_product(&tmp, "Widget", "Tools");
    add_test_product(&tmp, "Kettle", "Kitchen");

    sst()
        .current_dir(tmp.path())
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget"))
        .stdout(predicate::str::contains("Kettle"))
        .stdout(predicate::str::contains("2 product(s)"));
}

#[test]
fn test_list_filters_by_category_and_search() {
    let tmp = setup_data_dir();
    add_test_product(&tmp, "Smartphone X", "Electronics");
    add_test_product(&tmp, "Desk Phone", "Electronics");
    add_test_product(&tmp, "Phone Case", "Accessories");
    add_test_product(&tmp, "Toaster", "Electronics");

    sst()
        .current_dir(tmp.path())
        .args([
            "product",
            "list",
            "--category",
            "Electronics",
            "--search",
            "PHONE",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smartphone X"))
        .stdout(predicate::str::contains("Desk Phone"))
        .stdout(predicate::str::contains("Phone Case").not())
        .stdout(predicate::str::contains("Toaster").not());
}

#[test]
fn test_list_count_only() {
    let tmp = setup_data_dir();
    add_test_product(&tmp, "Widget", "Tools");
    add_test_product(&tmp, "Gadget", "Tools");

    sst()
        .current_dir(tmp.path())
        .args(["product", "list", "--count"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_list_limit() {
    let tmp = setup_data_dir();
    add_test_product(&tmp, "Widget", "Tools");
    add_test_product(&tmp, "Gadget", "Tools");
    add_test_product(&tmp, "Kettle", "Kitchen");

    sst()
        .current_dir(tmp.path())
        .args(["product", "list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget"))
        .stdout(predicate::str::contains("Kettle").not());
}

#[test]
fn test_list_json_format() {
    let tmp = setup_data_dir();
    add_test_product(&tmp, "Widget", "Tools");

    sst()
        .current_dir(tmp.path())
        .args(["product", "list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"product_name\": \"Widget\""));
}

#[test]
fn test_list_csv_format() {
    let tmp = setup_data_dir();
    add_test_product(&tmp, "Widget", "Tools");

    sst()
        .current_dir(tmp.path())
        .args(["product", "list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index,name,category,price,suppliers"))
        .stdout(predicate::str::contains("1,Widget,Tools"));
}

// ============================================================================
// Product Show Tests
// ============================================================================

#[test]
fn test_show_unknown_index_fails() {
    let tmp = setup_data_dir();

    sst()
        .current_dir(tmp.path())
        .args(["product", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No product found with index 99"));
}

#[test]
fn test_show_lists_suppliers() {
    let tmp = setup_data_dir();
    let index = add_test_product(&tmp, "Widget", "Tools");
    common::add_test_quote(&tmp, index, "Acme Corp");

    sst()
        .current_dir(tmp.path())
        .args(["product", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Corp"))
        .stdout(predicate::str::contains("10+"));
}

// ============================================================================
// Categories Tests
// ============================================================================

#[test]
fn test_categories_with_counts() {
    let tmp = setup_data_dir();
    add_test_product(&tmp, "Widget", "Tools");
    add_test_product(&tmp, "Gadget", "Tools");
    add_test_product(&tmp, "Kettle", "Kitchen");

    sst()
        .current_dir(tmp.path())
        .args(["product", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tools"))
        .stdout(predicate::str::contains("Kitchen"))
        .stdout(predicate::str::contains("2 categories"));
}

#[test]
fn test_categories_count_the_filtered_set() {
    let tmp = setup_data_dir();
    add_test_product(&tmp, "Paring Knife", "Kitchen");
    add_test_product(&tmp, "Bread Knife", "Kitchen");
    add_test_product(&tmp, "Utility Knife", "Tools");
    add_test_product(&tmp, "Kettle", "Kitchen");

    sst()
        .current_dir(tmp.path())
        .args(["product", "categories", "--search", "knife", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitchen,2"))
        .stdout(predicate::str::contains("Tools,1"))
        .stdout(predicate::str::contains("Kitchen,3").not());
}

// ============================================================================
// Degradation Tests
// ============================================================================

#[test]
fn test_missing_category_defaults_to_uncategorized() {
    let tmp = setup_data_dir();
    write_document(
        &tmp,
        "final_sku.json",
        r#"{ "products": [ { "product_index": 1, "product_name": "Bare" } ] }"#,
    );

    sst()
        .current_dir(tmp.path())
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uncategorized"));
}

#[test]
fn test_corrupt_document_degrades_to_empty_with_warning() {
    let tmp = setup_data_dir();
    write_document(&tmp, "final_sku.json", "{{ not json");

    sst()
        .current_dir(tmp.path())
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"))
        .stderr(predicate::str::contains("Warning:"));
}
