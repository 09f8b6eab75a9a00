//! Integration tests for the qb module.

use crate::qb::{query, scan};
use crate::Condition;

#[test]
fn test_query_basic() {
    let params = query("Users").to_params();
    assert_eq!(params.table_name, "Users");
    assert_eq!(params.key_condition_expression, None);
    assert_eq!(params.filter_expression, None);
}

#[test]
fn test_query_full_chain() {
    let params = query("Users")
        .key("id", "=", "123")
        .filter("status", "=", "active")
        .limit(10)
        .to_params();

    assert_eq!(params.table_name, "Users");
    assert_eq!(params.key_condition_expression.as_deref(), Some("#id = :id"));
    assert_eq!(
        params.filter_expression.as_deref(),
        Some("#status = :status")
    );
    assert_eq!(params.limit, Some(10));
    assert_eq!(params.index_name, None);
}

#[test]
fn test_query_on_secondary_index() {
    let params = query("Users")
        .index("EmailIndex")
        .key_eq("email", "alice@example.com")
        .to_params();

    assert_eq!(params.index_name.as_deref(), Some("EmailIndex"));
    assert_eq!(
        params.key_condition_expression.as_deref(),
        Some("#email = :email")
    );
}

#[test]
fn test_distinct_columns_fill_both_maps() {
    let params = query("Orders")
        .eq("status", "shipped")
        .gt("total", "100")
        .lte("weight", "5")
        .to_params();

    assert_eq!(
        params.filter_expression.as_deref(),
        Some("#status = :status AND #total > :total AND #weight <= :weight")
    );
    assert_eq!(params.expression_attribute_names.len(), 3);
    assert_eq!(params.expression_attribute_values.len(), 3);
    assert_eq!(
        params.expression_attribute_names.get("#weight").map(String::as_str),
        Some("weight")
    );
    assert_eq!(
        params.expression_attribute_values.get(":weight").map(String::as_str),
        Some("5")
    );
}

#[test]
fn test_custom_condition() {
    let params = scan()
        .condition(Condition::new("size", "begins_with", "XL"))
        .to_params();

    // Operator strings pass through unvalidated.
    assert_eq!(params.filter_expression, "#size begins_with :size");
}

#[test]
fn test_scan_always_has_filter_expression() {
    let params = scan().to_params();
    assert_eq!(params.filter_expression, "");

    let params = scan().eq("status", "active").to_params();
    assert_eq!(params.filter_expression, "#status = :status");
}

#[test]
fn test_builders_are_cloneable() {
    let base = query("Users").key_eq("id", "123");
    let narrowed = base.clone().eq("status", "active");

    assert_eq!(base.to_params().filter_expression, None);
    assert_eq!(
        narrowed.to_params().filter_expression.as_deref(),
        Some("#status = :status")
    );
}
