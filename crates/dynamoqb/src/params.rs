//! Rendered request-parameter objects.
//!
//! Field names and the expression format (`#col op :col` fragments joined by
//! `" AND "`) are a wire contract with the store's Query/Scan APIs and must
//! serialize bit-exact.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::QbResult;

/// Rendered parameters for a Query call.
///
/// `KeyConditionExpression` and `FilterExpression` are present only when at
/// least one condition of that kind was added; `Limit` and `IndexName` only
/// when explicitly set. The attribute maps are always present, possibly
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParams {
    /// Target table name.
    #[serde(rename = "TableName")]
    pub table_name: String,

    /// Key-condition fragments joined by `" AND "`.
    #[serde(
        rename = "KeyConditionExpression",
        skip_serializing_if = "Option::is_none"
    )]
    pub key_condition_expression: Option<String>,

    /// Filter fragments joined by `" AND "`.
    #[serde(rename = "FilterExpression", skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,

    /// `#column` placeholder to raw attribute name.
    #[serde(rename = "ExpressionAttributeNames")]
    pub expression_attribute_names: HashMap<String, String>,

    /// `:column` placeholder to raw value.
    #[serde(rename = "ExpressionAttributeValues")]
    pub expression_attribute_values: HashMap<String, String>,

    /// Result-count cap, passed through verbatim.
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Secondary index to query instead of the table's primary key.
    #[serde(rename = "IndexName", skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
}

impl QueryParams {
    /// Serialize into a [`serde_json::Value`] for document-client bindings.
    pub fn to_json(&self) -> QbResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Rendered parameters for a Scan call (the filter-only variant).
///
/// Unlike [`QueryParams`], `FilterExpression` is always present — an empty
/// string when no conditions were added — and the object carries exactly the
/// three expression fields. Both behaviors are the filter-only builder's
/// historical output shape, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanParams {
    /// Filter fragments joined by `" AND "`; empty when no conditions.
    #[serde(rename = "FilterExpression")]
    pub filter_expression: String,

    /// `#column` placeholder to raw attribute name.
    #[serde(rename = "ExpressionAttributeNames")]
    pub expression_attribute_names: HashMap<String, String>,

    /// `:column` placeholder to raw value.
    #[serde(rename = "ExpressionAttributeValues")]
    pub expression_attribute_values: HashMap<String, String>,
}

impl ScanParams {
    /// Serialize into a [`serde_json::Value`] for document-client bindings.
    pub fn to_json(&self) -> QbResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
