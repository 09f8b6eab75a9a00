//! Query parameter builder using the shared condition layer.

use std::collections::HashMap;

use crate::condition::Condition;
use crate::params::QueryParams;
use crate::qb::expr::ConditionGroup;

/// Query builder: key conditions plus filters, with optional secondary index
/// and result-count cap.
///
/// All mutators consume and return the builder, so calls chain. Rendering
/// with [`to_params`](Self::to_params) never fails and never validates —
/// garbage operators produce a syntactically-shaped but semantically broken
/// request the store rejects at query time.
#[derive(Clone, Debug)]
pub struct QueryQb {
    /// Target table name
    table: String,
    /// Secondary index name
    index_name: Option<String>,
    /// Key conditions
    key_group: ConditionGroup,
    /// Filter conditions
    filter_group: ConditionGroup,
    /// Result-count cap
    limit: Option<i64>,
}

impl QueryQb {
    /// Create a new query builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            index_name: None,
            key_group: ConditionGroup::new(),
            filter_group: ConditionGroup::new(),
            limit: None,
        }
    }

    /// Query a secondary index instead of the table's primary key.
    /// Last call wins.
    pub fn index(mut self, index_name: &str) -> Self {
        self.index_name = Some(index_name.to_string());
        self
    }

    /// Cap the number of returned results. Last call wins; the value passes
    /// through unmodified, negative or zero included.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    // ==================== Key conditions ====================

    /// Append a raw key-condition triple: `#column operator :column`.
    pub fn key(
        mut self,
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.key_group.push_raw(column, operator, value);
        self
    }

    /// Add a key condition: column = value
    pub fn key_eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.key_group.eq(column, value);
        self
    }

    /// Add a key condition: column > value
    pub fn key_gt(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.key_group.gt(column, value);
        self
    }

    /// Add a key condition: column >= value
    pub fn key_gte(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.key_group.gte(column, value);
        self
    }

    /// Add a key condition: column < value
    pub fn key_lt(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.key_group.lt(column, value);
        self
    }

    /// Add a key condition: column <= value
    pub fn key_lte(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.key_group.lte(column, value);
        self
    }

    /// Add a key condition if value is Some: column = value
    pub fn key_eq_opt(
        mut self,
        column: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self {
        self.key_group.eq_opt(column, value);
        self
    }

    // ==================== Filter conditions ====================

    /// Append a raw filter-condition triple: `#column operator :column`.
    pub fn filter(
        mut self,
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.filter_group.push_raw(column, operator, value);
        self
    }

    /// Add a filter: column = value
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_group.eq(column, value);
        self
    }

    /// Add a filter: column <> value
    pub fn ne(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_group.ne(column, value);
        self
    }

    /// Add a filter: column > value
    pub fn gt(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_group.gt(column, value);
        self
    }

    /// Add a filter: column >= value
    pub fn gte(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_group.gte(column, value);
        self
    }

    /// Add a filter: column < value
    pub fn lt(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_group.lt(column, value);
        self
    }

    /// Add a filter: column <= value
    pub fn lte(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_group.lte(column, value);
        self
    }

    /// Add a custom [`Condition`] as a filter.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.filter_group.push(condition);
        self
    }

    // ==================== Optional value helpers ====================

    /// Add a filter if value is Some: column = value
    pub fn eq_opt(mut self, column: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.filter_group.eq_opt(column, value);
        self
    }

    /// Add a filter if value is Some: column > value
    pub fn gt_opt(mut self, column: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.filter_group.gt_opt(column, value);
        self
    }

    /// Add a filter if value is Some: column >= value
    pub fn gte_opt(mut self, column: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.filter_group.gte_opt(column, value);
        self
    }

    /// Add a filter if value is Some: column < value
    pub fn lt_opt(mut self, column: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.filter_group.lt_opt(column, value);
        self
    }

    /// Add a filter if value is Some: column <= value
    pub fn lte_opt(mut self, column: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.filter_group.lte_opt(column, value);
        self
    }

    // ==================== Rendering ====================

    /// Render the accumulated state into the request-parameter object.
    ///
    /// Key conditions render first, then filters, each in append order, both
    /// writing into the same attribute maps — a filter on a column also
    /// named by a key condition wins the map entries. Conditions are
    /// append-only, so repeated renders with no intervening calls are equal,
    /// and renders interleaved with new conditions reflect the growth.
    pub fn to_params(&self) -> QueryParams {
        let mut names = HashMap::new();
        let mut values = HashMap::new();

        let key_condition_expression = self.key_group.build(&mut names, &mut values);
        let filter_expression = self.filter_group.build(&mut names, &mut values);

        let params = QueryParams {
            table_name: self.table.clone(),
            key_condition_expression,
            filter_expression,
            expression_attribute_names: names,
            expression_attribute_values: values,
            limit: self.limit,
            index_name: self.index_name.clone(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = %params.table_name,
            key_condition = params.key_condition_expression.as_deref().unwrap_or(""),
            filter = params.filter_expression.as_deref().unwrap_or(""),
            "rendered query parameters"
        );

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_omits_expressions() {
        let params = QueryQb::new("Users").to_params();

        assert_eq!(params.table_name, "Users");
        assert_eq!(params.key_condition_expression, None);
        assert_eq!(params.filter_expression, None);
        assert!(params.expression_attribute_names.is_empty());
        assert!(params.expression_attribute_values.is_empty());
        assert_eq!(params.limit, None);
        assert_eq!(params.index_name, None);
    }

    #[test]
    fn key_and_filter_render_separately() {
        let params = QueryQb::new("Users")
            .key("id", "=", "123")
            .filter("status", "=", "active")
            .to_params();

        assert_eq!(params.key_condition_expression.as_deref(), Some("#id = :id"));
        assert_eq!(
            params.filter_expression.as_deref(),
            Some("#status = :status")
        );
        assert_eq!(params.expression_attribute_names.len(), 2);
        assert_eq!(params.expression_attribute_values.len(), 2);
    }

    #[test]
    fn multiple_keys_join_with_and() {
        let params = QueryQb::new("Orders")
            .key_eq("customer_id", "42")
            .key_gte("created_at", "2024-01-01")
            .to_params();

        assert_eq!(
            params.key_condition_expression.as_deref(),
            Some("#customer_id = :customer_id AND #created_at >= :created_at")
        );
    }

    #[test]
    fn index_and_limit_last_call_wins() {
        let params = QueryQb::new("Users")
            .index("OldIndex")
            .index("StatusIndex")
            .limit(5)
            .limit(10)
            .to_params();

        assert_eq!(params.index_name.as_deref(), Some("StatusIndex"));
        assert_eq!(params.limit, Some(10));
    }

    #[test]
    fn limit_passes_through_unclamped() {
        let params = QueryQb::new("Users").limit(-3).to_params();
        assert_eq!(params.limit, Some(-3));
    }

    #[test]
    fn shared_column_filter_wins_maps() {
        let params = QueryQb::new("Users")
            .key_eq("id", "123")
            .eq("id", "456")
            .to_params();

        // Both expressions reference the column; the maps hold the filter's
        // entries since filters render after key conditions.
        assert_eq!(params.key_condition_expression.as_deref(), Some("#id = :id"));
        assert_eq!(params.filter_expression.as_deref(), Some("#id = :id"));
        assert_eq!(params.expression_attribute_names.len(), 1);
        assert_eq!(
            params.expression_attribute_values.get(":id").map(String::as_str),
            Some("456")
        );
    }

    #[test]
    fn repeated_renders_are_equal() {
        let qb = QueryQb::new("Users").key_eq("id", "123").eq("status", "active");

        assert_eq!(qb.to_params(), qb.to_params());
    }

    #[test]
    fn render_reflects_later_conditions() {
        let qb = QueryQb::new("Users").key_eq("id", "123");
        let first = qb.to_params();
        let second = qb.eq("status", "active").to_params();

        assert_eq!(first.filter_expression, None);
        assert_eq!(
            second.filter_expression.as_deref(),
            Some("#status = :status")
        );
        assert_eq!(second.expression_attribute_names.len(), 2);
    }

    #[test]
    fn optional_conditions() {
        let status: Option<&str> = Some("active");
        let name: Option<&str> = None;

        let params = QueryQb::new("Users")
            .eq_opt("status", status)
            .eq_opt("name", name)
            .to_params();

        assert_eq!(
            params.filter_expression.as_deref(),
            Some("#status = :status")
        );
        assert!(!params.expression_attribute_names.contains_key("#name"));
    }
}
