//! Scan parameter builder — the filter-only variant.

use std::collections::HashMap;

use crate::condition::Condition;
use crate::params::ScanParams;
use crate::qb::expr::ConditionGroup;

/// Scan builder: filter conditions only, no key conditions, index, or limit.
///
/// Its rendered object always carries a `FilterExpression` — an empty string
/// when no conditions were added — and exactly the three expression fields,
/// the filter-only builder's historical output shape.
#[derive(Clone, Debug, Default)]
pub struct ScanQb {
    /// Filter conditions
    filter_group: ConditionGroup,
}

impl ScanQb {
    /// Create a new scan builder.
    pub fn new() -> Self {
        Self {
            filter_group: ConditionGroup::new(),
        }
    }

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

    /// Render the accumulated state into the request-parameter object.
    ///
    /// `filter_expression` is the empty string when no conditions were
    /// added, never omitted.
    pub fn to_params(&self) -> ScanParams {
        let mut names = HashMap::new();
        let mut values = HashMap::new();

        let filter_expression = self
            .filter_group
            .build(&mut names, &mut values)
            .unwrap_or_default();

        let params = ScanParams {
            filter_expression,
            expression_attribute_names: names,
            expression_attribute_values: values,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(filter = %params.filter_expression, "rendered scan parameters");

        params
    }
}
