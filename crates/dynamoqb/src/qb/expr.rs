//! Shared rendering core for key-condition and filter expressions.
//!
//! Both builder variants hold one [`ConditionGroup`] per expression kind.
//! Rendering walks the group in append order, emits `#col op :col` fragments,
//! and writes the placeholder entries into the caller's shared attribute
//! maps. A later entry at the same placeholder key silently overwrites an
//! earlier one — duplicate columns are the caller's problem, not checked
//! here.

use std::collections::HashMap;

use crate::condition::Condition;

/// An ordered list of conditions rendered into one `" AND "`-joined
/// expression string.
#[derive(Clone, Debug, Default)]
pub struct ConditionGroup {
    conditions: Vec<Condition>,
}

impl ConditionGroup {
    /// Create a new empty condition group.
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Append a condition. Order of calls determines left-to-right order in
    /// the joined expression.
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Append a raw `{column, operator, value}` triple.
    pub fn push_raw(
        &mut self,
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.conditions.push(Condition::new(column, operator, value));
    }

    /// Add a condition: column = value
    pub fn eq(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.conditions.push(Condition::eq(column, value));
    }

    /// Add a condition: column <> value
    pub fn ne(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.conditions.push(Condition::ne(column, value));
    }

    /// Add a condition: column > value
    pub fn gt(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.conditions.push(Condition::gt(column, value));
    }

    /// Add a condition: column >= value
    pub fn gte(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.conditions.push(Condition::gte(column, value));
    }

    /// Add a condition: column < value
    pub fn lt(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.conditions.push(Condition::lt(column, value));
    }

    /// Add a condition: column <= value
    pub fn lte(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.conditions.push(Condition::lte(column, value));
    }

    // ==================== Optional value methods ====================

    /// Add a condition if value is Some: column = value
    pub fn eq_opt(&mut self, column: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(v) = value {
            self.eq(column, v);
        }
    }

    /// Add a condition if value is Some: column > value
    pub fn gt_opt(&mut self, column: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(v) = value {
            self.gt(column, v);
        }
    }

    /// Add a condition if value is Some: column >= value
    pub fn gte_opt(&mut self, column: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(v) = value {
            self.gte(column, v);
        }
    }

    /// Add a condition if value is Some: column < value
    pub fn lt_opt(&mut self, column: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(v) = value {
            self.lt(column, v);
        }
    }

    /// Add a condition if value is Some: column <= value
    pub fn lte_opt(&mut self, column: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(v) = value {
            self.lte(column, v);
        }
    }

    /// Get all conditions in append order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Render the joined expression, accumulating placeholder entries into
    /// the shared attribute maps.
    ///
    /// Returns `None` when the group is empty; the maps are untouched in
    /// that case.
    pub fn build(
        &self,
        names: &mut HashMap<String, String>,
        values: &mut HashMap<String, String>,
    ) -> Option<String> {
        if self.conditions.is_empty() {
            return None;
        }

        let fragments: Vec<String> = self
            .conditions
            .iter()
            .map(|cond| {
                names.insert(cond.name_placeholder(), cond.column.clone());
                values.insert(cond.value_placeholder(), cond.value.clone());
                cond.fragment()
            })
            .collect();

        Some(fragments.join(" AND "))
    }
}
