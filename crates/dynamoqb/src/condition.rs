//! Query condition types for dynamic queries.
//!
//! This module provides the [`Condition`] primitive: one
//! `{column, operator, value}` triple destined for a key-condition or filter
//! expression.

/// A single comparison appended to a key-condition or filter expression.
///
/// The operator is carried as an opaque string: anything the store accepts in
/// `#column operator :column` position passes through verbatim. No validation
/// happens here; a bad operator surfaces as a rejection at query time.
///
/// # Example
/// ```
/// use dynamoqb::Condition;
///
/// let cond = Condition::eq("status", "active");
/// assert_eq!(cond.fragment(), "#status = :status");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Raw attribute name of the document.
    pub column: String,
    /// Comparison operator, e.g. `=` or `>=`.
    pub operator: String,
    /// Raw comparison value.
    pub value: String,
}

impl Condition {
    /// Create a condition from a raw operator string.
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create an equality condition: column = value
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, "=", value)
    }

    /// Create an inequality condition: column <> value
    pub fn ne(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, "<>", value)
    }

    /// Create a greater-than condition: column > value
    pub fn gt(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, ">", value)
    }

    /// Create a greater-than-or-equal condition: column >= value
    pub fn gte(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, ">=", value)
    }

    /// Create a less-than condition: column < value
    pub fn lt(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, "<", value)
    }

    /// Create a less-than-or-equal condition: column <= value
    pub fn lte(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, "<=", value)
    }

    // ==================== Rendering ====================

    /// Placeholder substituted for the attribute name: `#column`.
    pub fn name_placeholder(&self) -> String {
        format!("#{}", self.column)
    }

    /// Placeholder substituted for the value: `:column`.
    pub fn value_placeholder(&self) -> String {
        format!(":{}", self.column)
    }

    /// Render the expression fragment: `#column operator :column`.
    pub fn fragment(&self) -> String {
        format!("#{} {} :{}", self.column, self.operator, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_simple() {
        let cond = Condition::new("id", "=", "123");
        assert_eq!(cond.fragment(), "#id = :id");
        assert_eq!(cond.name_placeholder(), "#id");
        assert_eq!(cond.value_placeholder(), ":id");
    }

    #[test]
    fn convenience_operators() {
        assert_eq!(Condition::eq("a", "1").operator, "=");
        assert_eq!(Condition::ne("a", "1").operator, "<>");
        assert_eq!(Condition::gt("a", "1").operator, ">");
        assert_eq!(Condition::gte("a", "1").operator, ">=");
        assert_eq!(Condition::lt("a", "1").operator, "<");
        assert_eq!(Condition::lte("a", "1").operator, "<=");
    }

    #[test]
    fn raw_operator_passes_through() {
        // No operator validation: garbage in, garbage out.
        let cond = Condition::new("total", "BANANAS", "100");
        assert_eq!(cond.fragment(), "#total BANANAS :total");
    }

    #[test]
    fn empty_column_accepted() {
        let cond = Condition::eq("", "x");
        assert_eq!(cond.fragment(), "# = :");
    }
}
