//! Unified Query Builder (QB) system for dynamoqb.
//!
//! This module provides the two builder variants over one rendering core:
//!
//! - **Shared condition layer**: ordered `{column, operator, value}` triples
//!   rendered as `#col op :col` fragments joined with `" AND "`, accumulating
//!   placeholder entries into shared attribute maps
//! - **Deterministic placeholders**: `#column` / `:column`, derived from the
//!   column name alone — duplicate columns overwrite, last write wins
//! - **Consistent API**: the same fluent filter methods on both variants
//!
//! # Usage
//!
//! ```
//! use dynamoqb::qb;
//!
//! // Query: key conditions, filters, index, limit
//! let params = qb::query("Users")
//!     .key_eq("id", "123")
//!     .eq("status", "active")
//!     .limit(10)
//!     .to_params();
//!
//! // Scan: filters only
//! let params = qb::scan()
//!     .gt("total", "100")
//!     .to_params();
//! ```

mod expr;
mod query;
mod scan;

pub use expr::ConditionGroup;
pub use query::QueryQb;
pub use scan::ScanQb;

/// Create a query builder for the given table.
///
/// # Example
/// ```
/// let qb = dynamoqb::qb::query("Users").key_eq("id", "123");
/// ```
pub fn query(table: &str) -> QueryQb {
    QueryQb::new(table)
}

/// Create a scan builder (filter-only).
///
/// # Example
/// ```
/// let qb = dynamoqb::qb::scan().eq("status", "active");
/// ```
pub fn scan() -> ScanQb {
    ScanQb::new()
}

#[cfg(test)]
mod tests;
