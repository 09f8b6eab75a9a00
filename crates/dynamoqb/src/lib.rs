//! # dynamoqb
//!
//! A fluent Query/Scan parameter builder for DynamoDB document clients.
//!
//! ## Features
//!
//! - **Expression rendering**: `{column, operator, value}` triples become
//!   `#col op :col` fragments joined with `" AND "`, plus the
//!   `ExpressionAttributeNames` / `ExpressionAttributeValues` placeholder maps
//! - **Two variants, one core**: [`QueryQb`] (key conditions, index, limit)
//!   and [`ScanQb`] (filter-only) share the same condition layer
//! - **Wire-exact output**: [`QueryParams`] / [`ScanParams`] serialize to the
//!   exact field names the store's Query/Scan APIs expect
//! - **No validation by design**: operators and values are opaque strings;
//!   the store rejects malformed expressions at query time
//!
//! ## Query Builder (qb)
//!
//! ```
//! use dynamoqb::qb;
//!
//! // Query
//! let params = qb::query("Users")
//!     .key_eq("id", "123")
//!     .eq("status", "active")
//!     .limit(10)
//!     .to_params();
//! assert_eq!(params.key_condition_expression.as_deref(), Some("#id = :id"));
//!
//! // Scan
//! let params = qb::scan()
//!     .gt("total", "100")
//!     .to_params();
//! assert_eq!(params.filter_expression, "#total > :total");
//! ```
//!
//! The rendered objects convert to JSON for handing to a document client:
//!
//! ```
//! # use dynamoqb::qb;
//! let json = qb::query("Users").key_eq("id", "123").to_params().to_json()?;
//! # Ok::<(), dynamoqb::QbError>(())
//! ```

pub mod condition;
pub mod error;
pub mod params;
pub mod qb;

pub use condition::Condition;
pub use error::{QbError, QbResult};
pub use params::{QueryParams, ScanParams};

// Re-export qb module for easy access
pub use qb::{query, scan, ConditionGroup, QueryQb, ScanQb};
