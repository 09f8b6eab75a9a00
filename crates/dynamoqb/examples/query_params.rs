//! Query parameter example for dynamoqb
//!
//! Run with: cargo run --example query_params -p dynamoqb

use dynamoqb::{qb, QbError};

fn main() -> Result<(), QbError> {
    // ============================================
    // Primary-key query with a filter and a limit
    // ============================================
    println!("=== Query ===");
    let params = qb::query("Users")
        .key_eq("id", "123")
        .eq("status", "active")
        .limit(10)
        .to_params();

    println!("{}", serde_json::to_string_pretty(&params)?);

    // ============================================
    // Secondary-index query with a key range
    // ============================================
    println!("=== Query on index ===");
    let params = qb::query("Orders")
        .index("CustomerIndex")
        .key_eq("customer_id", "42")
        .key_gte("created_at", "2024-01-01")
        .gt_opt("total", Some("100"))
        .to_params();

    println!("{}", serde_json::to_string_pretty(&params)?);

    Ok(())
}
