//! Scan parameter example for dynamoqb
//!
//! Run with: cargo run --example scan_params -p dynamoqb

use dynamoqb::{qb, QbError};

fn main() -> Result<(), QbError> {
    println!("=== Scan ===");
    let params = qb::scan()
        .gt("total", "100")
        .ne("region", "eu")
        .to_params();

    println!("{}", serde_json::to_string_pretty(&params)?);

    // An empty scan still renders a FilterExpression field.
    println!("=== Empty scan ===");
    let params = qb::scan().to_params();
    println!("{}", serde_json::to_string_pretty(&params)?);

    Ok(())
}
