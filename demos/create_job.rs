//! Basic MassPay job creation example.
//!
//! Creates a small disbursement job against the sandbox API, then checks
//! its status and lists its items.
//!
//! # Running this example
//!
//! ```bash
//! DWOLLA_ACCESS_TOKEN=... DWOLLA_PIN=... cargo run --example create_job
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "examples are allowed to use println"
)]

use dwolla_masspay::{ClientConfig, MassPay, RequestOptions};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_token = std::env::var("DWOLLA_ACCESS_TOKEN")?;
    let pin = std::env::var("DWOLLA_PIN")?;

    let config = ClientConfig::sandbox(access_token, pin);
    config.validate()?;

    let client = MassPay::new(&config)?;

    // Create a job with two items, paid from the account balance.
    let items = vec![
        json!({"amount": 1.00, "destination": "812-111-1111"}),
        json!({"amount": 2.50, "destination": "812-222-2222"}),
    ];

    let job = client
        .create_job("Balance", &items, &RequestOptions::new().param("userJobId", "demo-batch"))
        .await?;
    println!("created job: {job}");

    let id = job["Id"].as_str().unwrap_or_default();

    let status = client.get_job(id, &RequestOptions::new()).await?;
    println!("job status: {status}");

    let job_items = client.get_job_items(id, &RequestOptions::new()).await?;
    println!("job items: {job_items}");

    Ok(())
}
