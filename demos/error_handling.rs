//! Error handling example showing how to handle different error types.
//!
//! Demonstrates the split between local argument errors (no network call
//! ever happens) and failures surfaced from the transport or the API.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "examples are allowed to use println"
)]

use dwolla_masspay::{ClientConfig, MassPay, MassPayError, RequestOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("MassPay client: error handling example\n");

    let client = MassPay::new(&ClientConfig::sandbox("not-a-real-token", "0000"))?;

    // Example 1: missing required argument (fails locally, no network)
    println!("Example 1: empty job id (should fail locally)");
    match client.get_job("", &RequestOptions::new()).await {
        Ok(_) => println!("   unexpected success"),
        Err(MassPayError::MissingArgument { operation, parameter }) => {
            println!("   caught argument error: {operation}() requires {parameter}");
        }
        Err(e) => println!("   unexpected error: {e}"),
    }

    // Example 2: invalid credentials (the API reports failure in its envelope)
    println!("\nExample 2: bogus credentials (should fail remotely)");
    match client.list_jobs(&RequestOptions::new()).await {
        Ok(jobs) => println!("   unexpected success: {jobs}"),
        Err(MassPayError::ApiError(message)) => {
            println!("   API rejected the request: {message}");
        }
        Err(MassPayError::HttpError(e)) => {
            println!("   network failure: {e}");
            println!("   (no connectivity to the sandbox from this machine)");
        }
        Err(e) => println!("   unexpected error: {e}"),
    }

    // Example 3: per-call credential override
    println!("\nExample 3: per-call token override");
    let options = RequestOptions::new().alternate_token("another-token");
    match client.list_jobs(&options).await {
        Ok(jobs) => println!("   jobs: {jobs}"),
        Err(e) => println!("   failed as expected with bogus override: {e}"),
    }

    Ok(())
}
