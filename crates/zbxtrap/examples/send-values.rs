//! Send a couple of values to a trapper and classify the result.
//!
//! Run with:
//!   cargo run --example send-values -- zabbix.example.org

use zbxtrap::proto::DataPoint;
use zbxtrap::sender::{ensure_processed, Batch, Sender, DEFAULT_PORT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let host = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1".to_string());

    let sender = Sender::new(host, DEFAULT_PORT);

    let mut batch = Batch::new();
    batch
        .push(DataPoint::new("host1", "key1", "value"))
        .push(DataPoint::new("host1", "key1", "value2"));

    let result = batch.send_with(&sender)?;
    eprintln!("trapper answered: {result}");

    ensure_processed(result)?;
    Ok(())
}
