use anyhow::Result;
use gcode_cycle_time::cli::run;

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}
