use anyhow::Result;
use confab::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
