use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    ticked::tui::run().await
}
