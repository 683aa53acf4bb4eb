use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    knowledge_box::cli::run().await
}
