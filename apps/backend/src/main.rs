#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcard_quiz_backend::run().await
}
