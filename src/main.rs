use hf_textgen::prelude::*;

/// Model the example prompt targets.
const MODEL: &str = "bigcode/starcoder2-3b";

const EXAMPLE_PROMPT: &str = "Donne moi un code en python pour scrapper des données";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let generator = GeneratorConfig::new(MODEL).token_from_env().build()?;
    let runner = PromptRunner::new(generator);

    tracing::info!(model = MODEL, "sending example prompt");
    let text = runner.run(EXAMPLE_PROMPT).await?;
    println!("{text}");

    Ok(())
}
