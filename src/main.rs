use anyhow::Context;
use content_pilot::configuration;
use content_pilot::session::GenerationSession;
use content_pilot::telemetry;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_cli_subscriber()?;

    let brief_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: content-pilot <brief.yaml>")?;

    let config = configuration::get_configuration()?;
    let client = config.api.client()?;
    let form = configuration::load_brief(&brief_path)?;

    let session = GenerationSession::new();
    let result = match session.submit(&client, &form).await {
        Ok(result) => result,
        Err(e) => anyhow::bail!("Error: {}", e.message()),
    };

    if let Some(notice) = result.email_notice() {
        eprintln!("{}", notice);
    }
    println!("{}", result.content);

    let download = PathBuf::from(format!(
        "content-{}.md",
        chrono::Utc::now().timestamp_millis()
    ));
    std::fs::write(&download, &result.content)
        .with_context(|| format!("Failed to save content to {}", download.display()))?;
    eprintln!("Saved to {}", download.display());

    Ok(())
}
