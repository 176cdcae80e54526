//! Utility to fetch one profile (or company) and print it as normalized JSON.
//!
//! Usage: `fetch_profile <public-identifier>` or `fetch_profile --company <universal-name>`.

use profile_scrubber::config::Config;
use profile_scrubber::VoyagerClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profile_scrubber=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (company, target) = match args.as_slice() {
        [flag, name] if flag == "--company" => (true, name.clone()),
        [identifier] => (false, identifier.clone()),
        _ => anyhow::bail!("usage: fetch_profile <public-identifier> | --company <universal-name>"),
    };

    let config = Config::from_env()?;
    let client = VoyagerClient::new(&config)?;

    let output = if company {
        match client.get_company(&target).await? {
            Some(company) => serde_json::to_string_pretty(&company)?,
            None => "{}".to_string(),
        }
    } else {
        let profile = client.get_full_profile(&target).await?;
        serde_json::to_string_pretty(&profile)?
    };

    println!("{}", output);
    Ok(())
}
