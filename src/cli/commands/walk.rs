//! Single walk command.

use console::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::http_client::HttpClient;
use crate::languages::LanguageList;
use crate::walk::{SiteContext, Walker};

/// Walk one language edition and print `{"url", "graph"}`.
pub async fn cmd_walk(
    settings: &Settings,
    language: Option<&str>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let languages = LanguageList::load_or_builtin(settings.languages_file.as_deref()).await?;
    let language = languages.validate(language.unwrap_or(&settings.default_language))?;
    let site = SiteContext::from_template(&settings.site_template, language)?;

    let client =
        HttpClient::with_user_agent(settings.request_timeout(), settings.user_agent.as_deref())?;
    let walker = Walker::new(client).with_max_depth(settings.max_depth);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    eprintln!(
        "{} Walking {} from {}",
        style("→").cyan(),
        languages.name(language).unwrap_or(language),
        site.seed_url()
    );

    let outcome = walker.walk(&site, &mut rng, &cancel).await?;

    eprintln!(
        "  {} {} hops, stopped: {:?}",
        style("✓").green(),
        outcome.graph.len(),
        outcome.termination
    );
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
