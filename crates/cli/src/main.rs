//! Smoke tool for the rédaction API: fetches an article and its version
//! history with the credentials from the environment.
//!
//! Usage: `redac <article_id>` with `REDAC_API_URL` and `REDAC_API_TOKEN`
//! set (a `.env` file is honoured).

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redac_client::{ArticlesApi, SessionContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redac=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("REDAC_API_URL").context("REDAC_API_URL must be set")?;
    let token = std::env::var("REDAC_API_TOKEN").context("REDAC_API_TOKEN must be set")?;
    let article_id: i64 = std::env::args()
        .nth(1)
        .context("usage: redac <article_id>")?
        .parse()
        .context("article_id must be a number")?;

    let api = ArticlesApi::new(SessionContext::new(base_url, token));

    let article = api.fetch_article(article_id).await?;
    println!(
        "#{} [{}] {} — {} vues, {} j'aime, {} commentaires",
        article.id,
        article.status,
        article.title,
        article.views_count,
        article.likes_count,
        article.comments_count
    );

    let history = api.fetch_history(article_id).await?;
    println!("{} version(s) enregistrée(s)", history.len());
    for version in &history {
        println!(
            "  v{} [{}] {} — {}",
            version.version_number, version.status, version.created_at, version.change_summary
        );
    }

    Ok(())
}
