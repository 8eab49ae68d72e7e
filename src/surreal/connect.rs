use anyhow::{Context, Result};

use crate::SurrealOpts;

pub type Client = surrealdb::Surreal<surrealdb::engine::any::Any>;

/// Connect, authenticate as root, and select the target namespace and
/// database. HTTP(S) endpoints are rewritten to their WebSocket form.
pub async fn connect(opts: &SurrealOpts, ns: &str, db: &str) -> Result<Client> {
    let endpoint = opts
        .surreal_endpoint
        .replace("http://", "ws://")
        .replace("https://", "wss://");

    let surreal = surrealdb::engine::any::connect(&endpoint)
        .await
        .with_context(|| format!("Failed to connect to SurrealDB at {endpoint}"))?;

    surreal
        .signin(surrealdb::opt::auth::Root {
            username: &opts.surreal_username,
            password: &opts.surreal_password,
        })
        .await
        .context("Failed to authenticate with SurrealDB")?;

    surreal
        .use_ns(ns)
        .use_db(db)
        .await
        .with_context(|| format!("Failed to select namespace/database {ns}/{db}"))?;

    Ok(surreal)
}
