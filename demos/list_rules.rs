//! List the first rules of a project.
//!
//! ```text
//! ITWIN_ACCESS_TOKEN=eyJ... cargo run --example list_rules -- <project-id> [limit]
//! ```

use std::env;

use property_validation::client::take;
use property_validation::models::CollectionParams;
use property_validation::{ClientConfig, PropertyValidationClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> property_validation::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let Some(project_id) = args.next() else {
        eprintln!("usage: list_rules <project-id> [limit]");
        std::process::exit(2);
    };
    let limit = args.next().and_then(|n| n.parse().ok()).unwrap_or(20);
    let token = env::var("ITWIN_ACCESS_TOKEN").unwrap_or_default();

    let client = PropertyValidationClient::new(ClientConfig::default())?;
    let mut rules = client
        .rules()
        .with_access_token(token)
        .with_user_metadata(true)
        .list(CollectionParams::new(project_id).top(10))?;

    for rule in take(&mut rules, limit).await? {
        println!(
            "{}  {:<40} {}.{} [{}]",
            rule.id, rule.display_name, rule.ec_schema, rule.ec_class, rule.severity
        );
    }

    Ok(())
}
