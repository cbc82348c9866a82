mod add;
mod auth;
mod browse;
mod open;

use anyhow::Context;
use provas_client::ApiClient;
use provas_config::ProvasConfig;

use crate::cli::{Commands, GlobalFlags};

/// Load config (with `--token` applied) and build the API client.
fn client(flags: &GlobalFlags) -> anyhow::Result<ApiClient> {
    let config = ProvasConfig::load_with_dotenv()
        .context("failed to load provas configuration")?
        .with_token(flags.token.as_deref());
    Ok(ApiClient::from_config(&config)?)
}

/// Dispatch a parsed command to its handler.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = client(flags)?;
    match command {
        Commands::SignUp(args) => auth::sign_up(&args, &client, flags).await,
        Commands::SignIn(args) => auth::sign_in(&args, &client, flags).await,
        Commands::Disciplines(args) => browse::disciplines(&args, &client, flags).await,
        Commands::Instructors(args) => browse::instructors(&args, &client, flags).await,
        Commands::Categories => browse::categories(&client, flags).await,
        Commands::Open(args) => open::handle(&args, &client, flags).await,
        Commands::Add(args) => add::handle(args, &client, flags).await,
        Commands::Teachers(args) => add::teachers(&args, &client, flags).await,
    }
}
