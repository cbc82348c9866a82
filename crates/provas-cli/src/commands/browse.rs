use provas_client::ApiClient;
use provas_client::pages::{load_disciplines_page, load_instructors_page};
use provas_core::alert::{AlertBus, AlertKind, Notify};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::output::output;

pub async fn disciplines(
    args: &SearchArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = load_disciplines_page(client, args.search.as_deref(), AlertBus::global()).await?;
    output(&page, flags.format)
}

pub async fn instructors(
    args: &SearchArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = load_instructors_page(client, args.search.as_deref(), AlertBus::global()).await?;
    output(&page, flags.format)
}

pub async fn categories(client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories = match client.categories().await {
        Ok(categories) => categories,
        Err(error) => {
            AlertBus::global().notify(AlertKind::Error, &error.user_message());
            return Err(error.into());
        }
    };
    output(&categories, flags.format)
}
