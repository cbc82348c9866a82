use provas_client::ApiClient;
use provas_client::auth::Credentials;
use provas_core::alert::{AlertBus, AlertKind, Notify};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CredentialsArgs;
use crate::output::{RenderText, output};

#[derive(Debug, Serialize)]
struct SignUpResponse {
    email: String,
    created: bool,
}

impl RenderText for SignUpResponse {
    fn render_text(&self) -> String {
        format!("account created for {}", self.email)
    }
}

#[derive(Debug, Serialize)]
struct SignInResponse {
    token: String,
}

impl RenderText for SignInResponse {
    fn render_text(&self) -> String {
        self.token.clone()
    }
}

fn credentials(args: &CredentialsArgs) -> Credentials {
    Credentials {
        email: args.email.clone(),
        password: args.password.clone(),
    }
}

pub async fn sign_up(
    args: &CredentialsArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Err(error) = client.sign_up(&credentials(args)).await {
        AlertBus::global().notify(AlertKind::Error, &error.user_message());
        return Err(error.into());
    }
    output(
        &SignUpResponse {
            email: args.email.clone(),
            created: true,
        },
        flags.format,
    )
}

pub async fn sign_in(
    args: &CredentialsArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let token = match client.sign_in(&credentials(args)).await {
        Ok(token) => token,
        Err(error) => {
            AlertBus::global().notify(AlertKind::Error, &error.user_message());
            return Err(error.into());
        }
    };
    output(&SignInResponse { token }, flags.format)
}
