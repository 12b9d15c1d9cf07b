use anyhow::{Context, Result};
use lambda_http::{Request, RequestPayloadExt};
use serde::Deserialize;

// https://api.slack.com/interactivity/slash-commands#app_command_handling
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SlashCommand {
    pub token: Option<String>,
    pub team_id: Option<String>,
    pub team_domain: Option<String>,
    pub channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub command: Option<String>,
    pub text: String,
    pub response_url: Option<String>,
    pub trigger_id: Option<String>,
}

impl SlashCommand {
    /// Reads the form payload from the already buffered request body.
    pub fn parse(request: &Request) -> Result<Self> {
        let command: Option<SlashCommand> = request.payload()?;
        command.context("request is not a form payload")
    }
}
