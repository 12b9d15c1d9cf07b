
use std::sync::Arc;

use anyhow::Result;
use lambda_http::Error;
use lambda_http::{Body, Request, Response};
use tracing::info;

use crate::slack_messages::SlackReply;
use crate::slack_verification::{verify_slack_request, SigningSecret};
use crate::slash_commands::SlashCommand;
use crate::translation::{TargetLanguage, Translator};

pub fn text_response(status: u16, body: &'static str) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(body.into())
        .map_err(Box::new)?;
    Ok(response)
}

pub struct SlackRequestHandler<T> {
    signing_secret: Arc<SigningSecret>,
    translator: Arc<T>,
}

impl<T: Translator> SlackRequestHandler<T> {
    pub fn new(signing_secret: &Arc<SigningSecret>, translator: &Arc<T>) -> Self {
        Self {
            signing_secret: Arc::clone(signing_secret),
            translator: Arc::clone(translator),
        }
    }

    pub async fn handle_slack_request(&self, event: Request) -> Result<Response<Body>, Error> {
        let verification_result = verify_slack_request(&event, &self.signing_secret);
        match verification_result {
            Ok(()) => {
                let result = self.handle_verified_command(&event).await;
                match result {
                    Ok(response) => Ok(response),
                    Err(error) => {
                        info!("slash command error {:?}", error);
                        text_response(500, "internal server error")
                    }
                }
            },
            Err(error) => {
                info!("slash command verification failed {:?}", error);
                text_response(401, "unauthorized")
            }
        }
    }

    async fn handle_verified_command(&self, event: &Request) -> Result<Response<Body>> {
        let command = SlashCommand::parse(event)?;
        info!("{:?} from {:?} in {:?}", command.command, command.user_name, command.channel_name);
        let source_text = command.text;
        let target = TargetLanguage::for_text(&source_text);
        let target_text = self.translator.translate(&source_text, target).await?;
        info!("source: {}", source_text);
        info!("target: {}", target_text);
        let reply = SlackReply::translation(&source_text, &target_text);
        let response = Response::builder()
            .status(200)
            .header("content-type", "application/json")
            .body(reply.to_json()?.into())
            .map_err(Box::new)?;
        Ok(response)
    }
}
