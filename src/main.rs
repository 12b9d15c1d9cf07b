use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response, http::Method};

mod config;
mod google_translate;
mod runtime_context;
mod slack_messages;
mod slack_requests;
mod slack_verification;
mod slash_commands;
mod translation;

use config::Config;
use runtime_context::RuntimeContext;
use slack_requests::{text_response, SlackRequestHandler};

// https://github.com/awslabs/aws-lambda-rust-runtime/tree/main/examples
async fn function_handler(event: Request, context: &Arc<RuntimeContext>) -> Result<Response<Body>, Error> {
    match (event.method(), event.raw_http_path()) {
        (&Method::POST, "/") | (&Method::POST, "/slack/commands") => {
            let request_handler = SlackRequestHandler::new(context.signing_secret(), context.translator());
            request_handler.handle_slack_request(event).await
        },
        (&Method::GET, "/") => text_response(200, "ok"),
        _ => text_response(404, "not found"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();
    tracing::info!("server started");
    let config = Config::from_env()?;
    let runtime_context = RuntimeContext::new(config);
    let func = |event| async {
        function_handler(event, &runtime_context).await
    };
    run(service_fn(func)).await
}
