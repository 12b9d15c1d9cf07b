use anyhow::Result;
use serde::Serialize;

// https://api.slack.com/interactivity/slash-commands#responding_immediate_response
#[derive(Serialize, Debug)]
pub struct SlackReply {
    r#type: &'static str,
    text: String,
}

impl SlackReply {
    pub fn translation(source: &str, target: &str) -> Self {
        let text = format!("`source`: {}\n`target`: {}\n", source, target);
        Self {
            r#type: "mrkdwn",
            text,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}
