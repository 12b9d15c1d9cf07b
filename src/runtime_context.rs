use std::sync::Arc;

use crate::config::Config;
use crate::google_translate::GoogleTranslateClient;
use crate::slack_verification::SigningSecret;

pub struct RuntimeContext {
    signing_secret: Arc<SigningSecret>,
    translator: Arc<GoogleTranslateClient>,
}

impl RuntimeContext {
    pub fn new(config: Config) -> Arc<Self> {
        let translator = GoogleTranslateClient::new(config.translate_endpoint, config.translate_api_key);
        let context = Self {
            signing_secret: Arc::new(config.signing_secret),
            translator: Arc::new(translator),
        };
        Arc::new(context)
    }

    pub fn signing_secret(&self) -> &Arc<SigningSecret> {
        &self.signing_secret
    }

    pub fn translator(&self) -> &Arc<GoogleTranslateClient> {
        &self.translator
    }
}
