use std::future::Future;

use anyhow::Result;

// Hangul Syllables block
const HANGUL_BASE: char = '\u{AC00}';
const HANGUL_END: char = '\u{D7A4}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    English,
    Korean,
}

impl TargetLanguage {
    /// Korean text goes to English, anything else goes to Korean.
    pub fn for_text(text: &str) -> Self {
        if is_hangul(text) {
            TargetLanguage::English
        } else {
            TargetLanguage::Korean
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::English => "en",
            TargetLanguage::Korean => "ko",
        }
    }
}

pub fn is_hangul(text: &str) -> bool {
    text.chars().any(|c| (HANGUL_BASE..HANGUL_END).contains(&c))
}

pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, target: TargetLanguage) -> impl Future<Output = Result<String>> + Send;
}
