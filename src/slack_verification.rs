use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use sha2::Sha256;
use hmac::{Hmac, Mac};
use hmac::digest::InvalidLength;
use hex;
use subtle::ConstantTimeEq;
use thiserror::Error;

use lambda_http::{Body, Request};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";
pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";

// The request timestamp is more than five minutes from local time
const FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Shared secret issued by Slack for an app. Never printed.
#[derive(Clone, Default)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(..)")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("no body")]
    UnreadableBody,
    #[error("{0} is empty")]
    MissingHeader(&'static str),
    #[error("request timestamp is not an integer")]
    MalformedTimestamp,
    #[error("the request timestamp is more than five minutes from local time")]
    StaleTimestamp,
    #[error("signature mismatch")]
    SignatureMismatch,
    #[error("signing secret is not configured")]
    MissingSecret,
}

/// Borrowed view of the parts of an inbound request that Slack signs.
///
/// The body is only borrowed, so the same buffer stays available to whatever
/// parses the request after it has been verified.
#[derive(Debug, Clone, Copy)]
pub struct SignedRequest<'a> {
    pub body: &'a [u8],
    pub timestamp: &'a str,
    pub signature: &'a str,
}

impl<'a> SignedRequest<'a> {
    pub fn from_request(request: &'a Request) -> Result<Self, VerificationError> {
        let headers = request.headers();
        let body: &[u8] = match request.body() {
            Body::Empty => return Err(VerificationError::UnreadableBody),
            body => body.as_ref(),
        };
        let signature = headers.get(SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(VerificationError::MissingHeader(SIGNATURE_HEADER))?;
        let timestamp = headers.get(TIMESTAMP_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(VerificationError::MissingHeader(TIMESTAMP_HEADER))?;
        Ok(Self {
            body,
            timestamp,
            signature,
        })
    }

    // https://api.slack.com/authentication/verifying-requests-from-slack#making__validating-a-request
    pub fn verify_at(&self, secret: &SigningSecret, now: SystemTime) -> Result<(), VerificationError> {
        if secret.is_empty() {
            return Err(VerificationError::MissingSecret);
        }
        let issued_at: i64 = self.timestamp.parse()
            .map_err(|_| VerificationError::MalformedTimestamp)?;
        if !is_fresh(issued_at, now) {
            return Err(VerificationError::StaleTimestamp);
        }
        let signature_expected = compute_signature(secret, self.timestamp, self.body)
            .map_err(|_| VerificationError::SignatureMismatch)?;
        let matches: bool = signature_expected.as_bytes()
            .ct_eq(self.signature.as_bytes())
            .into();
        if matches {
            Ok(())
        } else {
            Err(VerificationError::SignatureMismatch)
        }
    }
}

// https://api.slack.com/authentication/verifying-requests-from-slack
pub fn verify_slack_request(request: &Request, secret: &SigningSecret) -> Result<(), VerificationError> {
    let signed_request = SignedRequest::from_request(request)?;
    signed_request.verify_at(secret, SystemTime::now())
}

/// `v0=` followed by the lowercase hex HMAC-SHA256 of `v0:{timestamp}:{body}`.
pub fn compute_signature(secret: &SigningSecret, timestamp: &str, body: &[u8]) -> Result<String, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    let signature = mac.finalize().into_bytes();
    Ok(["v0=", hex::encode(signature).as_str()].join(""))
}

fn is_fresh(issued_at: i64, now: SystemTime) -> bool {
    let offset = Duration::from_secs(issued_at.unsigned_abs());
    let issued_at = if issued_at >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    };
    let Some(issued_at) = issued_at else {
        return false;
    };
    // clock skew counts in both directions
    let skew = match now.duration_since(issued_at) {
        Ok(elapsed) => elapsed,
        Err(error) => error.duration(),
    };
    skew <= FRESHNESS_WINDOW
}
