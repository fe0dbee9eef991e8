use std::fmt::{Debug, Formatter};

use bytes::Bytes;
use log::debug;

use waku_core::content_topic::ContentTopic;
use waku_core::message::{hex_preview, WakuMessage, VERSION_0, VERSION_1};

use crate::decryption_keys::DecryptionKeyEntry;
use crate::version_1::{self, CryptoError, MIN_ENVELOPE_SIZE};

/// Payload protection applied by [`encode`].
///
/// At most one of the two keys may be set; with none the message is sent in plaintext.
#[derive(Clone, Default)]
pub struct EncodeOptions {
    pub sym_key: Option<Bytes>,
    pub enc_public_key: Option<Bytes>,
}

impl EncodeOptions {
    pub fn symmetric(key: impl Into<Bytes>) -> Self {
        Self {
            sym_key: Some(key.into()),
            ..Default::default()
        }
    }

    pub fn asymmetric(public_key: impl Into<Bytes>) -> Self {
        Self {
            enc_public_key: Some(public_key.into()),
            ..Default::default()
        }
    }
}

impl Debug for EncodeOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodeOptions")
            .field("sym_key", &self.sym_key.as_ref().map(|_| "<redacted>"))
            .field(
                "enc_public_key",
                &self.enc_public_key.as_deref().map(hex_preview),
            )
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("a message can't be encrypted with both a symmetric key and a public key")]
    ConflictingEncryption,
    #[error("payload encryption failed: {0}")]
    Crypto(#[from] CryptoError),
}

/// Why a message could not be decoded. None of these are fatal to a query: the message is
/// simply skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed version 1 payload: {0} bytes")]
    Malformed(usize),
    #[error("no decryption key opened the payload")]
    NoMatchingKey,
    #[error("unsupported message version: {0}")]
    UnsupportedVersion(u32),
}

/// A message whose payload is readable by the application.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub payload: Bytes,
    pub content_topic: ContentTopic,
    pub timestamp: Option<i64>,
    pub version: u32,
    pub meta: Option<Bytes>,
}

impl DecodedMessage {
    pub fn payload_as_utf8(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }

    fn with_payload(message: &WakuMessage, payload: Bytes) -> Self {
        Self {
            payload,
            content_topic: message.content_topic.clone(),
            timestamp: message.timestamp,
            version: message.version,
            meta: message.meta.clone(),
        }
    }
}

impl Debug for DecodedMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedMessage")
            .field("content_topic", &self.content_topic)
            .field("version", &self.version)
            .field("timestamp", &self.timestamp)
            .field("payload", &hex_preview(&self.payload))
            .finish()
    }
}

/// Build a wire message, encrypting the payload as requested by `options`.
pub fn encode(
    payload: impl Into<Bytes>,
    content_topic: impl Into<ContentTopic>,
    timestamp: i64,
    options: &EncodeOptions,
) -> Result<WakuMessage, EnvelopeError> {
    let payload = payload.into();

    let (version, payload) = match (&options.sym_key, &options.enc_public_key) {
        (Some(_), Some(_)) => return Err(EnvelopeError::ConflictingEncryption),
        (Some(key), None) => (VERSION_1, version_1::encrypt_symmetric(&payload, key)?),
        (None, Some(public_key)) => (
            VERSION_1,
            version_1::encrypt_asymmetric(&payload, public_key)?,
        ),
        (None, None) => (VERSION_0, payload),
    };

    Ok(WakuMessage {
        payload,
        content_topic: content_topic.into(),
        version,
        timestamp: Some(timestamp),
        meta: None,
        ephemeral: false,
    })
}

/// Decode a message, trying the keys applying to its content topic in order.
pub fn try_decode(
    message: &WakuMessage,
    keys: &[DecryptionKeyEntry],
) -> Result<DecodedMessage, DecodeError> {
    match message.version {
        VERSION_0 => Ok(DecodedMessage::with_payload(message, message.payload.clone())),
        VERSION_1 => {
            if message.payload.len() < MIN_ENVELOPE_SIZE {
                return Err(DecodeError::Malformed(message.payload.len()));
            }

            keys.iter()
                .filter(|entry| entry.applies_to(&message.content_topic))
                .find_map(|entry| entry.decrypt(&message.payload).ok())
                .map(|payload| DecodedMessage::with_payload(message, payload))
                .ok_or(DecodeError::NoMatchingKey)
        }
        version => Err(DecodeError::UnsupportedVersion(version)),
    }
}

/// Like [`try_decode`], dropping messages that can't be decoded.
pub fn decode(message: &WakuMessage, keys: &[DecryptionKeyEntry]) -> Option<DecodedMessage> {
    match try_decode(message, keys) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            debug!("dropping message on '{}': {err}", message.content_topic);
            None
        }
    }
}
