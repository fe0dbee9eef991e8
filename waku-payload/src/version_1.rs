//! Version 1 payload encryption.
//!
//! Symmetric envelope:
//!
//! ```text
//! | nonce (12) | ciphertext | auth tag (16) |
//! ```
//!
//! Asymmetric envelope, sealed with a key derived (HKDF-SHA256) from the ECDH shared secret
//! between a fresh ephemeral secp256k1 key and the recipient's public key:
//!
//! ```text
//! | ephemeral public key (33, SEC1 compressed) | nonce (12) | ciphertext | auth tag (16) |
//! ```
//!
//! The AEAD is ChaCha20-Poly1305. Nothing on the wire tells the two envelopes apart: the
//! method is known only by which key manages to open it.
use bytes::Bytes;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::{ChaCha20Poly1305, KeyInit, Nonce};
use hkdf::Hkdf;
use k256::ecdh::{diffie_hellman, EphemeralSecret};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

pub const SYMMETRIC_KEY_SIZE: usize = 32;
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 33;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16;

/// Shortest payload that can hold a version 1 envelope.
pub const MIN_ENVELOPE_SIZE: usize = NONCE_SIZE + TAG_SIZE;

const HKDF_INFO: &[u8] = b"waku/2/payload/v1/asymmetric";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("invalid symmetric key length: {0} bytes")]
    InvalidSymmetricKey(usize),
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("envelope too short: {0} bytes")]
    Truncated(usize),
    #[error("key derivation failed")]
    KeyDerivation,
    #[error("encryption failed")]
    Encryption,
    #[error("authentication failed")]
    Authentication,
}

/// Generate a random 32 bytes symmetric key.
pub fn generate_symmetric_key() -> Bytes {
    let mut key = [0u8; SYMMETRIC_KEY_SIZE];
    OsRng.fill_bytes(&mut key);
    Bytes::copy_from_slice(&key)
}

/// Generate a random secp256k1 private key.
pub fn generate_private_key() -> Bytes {
    let secret = SecretKey::random(&mut OsRng);
    Bytes::copy_from_slice(secret.to_bytes().as_slice())
}

/// Return the SEC1 compressed public key of the given secp256k1 private key.
pub fn public_key(private_key: &[u8]) -> Result<Bytes, CryptoError> {
    let secret = SecretKey::from_slice(private_key).map_err(|_| CryptoError::InvalidPrivateKey)?;
    let point = secret.public_key().to_encoded_point(true);
    Ok(Bytes::copy_from_slice(point.as_bytes()))
}

fn cipher(key: &[u8]) -> Result<ChaCha20Poly1305, CryptoError> {
    ChaCha20Poly1305::new_from_slice(key).map_err(|_| CryptoError::InvalidSymmetricKey(key.len()))
}

fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = cipher(key)?;

    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| CryptoError::Encryption)?;

    let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

fn open(key: &[u8], sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if sealed.len() < MIN_ENVELOPE_SIZE {
        return Err(CryptoError::Truncated(sealed.len()));
    }

    let cipher = cipher(key)?;
    let (nonce, ciphertext) = sealed.split_at(NONCE_SIZE);
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::Authentication)
}

fn derive_key(
    shared_secret: &[u8],
    ephemeral_public_key: &[u8],
) -> Result<[u8; SYMMETRIC_KEY_SIZE], CryptoError> {
    let hkdf = Hkdf::<Sha256>::new(Some(ephemeral_public_key), shared_secret);
    let mut key = [0u8; SYMMETRIC_KEY_SIZE];
    hkdf.expand(HKDF_INFO, &mut key)
        .map_err(|_| CryptoError::KeyDerivation)?;
    Ok(key)
}

pub fn encrypt_symmetric(data: &[u8], key: &[u8]) -> Result<Bytes, CryptoError> {
    seal(key, data).map(Bytes::from)
}

pub fn decrypt_symmetric(data: &[u8], key: &[u8]) -> Result<Bytes, CryptoError> {
    open(key, data).map(Bytes::from)
}

pub fn encrypt_asymmetric(data: &[u8], public_key: &[u8]) -> Result<Bytes, CryptoError> {
    let recipient =
        PublicKey::from_sec1_bytes(public_key).map_err(|_| CryptoError::InvalidPublicKey)?;

    let ephemeral = EphemeralSecret::random(&mut OsRng);
    let ephemeral_public_key = ephemeral.public_key().to_encoded_point(true);
    let shared_secret = ephemeral.diffie_hellman(&recipient);

    let key = derive_key(
        shared_secret.raw_secret_bytes().as_slice(),
        ephemeral_public_key.as_bytes(),
    )?;
    let sealed = seal(&key, data)?;

    let mut envelope = Vec::with_capacity(PUBLIC_KEY_SIZE + sealed.len());
    envelope.extend_from_slice(ephemeral_public_key.as_bytes());
    envelope.extend_from_slice(&sealed);
    Ok(envelope.into())
}

pub fn decrypt_asymmetric(data: &[u8], private_key: &[u8]) -> Result<Bytes, CryptoError> {
    if data.len() < PUBLIC_KEY_SIZE + MIN_ENVELOPE_SIZE {
        return Err(CryptoError::Truncated(data.len()));
    }

    let secret = SecretKey::from_slice(private_key).map_err(|_| CryptoError::InvalidPrivateKey)?;

    let (ephemeral_public_key, sealed) = data.split_at(PUBLIC_KEY_SIZE);
    let ephemeral = PublicKey::from_sec1_bytes(ephemeral_public_key)
        .map_err(|_| CryptoError::InvalidPublicKey)?;
    let shared_secret = diffie_hellman(secret.to_nonzero_scalar(), ephemeral.as_affine());

    let key = derive_key(
        shared_secret.raw_secret_bytes().as_slice(),
        ephemeral_public_key,
    )?;
    open(&key, sealed).map(Bytes::from)
}
