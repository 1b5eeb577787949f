//! Encrypted Password Files
//!
//! Password files hold `base64(salt[16] || nonce[12] || ciphertext_with_tag)`,
//! encrypted with AES-256-GCM under a PBKDF2-HMAC-SHA256 derived key. The
//! passphrase is never stored; it is read from an environment variable.

use std::fs;
use std::path::Path;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::models::settings::PasswordSource;
use crate::utils::error::{BridgeError, BridgeResult};

const PBKDF2_ITERATIONS: u32 = 100_000;
const SALT_SIZE: usize = 16;
const NONCE_SIZE: usize = 12;
const KEY_SIZE: usize = 32;

fn derive_cipher(passphrase: &str, salt: &[u8]) -> Aes256Gcm {
    let mut derived_key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut derived_key);
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&derived_key))
}

/// Encrypt plaintext under a passphrase.
pub fn encrypt_with_passphrase(plaintext: &str, passphrase: &str) -> BridgeResult<String> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    let cipher = derive_cipher(passphrase, &salt);

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| BridgeError::config(format!("Password encryption failed: {}", e)))?;

    let mut combined = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
    combined.extend_from_slice(&salt);
    combined.extend_from_slice(&nonce_bytes);
    combined.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(combined))
}

/// Decrypt text produced by `encrypt_with_passphrase`.
pub fn decrypt_with_passphrase(encrypted: &str, passphrase: &str) -> BridgeResult<String> {
    let data = BASE64
        .decode(encrypted.trim())
        .map_err(|e| BridgeError::config(format!("Base64 decode failed: {}", e)))?;

    if data.len() < SALT_SIZE + NONCE_SIZE + 1 {
        return Err(BridgeError::config("Invalid encrypted data: too short"));
    }

    let (salt, rest) = data.split_at(SALT_SIZE);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);
    let cipher = derive_cipher(passphrase, salt);

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| BridgeError::config("Decryption failed: wrong passphrase or corrupted data"))?;

    String::from_utf8(plaintext)
        .map_err(|e| BridgeError::config(format!("Decrypted data is not valid UTF-8: {}", e)))
}

/// Encrypt `password` and write it to `path`.
pub fn write_password_file(path: &Path, password: &str, passphrase: &str) -> BridgeResult<()> {
    let encrypted = encrypt_with_passphrase(password, passphrase)?;
    if let Some(parent) = path.parent() {
        crate::utils::paths::ensure_dir(parent)?;
    }
    fs::write(path, encrypted)?;
    Ok(())
}

/// Read and decrypt a password file.
pub fn read_password_file(path: &Path, passphrase: &str) -> BridgeResult<String> {
    if !path.exists() {
        return Err(BridgeError::config(format!(
            "Password file not found: {}",
            path.display()
        )));
    }
    let encrypted = fs::read_to_string(path)?;
    decrypt_with_passphrase(&encrypted, passphrase)
}

/// Resolve a password source, reading passphrases from the process environment.
pub fn resolve_password(source: &PasswordSource) -> BridgeResult<String> {
    resolve_password_with(source, |name| std::env::var(name).ok())
}

/// Resolve a password source with a custom variable lookup.
pub fn resolve_password_with<F>(source: &PasswordSource, lookup: F) -> BridgeResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match source {
        PasswordSource::Plain { value } => Ok(value.clone()),
        PasswordSource::EncryptedFile { path, key_env } => {
            let passphrase = lookup(key_env)
                .filter(|p| !p.is_empty())
                .ok_or_else(|| {
                    BridgeError::config(format!(
                        "Environment variable {} is not set; cannot decrypt {}",
                        key_env,
                        path.display()
                    ))
                })?;
            read_password_file(path, &passphrase)
        }
    }
}
