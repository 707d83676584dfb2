// src/generators/mod.rs
//! Password and passphrase generation engine.
//!
//! Everything here is synchronous and stateless. Randomness comes from the
//! operating system CSPRNG unless a caller passes its own `CryptoRng`.

mod error;
pub mod passphrase;
pub mod password;
pub mod pool;
pub mod strength;
pub mod validation;
pub mod wordlist;

pub use error::{Error, GenerationError, Result, ValidationError};

use rand::rngs::OsRng;

use crate::models::{GeneratedSecret, PassphraseRequest, PasswordRequest, StrengthAssessment};

/// Validate-then-generate entry points shared by the CLI and the API.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretGenerator;

impl SecretGenerator {
    pub fn new() -> Self {
        SecretGenerator
    }

    pub fn generate_password(&self, request: &PasswordRequest) -> Result<GeneratedSecret> {
        validation::validate_password(request)?;
        let password = password::generate_password(&mut OsRng, request)?;
        Ok(GeneratedSecret::new(password).with_strength())
    }

    pub fn generate_passphrase(&self, request: &PassphraseRequest) -> Result<GeneratedSecret> {
        validation::validate_passphrase(request)?;
        let passphrase = passphrase::generate_passphrase(&mut OsRng, request, wordlist::word_list())?;
        Ok(GeneratedSecret::new(passphrase).with_strength())
    }

    pub fn analyze_strength(&self, password: &str) -> StrengthAssessment {
        strength::assess(password)
    }
}
