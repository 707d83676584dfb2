// src/cli/handlers.rs
use anyhow::{Context, Result};
use console::{style, StyledObject};
use serde::Serialize;

use crate::generators::{strength, wordlist, SecretGenerator};
use crate::models::{GeneratedSecret, PassphraseRequest, PasswordRequest, StrengthAssessment, StrengthLabel};

// Handlers for one-shot CLI commands

pub fn handle_password(request: &PasswordRequest, json: bool) -> Result<()> {
    log::info!("Generating password: length={}", request.length);
    let secret = SecretGenerator::new()
        .generate_password(request)
        .context("Failed to generate password")?;
    print_secret("Generated Password", &secret, json)
}

pub fn handle_passphrase(request: &PassphraseRequest, json: bool) -> Result<()> {
    log::info!("Generating passphrase: word_count={}", request.word_count);
    let secret = SecretGenerator::new()
        .generate_passphrase(request)
        .context("Failed to generate passphrase")?;
    print_secret("Generated Passphrase", &secret, json)
}

pub fn handle_strength(text: &str, json: bool) -> Result<()> {
    let assessment = SecretGenerator::new().analyze_strength(text);
    if json {
        return print_json(&assessment);
    }
    println!("Strength: {}", describe(&assessment));
    Ok(())
}

pub fn handle_words(json: bool) -> Result<()> {
    let words = wordlist::word_list();
    if json {
        return print_json(&words);
    }
    for word in words {
        println!("{}", word);
    }
    Ok(())
}

pub fn print_secret(title: &str, secret: &GeneratedSecret, json: bool) -> Result<()> {
    if json {
        return print_json(secret);
    }

    let assessment = secret
        .strength
        .unwrap_or_else(|| strength::assess(&secret.secret));

    println!("{}", "-".repeat(50));
    println!("{}: {}", title, colour(&assessment, secret.secret.as_str()));
    println!("Strength: {}", describe(&assessment));
    println!("{}", "-".repeat(50));
    Ok(())
}

/// e.g. "Strong (Score: 6/8)", coloured by label.
pub fn describe(assessment: &StrengthAssessment) -> String {
    format!(
        "{} (Score: {}/{})",
        colour(assessment, assessment.label.to_string()),
        assessment.score,
        strength::MAX_SCORE
    )
}

fn colour<D>(assessment: &StrengthAssessment, text: D) -> StyledObject<D> {
    match assessment.label {
        StrengthLabel::Weak => style(text).red(),
        StrengthLabel::Medium => style(text).yellow(),
        StrengthLabel::Strong | StrengthLabel::VeryStrong => style(text).green(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
