// src/cli/menu.rs
use inquire::error::InquireResult;
use inquire::{Confirm, InquireError, Select, Text};

use crate::cli::handlers::{describe, print_secret};
use crate::core::config::Config;
use crate::generators::validation::{PASSPHRASE_MAX_WORDS, PASSPHRASE_MIN_WORDS};
use crate::generators::SecretGenerator;
use crate::models::{CapitalizeMode, PassphraseRequest, PasswordRequest};

// The interactive surface keeps passwords in a narrower, friendlier range
pub const MENU_MIN_LENGTH: usize = 8;
pub const MENU_MAX_LENGTH: usize = 64;

const GENERATE_PASSWORD: &str = "🔐  Generate password";
const GENERATE_PASSPHRASE: &str = "📝  Generate passphrase";
const CHECK_STRENGTH: &str = "📊  Check password strength";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSFORGE GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let generator = SecretGenerator::new();
    let default_length = config.default_password_length.clamp(MENU_MIN_LENGTH, MENU_MAX_LENGTH);

    loop {
        let options = vec![GENERATE_PASSWORD, GENERATE_PASSPHRASE, CHECK_STRENGTH, EXIT];
        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match choice {
            GENERATE_PASSWORD => password_flow(&generator, default_length),
            GENERATE_PASSPHRASE => passphrase_flow(&generator),
            CHECK_STRENGTH => strength_flow(&generator),
            _ => break,
        };

        match result {
            Ok(()) => {}
            Err(e) if is_cancel(&e) => println!("Cancelled."),
            Err(e) => return Err(e.into()),
        }
    }

    println!("\n👋 Thanks for using Passforge! Stay secure!\n");
    Ok(())
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

fn password_flow(generator: &SecretGenerator, default_length: usize) -> InquireResult<()> {
    println!("Configure your password settings:\n");

    let length = prompt_number("Password length", MENU_MIN_LENGTH, MENU_MAX_LENGTH, default_length)?;

    let request = PasswordRequest {
        length,
        include_uppercase: confirm("Include uppercase letters (A-Z)?", true)?,
        include_lowercase: confirm("Include lowercase letters (a-z)?", true)?,
        include_digits: confirm("Include numbers (0-9)?", true)?,
        include_symbols: confirm("Include symbols (!@#$%...)?", true)?,
        exclude_ambiguous: confirm("Exclude ambiguous characters (0, O, l, 1, I)?", false)?,
    };

    match generator.generate_password(&request) {
        Ok(secret) => {
            log::info!("Password generated from menu: length={}", length);
            if let Err(e) = print_secret("Generated Password", &secret, false) {
                println!("❌ Error: {}", e);
            }
        }
        Err(e) => println!("\n❌ Error: {}\n", e),
    }
    Ok(())
}

fn passphrase_flow(generator: &SecretGenerator) -> InquireResult<()> {
    let defaults = PassphraseRequest::default();

    let word_count = prompt_number("Number of words", PASSPHRASE_MIN_WORDS, PASSPHRASE_MAX_WORDS, defaults.word_count)?;
    let separator = Text::new("Separator:").with_default(&defaults.separator).prompt()?;
    let capitalize = Select::new("Capitalization:", CapitalizeMode::ALL.to_vec()).prompt()?;

    let request = PassphraseRequest {
        word_count,
        separator,
        add_numbers: confirm("Append a number?", defaults.add_numbers)?,
        add_symbols: confirm("Append a symbol?", defaults.add_symbols)?,
        capitalize,
    };

    match generator.generate_passphrase(&request) {
        Ok(secret) => {
            log::info!("Passphrase generated from menu: word_count={}", word_count);
            if let Err(e) = print_secret("Generated Passphrase", &secret, false) {
                println!("❌ Error: {}", e);
            }
        }
        Err(e) => println!("\n❌ Error: {}\n", e),
    }
    Ok(())
}

fn strength_flow(generator: &SecretGenerator) -> InquireResult<()> {
    let text = inquire::Password::new("Password to check:")
        .without_confirmation()
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()?;

    println!("Strength: {}\n", describe(&generator.analyze_strength(&text)));
    Ok(())
}

fn confirm(message: &str, default: bool) -> InquireResult<bool> {
    Confirm::new(message).with_default(default).prompt()
}

/// Ask until the answer is a number within `[min, max]`. Empty input takes the default.
fn prompt_number(message: &str, min: usize, max: usize, default: usize) -> InquireResult<usize> {
    let prompt = format!("{} [{}-{}]:", message, min, max);
    let default = default.to_string();

    loop {
        let answer = Text::new(&prompt).with_default(&default).prompt()?;
        match parse_in_range(&answer, min, max) {
            Ok(n) => return Ok(n),
            Err(msg) => println!("{}", msg),
        }
    }
}

fn parse_in_range(answer: &str, min: usize, max: usize) -> Result<usize, String> {
    match answer.trim().parse::<usize>() {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        Ok(_) => Err(format!("Please enter a number between {} and {}", min, max)),
        Err(_) => Err("Please enter a valid number".to_string()),
    }
}
