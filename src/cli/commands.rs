// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

use crate::models::{CapitalizeMode, PassphraseRequest, PasswordRequest};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Generate a password
    Password(PasswordOptions),

    /// Generate a passphrase
    Passphrase(PassphraseOptions),

    /// Score an existing password
    Strength {
        /// Text to score
        #[arg(required = true)]
        text: String,
    },

    /// Print the passphrase word list
    Words,
}

#[derive(ClapArgs, Debug)]
pub struct PasswordOptions {
    /// Number of characters (defaults to DEFAULT_PASSWORD_LENGTH)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out A-Z
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out a-z
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out 0-9
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out punctuation
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out 0, O, l, 1 and I
    #[arg(long, short = 'x')]
    pub exclude_ambiguous: bool,
}

impl PasswordOptions {
    pub fn into_request(self, default_length: usize) -> PasswordRequest {
        PasswordRequest {
            length: self.length.unwrap_or(default_length),
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_digits: !self.no_digits,
            include_symbols: !self.no_symbols,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct PassphraseOptions {
    /// Number of words
    #[arg(long, short, default_value_t = 4)]
    pub words: usize,

    /// Text placed between words
    #[arg(long, short, default_value = "-", allow_hyphen_values = true)]
    pub separator: String,

    /// Do not append a number
    #[arg(long)]
    pub no_numbers: bool,

    /// Do not append a symbol
    #[arg(long)]
    pub no_symbols: bool,

    /// Word casing: title, lower or upper
    #[arg(long, short, default_value_t = CapitalizeMode::Title)]
    pub capitalize: CapitalizeMode,
}

impl PassphraseOptions {
    pub fn into_request(self) -> PassphraseRequest {
        PassphraseRequest {
            word_count: self.words,
            separator: self.separator,
            add_numbers: !self.no_numbers,
            add_symbols: !self.no_symbols,
            capitalize: self.capitalize,
        }
    }
}
