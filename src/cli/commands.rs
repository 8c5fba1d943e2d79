// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::models::PasswordOptions;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the password generator API server
    Serve {
        /// Address to bind (overrides PASSGEN_ADDRESS)
        #[arg(long)]
        address: Option<String>,

        /// Port to bind (overrides PASSGEN_PORT)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Request a single password from the server
    Generate {
        /// Password length
        #[arg(long, short, default_value_t = 12, allow_negative_numbers = true)]
        length: i64,

        #[command(flatten)]
        classes: ClassFlags,

        /// Copy the password to the clipboard
        #[arg(long, short)]
        copy: bool,

        /// Generator server base URL (overrides PASSGEN_SERVER_URL)
        #[arg(long, short)]
        server: Option<String>,
    },

    /// Interactive password form
    Form {
        /// Generator server base URL (overrides PASSGEN_SERVER_URL)
        #[arg(long, short)]
        server: Option<String>,
    },
}

/// Every class is on unless switched off.
#[derive(Args, Debug, Clone, Copy)]
pub struct ClassFlags {
    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,
}

impl ClassFlags {
    pub fn to_options(self) -> PasswordOptions {
        PasswordOptions {
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            numbers: !self.no_numbers,
            special: !self.no_special,
        }
    }
}
