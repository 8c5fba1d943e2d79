// src/cli/handlers.rs
use std::error::Error;

use crate::api;
use crate::client::form::COPIED_NOTICE;
use crate::client::{Clipboard, FormController, GeneratorClient, HttpGeneratorClient, SystemClipboard};
use crate::core::config::Config;
use crate::generators::{CharacterClass, PasswordGenerator};
use crate::models::PasswordOptions;

// Handlers for CLI commands
pub async fn handle_serve(mut config: Config, address: Option<String>, port: Option<u16>) -> std::io::Result<()> {
    if let Some(address) = address {
        config.web_address = address;
    }
    if let Some(port) = port {
        config.web_port = port;
    }

    let generator = PasswordGenerator::new(config.max_password_length);
    log::info!(
        "🔒 Starting passgen API on {}:{} (max length {})",
        config.web_address, config.web_port, config.max_password_length
    );
    api::start_server(&config, generator).await
}

pub fn build_form(config: &Config, server: Option<String>) -> Result<FormController<HttpGeneratorClient, SystemClipboard>, Box<dyn Error>> {
    let base_url = server.unwrap_or_else(|| config.server_url.clone());
    let client = HttpGeneratorClient::new(&base_url, config.request_timeout)?;
    log::debug!("Using generator endpoint {}", client.endpoint());
    Ok(FormController::new(client, SystemClipboard))
}

pub fn apply_options<C: GeneratorClient, B: Clipboard>(form: &mut FormController<C, B>, options: &PasswordOptions) {
    for class in CharacterClass::ALL {
        form.set_option(class, class.enabled_in(options));
    }
}

pub async fn handle_generate<C: GeneratorClient, B: Clipboard>(
    form: &mut FormController<C, B>,
    length: i64,
    options: PasswordOptions,
    copy: bool,
) -> Result<String, Box<dyn Error>> {
    form.set_length(length);
    apply_options(form, &options);

    let password = form.request_generation().await?.to_string();
    println!("{}", password);

    if copy {
        form.copy_to_clipboard();
        if form.state().popup_visible {
            eprintln!("📋 {}", COPIED_NOTICE);
            form.dismiss_popup();
        } else {
            eprintln!("⚠️ Could not copy the password to the clipboard");
        }
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::error::Result;
    use crate::client::error::ClientError;
    use crate::models::{GenerationRequest, GenerationResult};
    use async_trait::async_trait;

    // Answers with a password built from the request so the wiring is visible
    struct EchoClient;

    #[async_trait]
    impl GeneratorClient for EchoClient {
        async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
            let c = if request.options.numbers { '7' } else { 'x' };
            Ok(GenerationResult {
                password: std::iter::repeat(c).take(request.length as usize).collect(),
            })
        }
    }

    struct NoClipboard;

    impl Clipboard for NoClipboard {
        fn set_text(&mut self, _text: &str) -> Result<()> {
            Err(ClientError::Clipboard("unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn generate_passes_length_and_options() {
        let mut form = FormController::new(EchoClient, NoClipboard);
        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            numbers: true,
            special: false,
        };

        let password = handle_generate(&mut form, 5, options, false).await.unwrap();
        assert_eq!(password, "77777");
        assert_eq!(form.state().options, options);
    }

    #[tokio::test]
    async fn generate_survives_clipboard_failure() {
        let mut form = FormController::new(EchoClient, NoClipboard);
        let password = handle_generate(&mut form, 3, PasswordOptions::default(), true).await.unwrap();
        assert_eq!(password.len(), 3);
        assert!(!form.state().popup_visible);
    }

    #[tokio::test]
    async fn generate_reports_missing_options() {
        let mut form = FormController::new(EchoClient, NoClipboard);
        let err = handle_generate(&mut form, 8, PasswordOptions::none(), false).await.unwrap_err();
        assert_eq!(err.to_string(), "Please choose at least one option.");
    }
}
