// src/client/form.rs
use log::{error, info};

use super::clipboard::Clipboard;
use super::error::{ClientError, Result};
use super::http::GeneratorClient;
use crate::generators::{CharacterClass, GeneratorError};
use crate::models::{GenerationRequest, PasswordOptions};

pub const DEFAULT_LENGTH: i64 = 12;
pub const COPIED_NOTICE: &str = "Password copied to clipboard!";

/// Everything the form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub length: i64,
    pub options: PasswordOptions,
    pub generated_password: String,
    pub error_message: String,
    pub popup_visible: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            options: PasswordOptions::default(),
            generated_password: String::new(),
            error_message: String::new(),
            popup_visible: false,
        }
    }
}

/// Owns the form state and drives the generator and clipboard on its behalf.
pub struct FormController<C, B> {
    state: FormState,
    client: C,
    clipboard: B,
}

impl<C, B> FormController<C, B>
where
    C: GeneratorClient,
    B: Clipboard,
{
    pub fn new(client: C, clipboard: B) -> Self {
        Self {
            state: FormState::default(),
            client,
            clipboard,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_length(&mut self, length: i64) {
        self.state.length = length;
    }

    pub fn set_option(&mut self, class: CharacterClass, enabled: bool) {
        class.set_in(&mut self.state.options, enabled);
        if self.state.options.any_enabled() {
            self.state.error_message.clear();
        }
    }

    /// Ask the generator for a password. No request is sent when every
    /// option is off.
    pub async fn request_generation(&mut self) -> Result<&str> {
        if !self.state.options.any_enabled() {
            let message = GeneratorError::NoOptionsSelected.to_string();
            self.state.error_message = message.clone();
            return Err(ClientError::Validation(message));
        }

        let request = GenerationRequest {
            length: self.state.length,
            options: self.state.options,
        };

        match self.client.generate(&request).await {
            Ok(result) => {
                self.state.generated_password = result.password;
                self.state.error_message.clear();
                Ok(self.state.generated_password.as_str())
            }
            Err(e) => {
                error!("Error generating password: {}", e);
                self.state.error_message = e.to_string();
                Err(e)
            }
        }
    }

    /// Copy the current password. Failures are logged and otherwise ignored.
    pub fn copy_to_clipboard(&mut self) {
        if self.state.generated_password.is_empty() {
            return;
        }

        match self.clipboard.set_text(&self.state.generated_password) {
            Ok(()) => {
                info!("📋 Password copied to clipboard");
                self.state.popup_visible = true;
            }
            Err(e) => error!("Error copying password to clipboard: {}", e),
        }
    }

    pub fn dismiss_popup(&mut self) {
        self.state.popup_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::models::GenerationResult;

    enum Reply {
        Password(&'static str),
        Rejected(&'static str),
    }

    struct MockClient {
        reply: Reply,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl GeneratorClient for MockClient {
        async fn generate(&self, _request: &GenerationRequest) -> Result<GenerationResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Reply::Password(p) => Ok(GenerationResult { password: p.to_string() }),
                Reply::Rejected(m) => Err(ClientError::Rejected {
                    status: 400,
                    message: m.to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        broken: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.broken {
                return Err(ClientError::Clipboard("no display".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn controller(reply: Reply, clipboard: MemoryClipboard) -> (FormController<MockClient, MemoryClipboard>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let client = MockClient {
            reply,
            calls: Arc::clone(&calls),
        };
        (FormController::new(client, clipboard), calls)
    }

    fn disable_all<C: GeneratorClient, B: Clipboard>(form: &mut FormController<C, B>) {
        for class in CharacterClass::ALL {
            form.set_option(class, false);
        }
    }

    #[tokio::test]
    async fn no_options_fails_without_network_call() {
        let (mut form, calls) = controller(Reply::Password("unused"), MemoryClipboard::default());
        form.set_length(8);
        disable_all(&mut form);

        let err = form.request_generation().await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(form.state().error_message, "Please choose at least one option.");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn enabling_an_option_clears_the_error() {
        let (mut form, _) = controller(Reply::Password("unused"), MemoryClipboard::default());
        disable_all(&mut form);
        let _ = form.request_generation().await;
        assert!(!form.state().error_message.is_empty());

        form.set_option(CharacterClass::Special, true);
        assert!(form.state().error_message.is_empty());
    }

    #[tokio::test]
    async fn success_stores_password_and_clears_error() {
        let (mut form, calls) = controller(Reply::Password("Ab3$Ab3$Ab3$"), MemoryClipboard::default());
        disable_all(&mut form);
        let _ = form.request_generation().await;
        form.set_option(CharacterClass::Lowercase, true);

        let password = form.request_generation().await.unwrap().to_string();
        assert_eq!(password, "Ab3$Ab3$Ab3$");
        assert_eq!(form.state().generated_password, "Ab3$Ab3$Ab3$");
        assert!(form.state().error_message.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_message_is_stored_verbatim() {
        let (mut form, _) = controller(Reply::Rejected("Password length must be between 1 and 256 characters (got 0)"), MemoryClipboard::default());
        form.set_length(0);

        assert!(form.request_generation().await.is_err());
        assert_eq!(
            form.state().error_message,
            "Password length must be between 1 and 256 characters (got 0)"
        );
        assert!(form.state().generated_password.is_empty());
    }

    #[tokio::test]
    async fn copy_shows_popup_until_dismissed() {
        let (mut form, _) = controller(Reply::Password("s3cret!"), MemoryClipboard::default());
        form.request_generation().await.unwrap();

        form.copy_to_clipboard();
        assert!(form.state().popup_visible);
        assert_eq!(form.clipboard.contents.as_deref(), Some("s3cret!"));

        form.dismiss_popup();
        assert!(!form.state().popup_visible);
    }

    #[tokio::test]
    async fn clipboard_failure_leaves_state_unchanged() {
        let clipboard = MemoryClipboard {
            broken: true,
            ..MemoryClipboard::default()
        };
        let (mut form, _) = controller(Reply::Password("s3cret!"), clipboard);
        form.request_generation().await.unwrap();
        let before = form.state().clone();

        form.copy_to_clipboard();
        assert_eq!(form.state(), &before);
    }

    #[test]
    fn copy_without_password_is_noop() {
        let (mut form, _) = controller(Reply::Password("unused"), MemoryClipboard::default());
        form.copy_to_clipboard();
        assert!(!form.state().popup_visible);
        assert!(form.clipboard.contents.is_none());
    }
}
