// src/cli/menu.rs
use inquire::{Confirm, CustomType, MultiSelect};
use std::error::Error;

use crate::client::form::COPIED_NOTICE;
use crate::client::{Clipboard, FormController, GeneratorClient};
use crate::generators::CharacterClass;

pub async fn run_form_menu<C: GeneratorClient, B: Clipboard>(form: &mut FormController<C, B>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║    🔐 STRONG PASSWORD GENERATOR      ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let length = CustomType::<i64>::new("Length:")
            .with_default(form.state().length)
            .with_error_message("Please type a whole number")
            .prompt()?;
        form.set_length(length);

        let labels: Vec<&str> = CharacterClass::ALL.iter().map(|class| class.label()).collect();
        let selected_by_default: Vec<usize> = CharacterClass::ALL
            .iter()
            .enumerate()
            .filter(|(_, class)| class.enabled_in(&form.state().options))
            .map(|(i, _)| i)
            .collect();

        let chosen = MultiSelect::new("Character types:", labels)
            .with_default(&selected_by_default)
            .prompt()?;

        for class in CharacterClass::ALL {
            form.set_option(class, chosen.contains(&class.label()));
        }

        match form.request_generation().await {
            Ok(password) => println!("\nGenerated Password: {}\n", password),
            Err(_) => println!("❌ {}", form.state().error_message),
        }

        if !form.state().generated_password.is_empty() {
            let copy = Confirm::new("Copy to clipboard?")
                .with_default(true)
                .prompt()?;

            if copy {
                form.copy_to_clipboard();
                if form.state().popup_visible {
                    println!("✅ {}", COPIED_NOTICE);
                    form.dismiss_popup();
                }
            }
        }

        let again = Confirm::new("Generate another password?")
            .with_default(true)
            .prompt()?;

        if !again {
            break;
        }
    }

    Ok(())
}
