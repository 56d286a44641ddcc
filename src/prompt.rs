use crate::error::{Result, SolutionistError};
use inquire::{Password, PasswordDisplayMode, Text};

/// Source of answers for the wizard's questions.
pub trait Prompter {
    /// Asks for a value; an empty answer keeps `current`.
    fn ask(&mut self, label: &str, help: &str, current: &str) -> Result<String>;

    fn ask_secret(&mut self, label: &str) -> Result<String>;
}

/// Terminal prompts backed by inquire.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, label: &str, help: &str, current: &str) -> Result<String> {
        let help = help.trim();
        let mut prompt = Text::new(label).with_default(current);
        if !help.is_empty() {
            prompt = prompt.with_help_message(help);
        }
        Ok(prompt.prompt()?)
    }

    fn ask_secret(&mut self, label: &str) -> Result<String> {
        Ok(Password::new(label)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()?)
    }
}

/// Answers every question with the value already in place.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&mut self, _label: &str, _help: &str, current: &str) -> Result<String> {
        Ok(current.to_string())
    }

    fn ask_secret(&mut self, label: &str) -> Result<String> {
        Err(SolutionistError::Config {
            message: t!("errors.secret_required", label = label).to_string(),
        })
    }
}
