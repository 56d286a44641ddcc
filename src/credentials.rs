use crate::error::Result;
use crate::prompt::Prompter;
use std::fmt;
use tracing::{debug, warn};

/// Basic-auth credentials shared by the template download and the repository host.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Prompts for whichever half is still empty.
    pub fn complete(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        if self.username.is_empty() {
            warn!("{}", t!("credentials.username_needed"));
            self.username = prompter.ask(&t!("credentials.username_label"), "", "")?;
            debug!(
                "{}",
                t!("credentials.username_provided", username = &self.username)
            );
        }

        if self.password.is_empty() {
            warn!("{}", t!("credentials.password_needed"));
            self.password = prompter.ask_secret(&t!("credentials.password_label"))?;
            debug!(
                "{}",
                t!("credentials.password_provided", length = self.password.len())
            );
        }

        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &mask(&self.password))
            .finish()
    }
}

/// One `*` per character.
pub fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

/// Account name without a `DOMAIN\` prefix.
pub fn strip_domain(account: &str) -> &str {
    account.rsplit('\\').next().unwrap_or(account)
}

/// Username of the logged in OS account, if any.
pub fn default_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .map(|account| strip_domain(account.trim()).to_string())
        .filter(|name| !name.is_empty())
}
