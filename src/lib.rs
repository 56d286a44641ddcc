#[macro_use]
extern crate rust_i18n;

i18n!("locales");

pub mod cli;
pub mod config;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod fetch;
pub mod gradle;
pub mod logging;
pub mod path_utils;
pub mod process;
pub mod prompt;
pub mod repo;
pub mod wizard;

#[cfg(test)]
pub mod test_utils;

pub fn init_locale() {
    rust_i18n::set_locale("en");
}
