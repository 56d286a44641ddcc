use std::env;
use tracing::{info, warn};

pub const CHECKED_VARS: &[&str] = &[
    "JAVA_HOME",
    "JAVA_HOME_6",
    "JAVA_HOME_7",
    "JAVA_HOME_8",
    "GRADLE_HOME",
    "GRADLE_HOME_USER",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarStatus {
    pub key: &'static str,
    pub value: Option<String>,
}

/// Reports the build-related environment variables; unset ones are only warned about.
pub fn check_environment() -> Vec<EnvVarStatus> {
    check_environment_with(|key| env::var(key).ok())
}

pub fn check_environment_with<F>(lookup: F) -> Vec<EnvVarStatus>
where
    F: Fn(&str) -> Option<String>,
{
    info!("");
    info!("{}", t!("environment.title"));

    CHECKED_VARS
        .iter()
        .map(|&key| {
            let value = lookup(key).filter(|value| !value.is_empty());
            match &value {
                Some(value) => info!("{key:>16}: {value}"),
                None => warn!("{key:>16}: {}", t!("environment.not_set")),
            }
            EnvVarStatus { key, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_variable_in_order() {
        let statuses = check_environment_with(|key| match key {
            "JAVA_HOME" => Some("/opt/jdk".to_string()),
            "GRADLE_HOME" => Some(String::new()),
            _ => None,
        });
        let keys: Vec<_> = statuses.iter().map(|s| s.key).collect();
        assert_eq!(keys, CHECKED_VARS);
        assert_eq!(statuses[0].value.as_deref(), Some("/opt/jdk"));
        assert_eq!(statuses[4].value, None);
    }
}
