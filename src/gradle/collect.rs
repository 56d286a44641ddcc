use super::record::{DEFAULT_INTERNAL_PROJECT_NAME, Field, GradleConfig};
use crate::error::Result;
use crate::prompt::Prompter;
use tracing::{debug, info};

/// Walks every field in prompt order and lets the user override the current value.
pub fn collect_gradle_config(prompter: &mut dyn Prompter, config: &mut GradleConfig) -> Result<()> {
    info!("{}", t!("gradle.collect.title"));
    info!("{}", t!("gradle.collect.edit_later"));
    info!("{}", t!("gradle.collect.default_hint"));

    for field in Field::ALL {
        if field == Field::InternalProjectName
            && config.internal_project_name == DEFAULT_INTERNAL_PROJECT_NAME
        {
            config.internal_project_name = config.suggested_internal_project_name();
        }

        let answer = prompter.ask(&field.label(), &field.help(), config.get(field))?;
        debug!(
            "{}",
            t!("gradle.collect.value_provided", field = field.key(), length = answer.len())
        );
        if !answer.is_empty() {
            config.set(field, answer);
        }
        info!(
            "{}",
            t!("gradle.collect.using", field = field.key(), value = config.get(field))
        );
    }

    Ok(())
}
