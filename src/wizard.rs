use crate::credentials::Credentials;
use crate::environment::check_environment;
use crate::error::Result;
use crate::fetch::{TemplateSource, download_template};
use crate::gradle::BUILD_FILE;
use crate::gradle::collect::collect_gradle_config;
use crate::gradle::patcher::{PatchOutcome, patch_file};
use crate::gradle::record::GradleConfig;
use crate::process::{CommandRunner, bootstrap_commands, run_all};
use crate::prompt::Prompter;
use crate::repo::{RepoConfig, RepoHost, create_and_link};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct WizardOptions {
    pub dir: PathBuf,
    pub version_tag: String,
    pub contact_domain: String,
}

/// Everything the wizard produced on a successful run.
#[derive(Debug, Clone)]
pub struct WizardReport {
    pub gradle: GradleConfig,
    pub patch: PatchOutcome,
    pub repo_url: Option<String>,
}

/// One scaffolding run with its collaborators.
///
/// Steps run strictly in order and the first error ends the run; in particular
/// nothing is patched unless the template download succeeded.
pub struct Wizard<'a> {
    pub options: WizardOptions,
    pub credentials: Credentials,
    pub source: &'a dyn TemplateSource,
    pub prompter: &'a mut dyn Prompter,
    pub runner: &'a mut dyn CommandRunner,
    pub repo_host: Option<&'a dyn RepoHost>,
}

impl Wizard<'_> {
    pub fn run(mut self) -> Result<WizardReport> {
        check_environment();

        self.credentials.complete(self.prompter)?;

        let build_file = self.options.dir.join(BUILD_FILE);
        download_template(self.source, &self.credentials, &build_file)?;

        let mut gradle = GradleConfig::with_defaults();
        collect_gradle_config(self.prompter, &mut gradle)?;

        let patch = patch_file(&build_file, &gradle, &self.options.version_tag)?;
        info!("{}", t!("gradle.patch.done", path = build_file.display()));

        run_all(self.runner, &bootstrap_commands(&self.options.dir))?;

        let repo_url = match self.repo_host {
            Some(host) => {
                let mut repo = RepoConfig::with_defaults(
                    &gradle,
                    &self.credentials.username,
                    &self.options.contact_domain,
                );
                repo.collect(self.prompter)?;
                Some(create_and_link(
                    host,
                    &self.credentials,
                    &repo,
                    &self.options.dir,
                )?)
            }
            None => None,
        };

        Ok(WizardReport {
            gradle,
            patch,
            repo_url,
        })
    }
}
