//! Remote repository record on the SCM server and the local link to it.

use crate::credentials::Credentials;
use crate::error::{Result, SolutionistError};
use crate::gradle::record::{GradleConfig, slugify};
use crate::prompt::Prompter;
use reqwest::blocking::Client;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_SCM_URL: &str = "http://helga/scm";
pub const DEFAULT_CONTACT_DOMAIN: &str = "topdesk.com";
pub const REPO_TYPE: &str = "hg";

/// Body of the repository creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub contact: String,
    pub description: String,
    pub public: String,
}

impl RepoConfig {
    pub fn with_defaults(gradle: &GradleConfig, username: &str, contact_domain: &str) -> Self {
        Self {
            name: suggest_repo_name(gradle, username),
            kind: REPO_TYPE.to_string(),
            contact: format!("{username}@{contact_domain}"),
            description: gradle.description.clone(),
            public: "true".to_string(),
        }
    }

    pub fn collect(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        info!("{}", t!("repo.collect.title"));
        info!("{}", t!("gradle.collect.default_hint"));

        let answer = prompter.ask("NAME", &t!("repo.collect.name_help"), &self.name)?;
        if !answer.is_empty() {
            self.name = answer;
        }
        info!("{}", t!("gradle.collect.using", field = "name", value = &self.name));
        Ok(())
    }
}

/// Repository path suggested by the Gradle group of the project.
pub fn suggest_repo_name(gradle: &GradleConfig, username: &str) -> String {
    let project = slugify(&gradle.project_full_name);
    let internal = &gradle.internal_project_name;
    match gradle.group.rsplit('.').next().unwrap_or_default() {
        "customer" => {
            let customer = slugify(&gradle.customer_name);
            if gradle.customer_reference_number.is_empty() {
                format!("customers/{customer}/{project}")
            } else {
                format!(
                    "customers/{}_{customer}/{project}",
                    gradle.customer_reference_number
                )
            }
        }
        "addon" => format!("add-ons/{project}"),
        "prototype" => format!("prototypes/{project}"),
        "tool" => format!("tools/{project}"),
        "lib" => format!("resources/{internal}"),
        "event" => format!("events/{internal}"),
        "product" => format!("products/{internal}"),
        _ => format!("sandbox/{username}/{project}"),
    }
}

pub trait RepoHost {
    fn create(&self, credentials: &Credentials, repo: &RepoConfig) -> Result<()>;

    /// Pull/push URL of a repository created by this host.
    fn repo_url(&self, name: &str) -> String;
}

/// SCM-Manager style REST endpoint.
pub struct HttpRepoHost {
    client: Client,
    base_url: String,
}

impl HttpRepoHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/rest/repositories", self.base_url)
    }
}

impl RepoHost for HttpRepoHost {
    fn create(&self, credentials: &Credentials, repo: &RepoConfig) -> Result<()> {
        debug!("{}", serde_json::to_string_pretty(repo)?);
        let resp = self
            .client
            .post(self.endpoint())
            .basic_auth(&credentials.username, Some(&credentials.password))
            .json(repo)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|e| e.to_string());
            return Err(SolutionistError::RepoCreation {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    fn repo_url(&self, name: &str) -> String {
        format!("{}/{REPO_TYPE}/{name}", self.base_url)
    }
}

/// Points the local repository's default path at `url` by writing `.hg/hgrc`.
pub fn link_repo(dir: &Path, url: &str) -> Result<PathBuf> {
    let hgrc = dir.join(".hg").join("hgrc");
    let content = ["[paths]".to_string(), format!("default = {url}")].join("\n");
    fs::write(&hgrc, content).map_err(|source| SolutionistError::Write {
        path: hgrc.clone(),
        source,
    })?;
    info!("{}", t!("repo.linked", path = hgrc.display()));
    Ok(hgrc)
}

/// Creates the remote repository and links the project to it.
pub fn create_and_link(
    host: &dyn RepoHost,
    credentials: &Credentials,
    repo: &RepoConfig,
    dir: &Path,
) -> Result<String> {
    host.create(credentials, repo)?;
    let url = host.repo_url(&repo.name);
    info!("{}", t!("repo.created", url = &url));
    link_repo(dir, &url)?;
    Ok(url)
}
