use crate::credentials::Credentials;
use crate::error::{Result, SolutionistError};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::fs::File;
use std::path::Path;
use tracing::{debug, error, info};

pub const DEFAULT_TEMPLATE_URL: &str =
    "http://helga/scm/hg/gradle/solution-plugin/raw-file/tip/setup/template-build.gradle";

/// Somewhere a build template can be downloaded from.
pub trait TemplateSource {
    /// Writes the template to `dest` and returns its size in bytes.
    ///
    /// `dest` must stay untouched unless the download succeeded.
    fn download(&self, credentials: &Credentials, dest: &Path) -> Result<u64>;
}

/// Plain HTTP GET with basic auth.
pub struct HttpTemplateSource {
    client: Client,
    url: String,
}

impl HttpTemplateSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl TemplateSource for HttpTemplateSource {
    fn download(&self, credentials: &Credentials, dest: &Path) -> Result<u64> {
        debug!("{}", t!("fetch.requesting", url = &self.url));
        let mut resp = self
            .client
            .get(&self.url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()?;

        let status = resp.status();
        if status != StatusCode::OK {
            error!("{}", t!("fetch.bad_status", status = status));
            return Err(SolutionistError::Fetch {
                status: status.as_u16(),
            });
        }

        let mut file = File::create(dest).map_err(|source| SolutionistError::Write {
            path: dest.to_path_buf(),
            source,
        })?;
        let size = resp.copy_to(&mut file)?;
        Ok(size)
    }
}

/// Downloads the template into `dest`, logging progress.
pub fn download_template(
    source: &dyn TemplateSource,
    credentials: &Credentials,
    dest: &Path,
) -> Result<u64> {
    info!("");
    info!("{}", t!("fetch.downloading", path = dest.display()));
    let size = source.download(credentials, dest)?;
    info!("{}", t!("fetch.downloaded", size = size));
    Ok(size)
}
