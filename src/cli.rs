use crate::config::{Settings, prepare_target_dir, resolve_config_dir};
use crate::credentials::{Credentials, default_username, mask};
use crate::fetch::HttpTemplateSource;
use crate::logging::{self, LOG_FILE};
use crate::process::SystemRunner;
use crate::prompt::{DefaultsPrompter, InquirePrompter, Prompter};
use crate::repo::{HttpRepoHost, RepoHost};
use crate::wizard::{Wizard, WizardOptions};
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target directory to create the project in
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Username used for authentication (default: current OS user)
    #[arg(long, env = "SOLUTIONIST_USERNAME")]
    pub username: Option<String>,

    /// Password used for authentication (asked for when missing)
    #[arg(long)]
    pub password: Option<String>,

    /// Write the log to solutionist.log in the project directory
    #[arg(long)]
    pub logfile: bool,

    /// Show debug information
    #[arg(long)]
    pub debug: bool,

    /// URL of the build.gradle template
    #[arg(long, env = "SOLUTIONIST_TEMPLATE_URL")]
    pub template_url: Option<String>,

    /// Base URL of the SCM server that hosts the new repository
    #[arg(long, env = "SOLUTIONIST_SCM_URL")]
    pub scm_url: Option<String>,

    /// Directory holding settings.toml (default: ~/.config/solutionist)
    #[arg(short = 'C', long = "config-dir")]
    pub config_dir: Option<PathBuf>,

    /// Accept every default instead of prompting
    #[arg(long)]
    pub accept_defaults: bool,

    /// Do not create a remote repository
    #[arg(long)]
    pub skip_repo: bool,
}

impl Cli {
    /// Argument dump for debug output; the password is masked.
    pub fn describe(&self) -> String {
        [
            format!("dir={}", self.dir.display()),
            format!("username={}", self.username.as_deref().unwrap_or_default()),
            format!("password={}", mask(self.password.as_deref().unwrap_or_default())),
            format!("logfile={}", self.logfile),
            format!("debug={}", self.debug),
            format!("accept_defaults={}", self.accept_defaults),
            format!("skip_repo={}", self.skip_repo),
        ]
        .join("\n")
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_with(cli)
}

pub fn run_with(cli: Cli) -> Result<()> {
    let dir = prepare_target_dir(&cli.dir)?;
    init_logging(cli.debug, cli.logfile, &dir);
    show_info(&cli);

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let settings = Settings::load(&config_dir)?;
    debug!("{}", t!("cli.settings_loaded", path = config_dir.display()));

    let template_url = cli.template_url.clone().unwrap_or(settings.template_url);
    let scm_url = cli.scm_url.clone().unwrap_or(settings.scm_url);

    let credentials = Credentials::new(
        cli.username.clone().or_else(default_username).unwrap_or_default(),
        cli.password.clone().unwrap_or_default(),
    );

    let source = HttpTemplateSource::new(template_url);
    let repo_host = HttpRepoHost::new(scm_url);
    let mut inquire_prompter = InquirePrompter;
    let mut defaults_prompter = DefaultsPrompter;
    let prompter: &mut dyn Prompter = if cli.accept_defaults {
        &mut defaults_prompter
    } else {
        &mut inquire_prompter
    };
    let mut runner = SystemRunner;

    let wizard = Wizard {
        options: WizardOptions {
            dir,
            version_tag: VERSION.to_string(),
            contact_domain: settings.contact_domain,
        },
        credentials,
        source: &source,
        prompter,
        runner: &mut runner,
        repo_host: if cli.skip_repo {
            None
        } else {
            Some(&repo_host as &dyn RepoHost)
        },
    };
    let report = wizard.run()?;

    if let Some(url) = report.repo_url {
        info!("{}", t!("cli.finished_with_repo", url = url));
    } else {
        info!("{}", t!("cli.finished"));
    }
    Ok(())
}

fn init_logging(debug: bool, logfile: bool, dir: &Path) {
    let log_path = logfile.then(|| dir.join(LOG_FILE));
    if let Err(e) = logging::init(debug, log_path.as_deref()) {
        if log_path.is_some() && logging::init(debug, None).is_ok() {
            warn!("{}", t!("cli.logfile_failed", error = e));
        } else {
            eprintln!("{}", t!("cli.logging_failed", error = e));
        }
    }
}

fn show_info(cli: &Cli) {
    info!("{}", t!("cli.banner", version = VERSION));
    info!("========================================");
    debug!("");
    debug!("{}", t!("cli.parameters"));
    debug!("{}", cli.describe());
}
