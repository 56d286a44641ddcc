use solutionist::credentials::Credentials;
use solutionist::error::{Result, SolutionistError};
use solutionist::fetch::TemplateSource;
use solutionist::process::{CommandRunner, CommandSpec};
use solutionist::prompt::Prompter;
use solutionist::repo::{RepoConfig, RepoHost};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build file samples
#[allow(dead_code)]
pub mod templates {
    /// Shape of the template served by the solution plugin repository
    pub const TEMPLATE_BUILD_GRADLE: &str = r#"buildscript {
    repositories {
        maven { url 'http://nexus/content/groups/public' }
    }
    dependencies {
        classpath 'com.topdesk.solution:solution-plugin:+'
    }
}

version     '0.0.0'
group       'com.topdesk.solution.template'
description 'Template'

apply plugin: 'solution'

dependencies {
    solution 'com.topdesk:tas-api:+'
}
"#;

    pub const PLAIN_BUILD_GRADLE: &str = "plugins {\n  id 'x'\n}\nversion '0.1'\ndependencies {\n  compile 'y'\n}";

    pub const NO_ANCHORS: &str = "apply plugin: 'java'\n\nrepositories {\n    mavenCentral()\n}\n";
}

pub struct TestEnvironment {
    // TempDir is kept to ensure cleanup happens when TestEnvironment is dropped
    #[allow(dead_code)]
    pub(crate) temp_dir: TempDir,
    pub work_dir: PathBuf,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().to_path_buf();
        Self { temp_dir, work_dir }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    #[allow(dead_code)]
    pub fn create_file(&self, filename: &str, content: &str) -> PathBuf {
        let file_path = self.work_dir.join(filename);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Serves a fixed answer instead of going over the network.
#[allow(dead_code)]
pub enum FakeSource {
    Ok(&'static str),
    Status(u16),
}

impl TemplateSource for FakeSource {
    fn download(&self, _credentials: &Credentials, dest: &Path) -> Result<u64> {
        match self {
            FakeSource::Ok(body) => {
                fs::write(dest, body)?;
                Ok(body.len() as u64)
            }
            FakeSource::Status(status) => Err(SolutionistError::Fetch { status: *status }),
        }
    }
}

/// Answers prompts by label; anything unknown is left empty.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedPrompter {
    pub answers: HashMap<String, String>,
    pub secret: Option<String>,
    pub asked: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn with_answers(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, label: &str, _help: &str, _current: &str) -> Result<String> {
        self.asked.push(label.to_string());
        Ok(self.answers.get(label).cloned().unwrap_or_default())
    }

    fn ask_secret(&mut self, label: &str) -> Result<String> {
        self.asked.push(label.to_string());
        self.secret
            .clone()
            .ok_or_else(|| SolutionistError::Custom("no secret scripted".to_string()))
    }
}

/// Records commands; `hg init` creates the `.hg` directory like the real thing.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: Vec<String>,
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<()> {
        self.commands.push(command.display());
        if command.program == "hg" && command.args.first().map(String::as_str) == Some("init") {
            let dir = command.args.get(1).map(PathBuf::from).unwrap_or_default();
            fs::create_dir_all(dir.join(".hg"))?;
        }
        Ok(())
    }
}

#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingRepoHost {
    pub created: RefCell<Vec<RepoConfig>>,
    pub reject_with: Option<u16>,
}

impl RepoHost for RecordingRepoHost {
    fn create(&self, _credentials: &Credentials, repo: &RepoConfig) -> Result<()> {
        if let Some(status) = self.reject_with {
            return Err(SolutionistError::RepoCreation {
                status,
                body: "rejected".to_string(),
            });
        }
        self.created.borrow_mut().push(repo.clone());
        Ok(())
    }

    fn repo_url(&self, name: &str) -> String {
        format!("http://scm.test/hg/{name}")
    }
}
