use crate::error::{Result, SolutionistError};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::info;

pub const COMMIT_MESSAGE: &str = "Start a new Gradle project";

/// One external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub trait CommandRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<()>;
}

/// Runs commands with the wizard's own stdin/stdout/stderr.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<()> {
        info!("{}", t!("process.executing", command = command.display()));

        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| SolutionistError::Command {
                command: command.display(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(SolutionistError::Command {
                command: command.display(),
                reason: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Gradle wrapper/init followed by an initial Mercurial commit.
pub fn bootstrap_commands(dir: &Path) -> Vec<CommandSpec> {
    let dir = dir.display().to_string();
    let project_flag = format!("-p{dir}");
    vec![
        CommandSpec::new("gradle", [project_flag.as_str(), "wrapper"]),
        CommandSpec::new("gradle", [project_flag.as_str(), "init"]),
        CommandSpec::new("hg", ["init", dir.as_str()]),
        CommandSpec::new("hg", ["addremove", dir.as_str()]),
        CommandSpec::new("hg", ["commit", "-m", COMMIT_MESSAGE, dir.as_str()]),
    ]
}

pub fn run_all(runner: &mut dyn CommandRunner, commands: &[CommandSpec]) -> Result<()> {
    for command in commands {
        runner.run(command)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_order() {
        let commands = bootstrap_commands(Path::new("/work/demo"));
        let rendered: Vec<_> = commands.iter().map(CommandSpec::display).collect();
        assert_eq!(
            rendered,
            vec![
                "gradle -p/work/demo wrapper",
                "gradle -p/work/demo init",
                "hg init /work/demo",
                "hg addremove /work/demo",
                "hg commit -m Start a new Gradle project /work/demo",
            ]
        );
        assert_eq!(commands[4].args[2], COMMIT_MESSAGE);
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let err = SystemRunner
            .run(&CommandSpec::new("false", Vec::<String>::new()))
            .unwrap_err();
        assert!(matches!(err, SolutionistError::Command { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn successful_command() {
        SystemRunner
            .run(&CommandSpec::new("true", Vec::<String>::new()))
            .unwrap();
    }

    #[test]
    fn missing_program_is_an_error() {
        let err = SystemRunner
            .run(&CommandSpec::new("solutionist-no-such-binary", ["x"]))
            .unwrap_err();
        assert!(err.to_string().contains("solutionist-no-such-binary"));
    }

    #[test]
    fn run_all_stops_at_first_failure() {
        struct Failing {
            seen: Vec<String>,
        }
        impl CommandRunner for Failing {
            fn run(&mut self, command: &CommandSpec) -> Result<()> {
                self.seen.push(command.program.clone());
                if command.program == "hg" {
                    return Err(SolutionistError::Command {
                        command: command.display(),
                        reason: "exit status: 1".to_string(),
                    });
                }
                Ok(())
            }
        }
        let mut runner = Failing { seen: Vec::new() };
        let commands = bootstrap_commands(Path::new("d"));
        assert!(run_all(&mut runner, &commands).is_err());
        assert_eq!(runner.seen, vec!["gradle", "gradle", "hg"]);
    }
}
