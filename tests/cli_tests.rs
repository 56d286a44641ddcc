use clap::Parser;
use solutionist::cli::Cli;
use std::path::PathBuf;

/// Tests that the CLI can parse basic commands correctly
#[test]
fn test_cli_basic_command_parsing() {
    // Help and version exit early
    assert!(Cli::try_parse_from(["solutionist", "--help"]).is_err());
    assert!(Cli::try_parse_from(["solutionist", "--version"]).is_err());

    let cli = Cli::try_parse_from(["solutionist"]).expect("parse");
    assert_eq!(cli.dir, PathBuf::from("."));
    assert!(cli.password.is_none());
    assert!(!cli.logfile);
    assert!(!cli.debug);
    assert!(!cli.accept_defaults);
    assert!(!cli.skip_repo);
}

/// Tests every flag of the wizard
#[test]
fn test_cli_all_flags() {
    let cli = Cli::try_parse_from([
        "solutionist",
        "--dir",
        "projects/demo",
        "--username",
        "jdoe",
        "--password",
        "secret",
        "--logfile",
        "--debug",
        "--template-url",
        "http://localhost/template-build.gradle",
        "--scm-url",
        "http://localhost/scm",
        "-C",
        "/tmp/solutionist-config",
        "--accept-defaults",
        "--skip-repo",
    ])
    .expect("parse");

    assert_eq!(cli.dir, PathBuf::from("projects/demo"));
    assert_eq!(cli.username.as_deref(), Some("jdoe"));
    assert_eq!(cli.password.as_deref(), Some("secret"));
    assert!(cli.logfile);
    assert!(cli.debug);
    assert_eq!(
        cli.template_url.as_deref(),
        Some("http://localhost/template-build.gradle")
    );
    assert_eq!(cli.scm_url.as_deref(), Some("http://localhost/scm"));
    assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/solutionist-config")));
    assert!(cli.accept_defaults);
    assert!(cli.skip_repo);
}

/// The wizard has no subcommands
#[test]
fn test_cli_rejects_subcommands() {
    assert!(Cli::try_parse_from(["solutionist", "init"]).is_err());
}
