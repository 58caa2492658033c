use clap::Parser;
use reqgen::{
    cli::{Args, Command, SummaryArg},
    config::{load_config_with_env_prefix, CliArgs},
    models::config::SummaryFormat,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from([
        "reqgen",
        "src",
        "--output",
        "deps.txt",
        "--exclude",
        ".venv",
        "--exclude",
        "build",
        "--max-depth",
        "4",
        "--suffix",
        ".pyi",
        "--pip",
        "pip3",
        "--format",
        "json",
        "--no-colors",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("src")));
    assert_eq!(args.output, Some(PathBuf::from("deps.txt")));
    assert_eq!(args.exclude, vec![".venv".to_string(), "build".to_string()]);
    assert_eq!(args.max_depth, Some(4));
    assert_eq!(args.suffix.as_deref(), Some(".pyi"));
    assert_eq!(args.pip.as_deref(), Some("pip3"));
    assert_eq!(args.format, Some(SummaryArg::Json));
    assert!(args.no_colors);
    assert!(!args.no_progress);
}

#[test]
fn test_cli_help_and_version_exit_early() {
    let err = Args::try_parse_from(["reqgen", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

    let err = Args::try_parse_from(["reqgen", "-V"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn test_cli_rejects_second_positional() {
    assert!(Args::try_parse_from(["reqgen", "a", "b"]).is_err());
}

#[test]
fn test_cli_init_command() {
    let args = Args::parse_from(["reqgen", "--init"]);
    assert!(matches!(Command::from_args(args), Command::Init));
}

#[test]
fn test_cli_flags_override_config_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("reqgen.toml");
    fs::write(
        &config_path,
        r#"
scan_path = "from-file"
output_file = "file-requirements.txt"
max_depth = 3
summary_format = "csv"
"#,
    )
    .unwrap();

    let args = Args::parse_from([
        "reqgen",
        "from-cli",
        "--config",
        config_path.to_str().unwrap(),
        "--format",
        "text",
    ]);

    let settings =
        load_config_with_env_prefix(CliArgs::from(&args), "REQGEN_CLI_TEST_UNSET").unwrap();

    assert_eq!(settings.scan_path, PathBuf::from("from-cli"));
    assert_eq!(settings.output_file, PathBuf::from("file-requirements.txt"));
    assert_eq!(settings.max_depth, Some(3));
    assert_eq!(settings.summary_format, SummaryFormat::Text);
}

#[test]
fn test_cli_missing_config_file() {
    let args = Args::parse_from(["reqgen", "--config", "/definitely/not/here.toml"]);
    let err = load_config_with_env_prefix(CliArgs::from(&args), "REQGEN_CLI_TEST_UNSET")
        .unwrap_err();

    assert!(err.is_critical());
    assert!(err.user_message().contains("here.toml"));
}
