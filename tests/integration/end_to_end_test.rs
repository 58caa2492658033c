//! End-to-end tests for reqgen
//!
//! These tests run the whole pipeline against real directory trees, with the
//! package manager replaced by a canned freeze listing. The binary tests at
//! the bottom exercise exit codes and console output.

use reqgen::{
    core::{Generator, PackageSource, Stage},
    error::{ReqgenError, Result},
    models::{config::Settings, package::InstalledPackages},
    output::ProgressReporter,
    parsers::parse_freeze_output,
};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Package source that returns a fixed freeze listing
struct CannedFreeze(&'static str);

impl PackageSource for CannedFreeze {
    fn installed_packages(&self) -> Result<InstalledPackages> {
        Ok(parse_freeze_output(self.0))
    }

    fn describe(&self) -> String {
        "canned freeze".to_string()
    }
}

fn settings_for(scan: &Path, output: &Path) -> Settings {
    Settings {
        scan_path: scan.to_path_buf(),
        output_file: output.to_path_buf(),
        show_progress: false,
        ..Settings::default()
    }
}

fn run(settings: Settings, listing: &'static str) -> Result<reqgen::GenerationReport> {
    Generator::new(settings)
        .with_source(CannedFreeze(listing))
        .run(&ProgressReporter::silent())
}

#[test]
fn test_scenario_a_matches_in_canonical_order() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("app.py"), "import requests\nfrom flask import Flask\n").unwrap();
    let output = temp_dir.path().join("requirements.txt");

    let report = run(
        settings_for(&project, &output),
        "Flask==2.3.2\nrequests==2.31.0\nunrelated==1.0\n",
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Flask==2.3.2\nrequests==2.31.0\n"
    );
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.installed_count, 3);
    assert!(report.unmatched_modules.is_empty());
}

#[test]
fn test_scenario_b_empty_directory() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("empty");
    fs::create_dir(&project).unwrap();
    let output = temp_dir.path().join("requirements.txt");

    let report = run(settings_for(&project, &output), "requests==2.31.0\n").unwrap();

    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
    assert_eq!(report.files_scanned, 0);
    assert!(report.no_modules_detected());
    assert!(!report.has_requirements());
}

#[test]
fn test_scenario_c_alias_is_ignored() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("analysis.py"), "import pandas as pd\n").unwrap();
    let output = temp_dir.path().join("requirements.txt");

    let report = run(settings_for(&project, &output), "pandas==2.1.0\n").unwrap();

    assert_eq!(report.modules_found, vec!["pandas".to_string()]);
    assert_eq!(fs::read_to_string(&output).unwrap(), "pandas==2.1.0\n");
}

#[test]
fn test_scenario_d_missing_directory() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("does-not-exist");
    let output = temp_dir.path().join("requirements.txt");

    let mut generator = Generator::new(settings_for(&missing, &output))
        .with_source(CannedFreeze("six==1.16.0\n"));
    let err = generator.run(&ProgressReporter::silent()).unwrap_err();

    assert!(matches!(err, ReqgenError::ScanPathNotFound { .. }));
    assert!(err.user_message().contains("does-not-exist"));
    assert_eq!(generator.stage(), Stage::Scanning);
    assert!(!output.exists());
}

#[test]
fn test_scenario_e_unmatched_module_is_skipped() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("main.py"), "import requests\nimport my_local_helpers\n").unwrap();
    let output = temp_dir.path().join("requirements.txt");

    let report = run(settings_for(&project, &output), "requests==2.31.0\n").unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "requests==2.31.0\n");
    assert_eq!(report.unmatched_modules, vec!["my_local_helpers".to_string()]);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped_with_warning() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();
    std::os::unix::fs::symlink(project.join("gone.py"), project.join("broken.py")).unwrap();
    fs::write(project.join("binary.py"), b"\xff\xfe\nimport six\n").unwrap();
    fs::write(project.join("good.py"), "import requests\n").unwrap();
    let output = temp_dir.path().join("requirements.txt");

    let report = run(
        settings_for(&project, &output),
        "requests==2.31.0\nsix==1.16.0\n",
    )
    .unwrap();

    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path, project.join("broken.py"));
    assert!(report.warnings[0].message.contains("broken.py"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "requests==2.31.0\nsix==1.16.0\n"
    );
}

#[test]
fn test_nested_tree_with_exclusions() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir_all(project.join("pkg/sub")).unwrap();
    fs::create_dir_all(project.join(".venv/lib")).unwrap();
    fs::write(project.join("pkg/__init__.py"), "from yaml_include import Loader\n").unwrap();
    fs::write(project.join("pkg/sub/core.py"), "import numpy.linalg\n").unwrap();
    fs::write(project.join(".venv/lib/site.py"), "import django\n").unwrap();
    fs::write(project.join("README.md"), "import requests\n").unwrap();
    let output = temp_dir.path().join("requirements.txt");

    let mut settings = settings_for(&project, &output);
    settings.exclude_patterns = vec![".venv".to_string()];

    let report = run(
        settings,
        "Django==4.2\nnumpy==1.26.0\nrequests==2.31.0\nyaml-include==1.3\n",
    )
    .unwrap();

    assert_eq!(report.files_scanned, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "numpy==1.26.0\nyaml-include==1.3\n"
    );
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("app.py"), "import six\n").unwrap();
    let output = temp_dir.path().join("requirements.txt");
    fs::write(&output, "stale==0.1\nanother-stale==0.2\n").unwrap();

    run(settings_for(&project, &output), "six==1.16.0\n").unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "six==1.16.0\n");
}

#[test]
fn test_binary_missing_directory_exits_with_error() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("requirements.txt");

    let result = Command::new(env!("CARGO_BIN_EXE_reqgen"))
        .current_dir(temp_dir.path())
        .arg("nowhere")
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains("nowhere"));
    assert!(result.stdout.is_empty());
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_binary_full_run() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("app.py"), "import requests\nfrom flask import Flask\n").unwrap();
    // `sh freeze` runs this script in place of the package manager
    fs::write(
        temp_dir.path().join("freeze"),
        "printf 'Flask==2.3.2\\nrequests==2.31.0\\nunrelated==1.0\\n'\n",
    )
    .unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_reqgen"))
        .current_dir(temp_dir.path())
        .args(["project", "-o", "requirements.txt", "--pip", "sh", "--no-progress", "--no-colors"])
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("requirements.txt")).unwrap(),
        "Flask==2.3.2\nrequests==2.31.0\n"
    );

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Scanning directory 'project' for Python files..."));
    assert!(stdout.contains("Reading installed packages from 'sh freeze'..."));
    assert!(stdout.contains("Successfully generated 'requirements.txt'"));
    assert!(stdout.contains("Contents of 'requirements.txt':\nFlask==2.3.2\nrequests==2.31.0\n"));
}

#[cfg(unix)]
#[test]
fn test_binary_json_summary() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("app.py"), "import os\n").unwrap();
    fs::write(temp_dir.path().join("freeze"), "printf 'six==1.16.0\\n'\n").unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_reqgen"))
        .current_dir(temp_dir.path())
        .args(["project", "--pip", "sh", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(value["installed_count"], 1);
    assert_eq!(value["unmatched_modules"][0], "os");
    assert_eq!(value["requirements"].as_array().unwrap().len(), 0);
}
