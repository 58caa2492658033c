use reqgen::{
    core::{Generator, PipFreeze, SourceWalker},
    error::Result,
    models::config::Settings,
    output::ProgressReporter,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn create_python_project(base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir.join("app/api"))?;
    fs::create_dir_all(base_dir.join("scripts"))?;
    fs::create_dir_all(base_dir.join("__pycache__"))?;

    fs::write(base_dir.join("setup.py"), "from setuptools import setup\n")?;
    fs::write(base_dir.join("app/__init__.py"), "")?;
    fs::write(base_dir.join("app/api/routes.py"), "from fastapi import APIRouter\n")?;
    fs::write(base_dir.join("scripts/tool.pyw"), "import tkinter\n")?;
    fs::write(base_dir.join("__pycache__/routes.cpython-311.pyc"), "")?;
    fs::write(base_dir.join("notes.txt"), "import requests\n")?;

    Ok(())
}

fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_walker_default_suffix() {
    let temp_dir = tempdir().unwrap();
    create_python_project(temp_dir.path()).unwrap();

    let settings = Settings {
        scan_path: temp_dir.path().to_path_buf(),
        ..Settings::default()
    };
    let files = SourceWalker::new(&settings).unwrap().find_source_files().unwrap();

    assert_eq!(
        names(temp_dir.path(), &files),
        vec!["app/__init__.py", "app/api/routes.py", "setup.py"]
    );
}

#[test]
fn test_walker_custom_suffix() {
    let temp_dir = tempdir().unwrap();
    create_python_project(temp_dir.path()).unwrap();

    let settings = Settings {
        scan_path: temp_dir.path().to_path_buf(),
        source_suffix: ".pyw".to_string(),
        ..Settings::default()
    };
    let files = SourceWalker::new(&settings).unwrap().find_source_files().unwrap();

    assert_eq!(names(temp_dir.path(), &files), vec!["scripts/tool.pyw"]);
}

#[test]
fn test_walker_exclude_full_path_pattern() {
    let temp_dir = tempdir().unwrap();
    create_python_project(temp_dir.path()).unwrap();

    let settings = Settings {
        scan_path: temp_dir.path().to_path_buf(),
        exclude_patterns: vec!["**/api".to_string()],
        ..Settings::default()
    };
    let files = SourceWalker::new(&settings).unwrap().find_source_files().unwrap();

    assert_eq!(
        names(temp_dir.path(), &files),
        vec!["app/__init__.py", "setup.py"]
    );
}

#[test]
fn test_walker_rejects_bad_pattern() {
    let settings = Settings {
        exclude_patterns: vec!["[".to_string()],
        ..Settings::default()
    };
    assert!(SourceWalker::new(&settings).is_err());
}

#[cfg(unix)]
#[test]
fn test_walker_symlinks() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("project");
    let shared = temp_dir.path().join("shared");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&shared).unwrap();
    fs::write(root.join("main.py"), "").unwrap();
    fs::write(shared.join("util.py"), "").unwrap();
    std::os::unix::fs::symlink(&shared, root.join("linked")).unwrap();

    let mut settings = Settings {
        scan_path: root.clone(),
        ..Settings::default()
    };
    let files = SourceWalker::new(&settings).unwrap().find_source_files().unwrap();
    assert_eq!(names(&root, &files), vec!["main.py"]);

    settings.follow_links = true;
    let files = SourceWalker::new(&settings).unwrap().find_source_files().unwrap();
    assert_eq!(names(&root, &files), vec!["linked/util.py", "main.py"]);
}

#[cfg(unix)]
#[test]
fn test_invalid_utf8_source_is_still_scanned() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("project");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("latin1.py"), b"# caf\xe9\nimport six\n").unwrap();
    fs::write(temp_dir.path().join("freeze"), "printf 'six==1.16.0\\n'\n").unwrap();

    let settings = Settings {
        scan_path: root,
        output_file: temp_dir.path().join("requirements.txt"),
        ..Settings::default()
    };
    let script = temp_dir.path().join("freeze").to_string_lossy().to_string();
    let report = Generator::new(settings)
        .with_source(PipFreeze::new("sh", vec![script]))
        .run(&ProgressReporter::silent())
        .unwrap();

    assert_eq!(report.modules_found, vec!["six".to_string()]);
    assert!(report.warnings.is_empty());
}
