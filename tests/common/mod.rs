//! Common test utilities for static-extract integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A temporary site directory with `templates/` and helpers to populate it.
pub struct TestSite {
    temp: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("templates")).unwrap();
        Self {
            temp,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// Write a template file under `templates/`.
    pub fn template(&self, name: &str, content: &str) -> &Self {
        self.write(&format!("templates/{name}"), content)
    }

    /// Write any file relative to the site root.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Glob matching every template of the site.
    pub fn templates_glob(&self) -> String {
        format!("{}/**/*", self.path("templates").display())
    }
}

/// Move a file's modification time an hour into the past.
pub fn backdate(path: &Path) {
    let past = SystemTime::now() - Duration::from_secs(3600);
    let file = fs::OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(past).unwrap();
}

pub fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

/// Names of the entries of `dir`, sorted. Missing directories have none.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> =
        entries.map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
    names.sort();
    names
}
