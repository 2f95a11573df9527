//! Common test utilities for helpdeps integration tests
//!
//! Provides a mock build host backed by a temporary directory and a fake
//! assembly-cache lookup that records acquisition/release counts, so tests
//! can assert the lazy-acquire / release-exactly-once contract.

// Allow dead code because these utilities are shared across test files and
// not every helper is used in every file
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use helpdeps::lookup::AssemblyLookup;
use helpdeps::models::DependencySpec;
use helpdeps::plugin::BuildHost;

/// Mock build host rooted in a temporary working folder.
pub struct MockHost {
    working: TempDir,
    deps: Vec<DependencySpec>,
    progress: Mutex<Vec<String>>,
    gac: Option<FakeGac>,
}

impl MockHost {
    pub fn new(deps: Vec<DependencySpec>) -> Self {
        Self {
            working: TempDir::new().unwrap(),
            deps,
            progress: Mutex::new(Vec::new()),
            gac: None,
        }
    }

    /// Attaches a fake assembly cache whose entries live under the working
    /// folder's `gac` subdirectory.
    pub fn with_gac(mut self, assemblies: &[&str]) -> Self {
        let root = self.working.path().join("gac");
        std::fs::create_dir_all(&root).unwrap();
        for name in assemblies {
            write_binary(&root.join(format!("{name}.dll")));
        }
        self.gac = Some(FakeGac::new(root));
        self
    }

    pub fn gac(&self) -> &FakeGac {
        self.gac.as_ref().expect("mock host has no GAC attached")
    }

    /// Messages reported through `report_progress`, in order.
    pub fn messages(&self) -> Vec<String> {
        self.progress.lock().unwrap().clone()
    }

    /// Path of the `DLL` destination folder for this run.
    pub fn dll_folder(&self) -> PathBuf {
        self.working.path().join("DLL")
    }

    /// File names currently present in the `DLL` folder, sorted.
    pub fn dll_folder_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dll_folder())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl BuildHost for MockHost {
    fn working_folder(&self) -> &Path {
        self.working.path()
    }

    fn dependencies(&self) -> &[DependencySpec] {
        &self.deps
    }

    fn report_progress(&self, message: &str) {
        self.progress.lock().unwrap().push(message.to_string());
    }

    fn create_lookup(&self) -> Result<Box<dyn AssemblyLookup>> {
        match &self.gac {
            Some(gac) => Ok(Box::new(gac.open())),
            None => anyhow::bail!("assembly cache unavailable"),
        }
    }
}

/// Fake system-wide assembly cache with acquisition/release accounting.
pub struct FakeGac {
    root: PathBuf,
    opens: Arc<AtomicUsize>,
    releases: Arc<AtomicUsize>,
}

impl FakeGac {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            opens: Arc::new(AtomicUsize::new(0)),
            releases: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn open(&self) -> FakeGacHandle {
        self.opens.fetch_add(1, Ordering::SeqCst);
        FakeGacHandle {
            root: self.root.clone(),
            releases: self.releases.clone(),
        }
    }

    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

/// Live handle into the fake cache; counts its own release on drop.
pub struct FakeGacHandle {
    root: PathBuf,
    releases: Arc<AtomicUsize>,
}

impl AssemblyLookup for FakeGacHandle {
    fn resolve(&mut self, identity: &str) -> Result<PathBuf> {
        // Identity strings look like "Name, Version=..., Culture=..."; only
        // the short name addresses the fake cache.
        let short_name = identity.split(',').next().unwrap_or(identity).trim();
        let path = self.root.join(format!("{short_name}.dll"));
        if !path.is_file() {
            anyhow::bail!("assembly '{identity}' is not installed in the cache");
        }
        Ok(path)
    }
}

impl Drop for FakeGacHandle {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Writes a small stand-in binary at `path`.
pub fn write_binary(path: &Path) {
    std::fs::write(path, b"MZ\x90\x00stand-in module").unwrap();
}

/// Creates a directory of stand-in dependency files and returns its path.
pub fn library_dir(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in files {
        write_binary(&dir.path().join(name));
    }
    dir
}

/// Spec helper: the absolute path expression for a file inside `dir`.
pub fn spec_in(dir: &Path, expression: &str) -> DependencySpec {
    DependencySpec::new(dir.join(expression).to_string_lossy().into_owned())
}
