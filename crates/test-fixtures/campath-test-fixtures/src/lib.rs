//! Shared JSON fixtures for campath tests, resolved through
//! `fixtures/manifest.json` at the workspace root.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    paths: HashMap<String, String>,
    #[serde(default)]
    configs: HashMap<String, String>,
}

#[derive(Clone, Copy)]
enum Kind {
    Path,
    Config,
}

impl Kind {
    fn entries(self) -> &'static HashMap<String, String> {
        match self {
            Kind::Path => &MANIFEST.paths,
            Kind::Config => &MANIFEST.configs,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Kind::Path => "path",
            Kind::Config => "config",
        }
    }

    fn names(self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }

    fn locate(self, name: &str) -> Result<PathBuf> {
        let rel = self
            .entries()
            .get(name)
            .ok_or_else(|| anyhow!("unknown {} fixture '{name}'", self.label()))?;
        Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    fn read(self, name: &str) -> Result<String> {
        let file = self.locate(name)?;
        fs::read_to_string(&file)
            .with_context(|| format!("failed to read fixture at {}", file.display()))
    }
}

/// Stored camera paths.
pub mod paths {
    use super::*;

    pub fn keys() -> Vec<String> {
        Kind::Path.names()
    }

    pub fn json(name: &str) -> Result<String> {
        Kind::Path.read(name)
    }

    /// Absolute location, for tests that open the file themselves.
    pub fn path(name: &str) -> Result<PathBuf> {
        Kind::Path.locate(name)
    }
}

/// Engine configuration documents.
pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        Kind::Config.names()
    }

    pub fn json(name: &str) -> Result<String> {
        Kind::Config.read(name)
    }
}
