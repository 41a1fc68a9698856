use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    animations: HashMap<String, String>,
    #[serde(default)]
    playbacks: HashMap<String, PlaybackEntry>,
}

/// Playback cases are either a bare path or `{ "path": ..., "animation": ... }`
/// naming the animation fixture they run against.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlaybackEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        animation: Option<String>,
    },
}

impl PlaybackEntry {
    fn as_path(&self) -> &str {
        match self {
            PlaybackEntry::Path(path) => path,
            PlaybackEntry::Detailed { path, .. } => path,
        }
    }

    fn animation(&self) -> Option<&str> {
        match self {
            PlaybackEntry::Path(_) => None,
            PlaybackEntry::Detailed { animation, .. } => animation.as_deref(),
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod animations {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.animations.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.animations, "animation", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.animations, "animation", name)?;
        super::load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.animations, "animation", name)?;
        Ok(resolve_path(rel))
    }
}

pub mod playbacks {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.playbacks.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.playbacks, "playback", name)?;
        read_to_string(entry.as_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.playbacks, "playback", name)?;
        super::load_json(entry.as_path())
    }

    /// Name of the animation fixture a playback case runs against, if declared.
    pub fn animation_name(name: &str) -> Result<Option<String>> {
        let entry = lookup(&MANIFEST.playbacks, "playback", name)?;
        Ok(entry.animation().map(str::to_owned))
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.playbacks, "playback", name)?;
        Ok(resolve_path(entry.as_path()))
    }
}
