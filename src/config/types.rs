use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::persistence::DEFAULT_ROOT_KEY;
use crate::store::{PersistLayout, PersistOptions, SliceKey};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

/// Where persisted state lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key.
    /// Defaults to the platform data directory (see [`Config::data_dir`]).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// All whitelisted slices under one key, replaced in one write.
    #[default]
    WholeTree,
    /// One key per slice; not atomic across keys.
    PerSlice,
}

/// How the store is mirrored to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// When false the store lives in memory only (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub layout: LayoutKind,
    /// Storage key for the whole-tree layout (default: "root").
    #[serde(default = "default_root_key")]
    pub root_key: String,
    /// Slices to persist (default: all four).
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<SliceKey>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            layout: LayoutKind::default(),
            root_key: default_root_key(),
            whitelist: default_whitelist(),
        }
    }
}

impl PersistenceConfig {
    pub fn to_options(&self) -> PersistOptions {
        let layout = match self.layout {
            LayoutKind::WholeTree => PersistLayout::WholeTree {
                key: self.root_key.clone(),
            },
            LayoutKind::PerSlice => PersistLayout::PerSlice,
        };
        PersistOptions {
            layout,
            whitelist: self.whitelist.clone(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_root_key() -> String {
    DEFAULT_ROOT_KEY.to_string()
}

fn default_whitelist() -> Vec<SliceKey> {
    SliceKey::all().to_vec()
}
