use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Alias of the head node every cluster is created with. User-supplied
/// node aliases must never collide with it.
pub const MASTER_ALIAS: &str = "master";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub alias: String,
    /// True when the node was adopted from an existing instance instead
    /// of being launched by the manager.
    #[serde(default)]
    pub attached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterRecord {
    pub tag: String,
    pub nodes: Vec<NodeRecord>,
}

impl ClusterRecord {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            nodes: vec![NodeRecord {
                alias: MASTER_ALIAS.to_string(),
                attached: false,
            }],
        }
    }

    pub fn contains_alias(&self, alias: &str) -> bool {
        self.nodes.iter().any(|node| node.alias == alias)
    }

    pub fn node_aliases(&self) -> Vec<String> {
        self.nodes.iter().map(|node| node.alias.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterRegistry {
    pub clusters: Vec<ClusterRecord>,
}

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClusterRegistry {
    pub fn find(&self, tag: &str) -> Option<&ClusterRecord> {
        self.clusters.iter().find(|cluster| cluster.tag == tag)
    }

    pub fn find_mut(&mut self, tag: &str) -> Option<&mut ClusterRecord> {
        self.clusters.iter_mut().find(|cluster| cluster.tag == tag)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RegistryError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let data = fs::read(path)?;
        let registry = serde_json::from_slice(&data)?;
        Ok(registry)
    }

    /// A missing registry file is an empty registry, not an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_default()
    }
}

/// Generates `count` node aliases of the form `node001`, `node002`, ...
/// skipping any name already taken in the cluster.
pub fn default_aliases(count: usize, taken: &[String]) -> Vec<String> {
    let mut aliases = Vec::with_capacity(count);
    let mut index = 1usize;
    while aliases.len() < count {
        let candidate = format!("node{index:03}");
        if !taken.contains(&candidate) && !aliases.contains(&candidate) {
            aliases.push(candidate);
        }
        index += 1;
    }
    aliases
}
