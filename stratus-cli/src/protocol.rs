use serde::{Deserialize, Serialize};

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/stratus-manager.sock";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub tag: String,
    pub nodes: usize,
    pub node_aliases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ManagerRequest {
    ClusterCreate {
        tag: String,
    },
    ClusterList,
    AddNodes {
        cluster_tag: String,
        num_nodes: u32,
        aliases: Vec<String>,
        no_create: bool,
    },
    ManagerStop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ManagerResponse {
    Ok {
        message: String,
    },
    Error {
        message: String,
    },
    ClusterList {
        clusters: Vec<ClusterSummary>,
    },
    NodesAdded {
        cluster_tag: String,
        aliases: Vec<String>,
    },
}
