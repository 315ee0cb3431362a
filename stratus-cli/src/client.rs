use crate::protocol::{ManagerRequest, ManagerResponse, DEFAULT_SOCKET_PATH};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use stratus_core::{AddNodesRequest, ClusterManager};

pub fn send_request(request: &ManagerRequest) -> Result<ManagerResponse, String> {
    send_request_to(DEFAULT_SOCKET_PATH, request)
}

pub fn send_request_to(path: &str, request: &ManagerRequest) -> Result<ManagerResponse, String> {
    let mut stream = UnixStream::connect(path)
        .map_err(|_| format!("Failed to connect to manager at {path}. Is it running?"))?;
    let payload = serde_json::to_string(request).map_err(|e| e.to_string())?;
    stream
        .write_all(format!("{payload}\n").as_bytes())
        .map_err(|e| e.to_string())?;

    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| e.to_string())?;
    if line.trim().is_empty() {
        return Err("Manager returned empty response".to_string());
    }
    serde_json::from_str::<ManagerResponse>(line.trim()).map_err(|e| e.to_string())
}

/// Client-side [`ClusterManager`] that forwards add-node requests to the
/// manager daemon over its socket.
pub struct SocketClusterManager {
    socket_path: String,
}

impl SocketClusterManager {
    pub fn new() -> Self {
        Self::at(DEFAULT_SOCKET_PATH)
    }

    pub fn at(socket_path: &str) -> Self {
        Self {
            socket_path: socket_path.to_string(),
        }
    }
}

impl Default for SocketClusterManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterManager for SocketClusterManager {
    fn add_nodes(&mut self, request: &AddNodesRequest) -> Result<Vec<String>, String> {
        let wire_request = ManagerRequest::AddNodes {
            cluster_tag: request.cluster_tag.clone(),
            num_nodes: request.num_nodes,
            aliases: request.aliases.clone(),
            no_create: request.no_create,
        };
        match send_request_to(&self.socket_path, &wire_request)? {
            ManagerResponse::NodesAdded { aliases, .. } => Ok(aliases),
            ManagerResponse::Error { message } => Err(message),
            _ => Err("Unexpected response from manager".to_string()),
        }
    }
}
