use crate::protocol::{ClusterSummary, ManagerRequest, ManagerResponse, DEFAULT_SOCKET_PATH};
use cluster::{default_aliases, ClusterRecord, ClusterRegistry, NodeRecord};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::PathBuf;
use stratus_core::{AddNodesRequest, ClusterManager};

pub const DEFAULT_REGISTRY_PATH: &str = "clusters/registry.json";

pub struct ManagerState {
    registry: ClusterRegistry,
    registry_path: PathBuf,
}

impl ManagerState {
    pub fn new(registry_path: PathBuf) -> Self {
        let registry = ClusterRegistry::load_or_default(&registry_path);
        Self {
            registry,
            registry_path,
        }
    }

    pub fn registry(&self) -> &ClusterRegistry {
        &self.registry
    }

    fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.registry_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        self.registry
            .save_to_file(&self.registry_path)
            .map_err(|e| format!("Failed to save cluster registry: {e}"))
    }

    pub fn create_cluster(&mut self, tag: &str) -> Result<(), String> {
        if self.registry.find(tag).is_some() {
            return Err(format!("cluster already exists: {tag}"));
        }
        self.registry.clusters.push(ClusterRecord::new(tag));
        self.persist()?;
        log::info!("created cluster '{tag}'");
        Ok(())
    }

    pub fn cluster_summaries(&self) -> Vec<ClusterSummary> {
        self.registry
            .clusters
            .iter()
            .map(|record| ClusterSummary {
                tag: record.tag.clone(),
                nodes: record.nodes.len(),
                node_aliases: record.node_aliases(),
            })
            .collect()
    }
}

impl ClusterManager for ManagerState {
    fn add_nodes(&mut self, request: &AddNodesRequest) -> Result<Vec<String>, String> {
        let record = self
            .registry
            .find_mut(&request.cluster_tag)
            .ok_or_else(|| format!("cluster not found: {}", request.cluster_tag))?;
        for alias in &request.aliases {
            if record.contains_alias(alias) {
                return Err(format!("alias already in use: {alias}"));
            }
        }
        let aliases = if request.aliases.is_empty() {
            default_aliases(request.num_nodes as usize, &record.node_aliases())
        } else {
            request.aliases.clone()
        };
        for alias in &aliases {
            record.nodes.push(NodeRecord {
                alias: alias.clone(),
                attached: request.no_create,
            });
        }
        let action = if request.no_create {
            "attached"
        } else {
            "launched"
        };
        log::info!(
            "{action} {} node(s) in cluster '{}'",
            aliases.len(),
            request.cluster_tag
        );
        self.persist()?;
        Ok(aliases)
    }
}

pub fn run_manager() -> Result<(), String> {
    run_manager_at(DEFAULT_SOCKET_PATH, PathBuf::from(DEFAULT_REGISTRY_PATH))
}

pub fn run_manager_at(socket_path: &str, registry_path: PathBuf) -> Result<(), String> {
    let mut state = ManagerState::new(registry_path);

    if std::path::Path::new(socket_path).exists() {
        let _ = std::fs::remove_file(socket_path);
    }
    let listener = UnixListener::bind(socket_path)
        .map_err(|e| format!("Failed to bind manager socket: {e}"))?;

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(err) = handle_client(stream, &mut state) {
                    eprintln!("Manager client error: {err}");
                }
            }
            Err(err) => {
                eprintln!("Manager accept error: {err}");
            }
        }
    }

    Ok(())
}

fn handle_client(stream: UnixStream, state: &mut ManagerState) -> Result<(), String> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| e.to_string())?;
    let request: ManagerRequest =
        serde_json::from_str(line.trim()).map_err(|e| e.to_string())?;
    let mut stream = reader.into_inner();

    let response = match request {
        ManagerRequest::ClusterCreate { tag } => match state.create_cluster(&tag) {
            Ok(()) => ManagerResponse::Ok {
                message: format!("Cluster '{tag}' created"),
            },
            Err(message) => ManagerResponse::Error { message },
        },
        ManagerRequest::ClusterList => ManagerResponse::ClusterList {
            clusters: state.cluster_summaries(),
        },
        ManagerRequest::AddNodes {
            cluster_tag,
            num_nodes,
            aliases,
            no_create,
        } => {
            let request = AddNodesRequest {
                cluster_tag,
                num_nodes,
                aliases,
                no_create,
            };
            match state.add_nodes(&request) {
                Ok(aliases) => ManagerResponse::NodesAdded {
                    cluster_tag: request.cluster_tag,
                    aliases,
                },
                Err(message) => ManagerResponse::Error { message },
            }
        }
        ManagerRequest::ManagerStop => {
            send_response(
                &mut stream,
                &ManagerResponse::Ok {
                    message: "Manager stopped".to_string(),
                },
            )?;
            std::process::exit(0);
        }
    };

    send_response(&mut stream, &response)?;
    Ok(())
}

fn send_response(stream: &mut impl Write, response: &ManagerResponse) -> Result<(), String> {
    let payload = serde_json::to_string(response).map_err(|e| e.to_string())?;
    stream
        .write_all(format!("{payload}\n").as_bytes())
        .map_err(|e| e.to_string())?;
    Ok(())
}
