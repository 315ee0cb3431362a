use crate::addnode::{build_add_nodes_request, AddNodeError, AddNodesRequest};

/// Seam to the component that actually launches or attaches instances.
/// Implementations report the aliases of the nodes they added.
pub trait ClusterManager {
    fn add_nodes(&mut self, request: &AddNodesRequest) -> Result<Vec<String>, String>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddNodeRunError {
    #[error(transparent)]
    Validation(#[from] AddNodeError),
    #[error("{0}")]
    Manager(String),
}

/// Validates the raw addnode options and, only when every rule passes,
/// calls the manager exactly once with the normalized request.
pub fn run_add_node(
    manager: &mut dyn ClusterManager,
    args: &[String],
    alias_tokens: &[String],
    num_nodes: u32,
    no_create: bool,
) -> Result<Vec<String>, AddNodeRunError> {
    let request = build_add_nodes_request(args, alias_tokens, num_nodes, no_create)?;
    log::debug!(
        "addnode request for '{}': {} node(s), {} alias(es), no_create={}",
        request.cluster_tag,
        request.num_nodes,
        request.aliases.len(),
        request.no_create
    );
    manager.add_nodes(&request).map_err(AddNodeRunError::Manager)
}
