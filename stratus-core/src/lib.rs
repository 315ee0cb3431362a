pub mod addnode;
pub mod manager;

pub use addnode::{build_add_nodes_request, flatten_alias_tokens, AddNodeError, AddNodesRequest};
pub use manager::{run_add_node, AddNodeRunError, ClusterManager};
