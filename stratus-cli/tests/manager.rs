use stratus_cli::manager::ManagerState;
use stratus_core::{AddNodesRequest, ClusterManager};

fn request(cluster_tag: &str, num_nodes: u32, aliases: &[&str], no_create: bool) -> AddNodesRequest {
    AddNodesRequest {
        cluster_tag: cluster_tag.to_string(),
        num_nodes,
        aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        no_create,
    }
}

#[test]
fn add_nodes_requires_an_existing_cluster() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = ManagerState::new(dir.path().join("registry.json"));
    let err = state
        .add_nodes(&request("ghost", 1, &[], false))
        .expect_err("unknown cluster");
    assert_eq!(err, "cluster not found: ghost");
}

#[test]
fn add_nodes_generates_default_aliases() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = ManagerState::new(dir.path().join("registry.json"));
    state.create_cluster("alpha").expect("create cluster");

    let added = state
        .add_nodes(&request("alpha", 2, &[], false))
        .expect("add nodes");
    assert_eq!(added, vec!["node001", "node002"]);

    let added = state
        .add_nodes(&request("alpha", 1, &[], false))
        .expect("add another node");
    assert_eq!(added, vec!["node003"]);
}

#[test]
fn add_nodes_rejects_alias_collisions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = ManagerState::new(dir.path().join("registry.json"));
    state.create_cluster("alpha").expect("create cluster");
    state
        .add_nodes(&request("alpha", 1, &["node1"], false))
        .expect("add node");

    let err = state
        .add_nodes(&request("alpha", 1, &["node1"], false))
        .expect_err("alias collision");
    assert_eq!(err, "alias already in use: node1");
    let alpha = state.registry().find("alpha").expect("alpha cluster");
    assert_eq!(alpha.nodes.len(), 2);
}

#[test]
fn no_create_marks_nodes_attached() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = ManagerState::new(dir.path().join("registry.json"));
    state.create_cluster("alpha").expect("create cluster");
    state
        .add_nodes(&request("alpha", 1, &["ext1"], true))
        .expect("attach node");

    let alpha = state.registry().find("alpha").expect("alpha cluster");
    let ext1 = alpha
        .nodes
        .iter()
        .find(|node| node.alias == "ext1")
        .expect("ext1 node");
    assert!(ext1.attached);
}

#[test]
fn registry_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("registry.json");
    {
        let mut state = ManagerState::new(path.clone());
        state.create_cluster("alpha").expect("create cluster");
        state
            .add_nodes(&request("alpha", 1, &["node1"], false))
            .expect("add node");
    }

    let state = ManagerState::new(path);
    let alpha = state.registry().find("alpha").expect("alpha cluster");
    assert_eq!(alpha.node_aliases(), vec!["master", "node1"]);
}

#[test]
fn duplicate_cluster_tags_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = ManagerState::new(dir.path().join("registry.json"));
    state.create_cluster("alpha").expect("create cluster");
    let err = state.create_cluster("alpha").expect_err("duplicate tag");
    assert_eq!(err, "cluster already exists: alpha");
}
