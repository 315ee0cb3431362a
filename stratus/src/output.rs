use stratus_cli::protocol::ClusterSummary;

pub fn print_info(message: &str) {
    println!("[Stratus][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[Stratus][ERROR]: {message}");
}

pub fn print_cluster_list(clusters: &[ClusterSummary]) {
    if clusters.is_empty() {
        print_info("No clusters found");
    } else {
        print_info("List of clusters:");
        for cluster in clusters {
            let nodes = if cluster.nodes == 1 { "node" } else { "nodes" };
            println!(
                "{} - {} {} ({})",
                cluster.tag,
                cluster.nodes,
                nodes,
                cluster.node_aliases.join(", ")
            );
        }
    }
}

pub fn print_nodes_added(cluster_tag: &str, aliases: &[String]) {
    let nodes = if aliases.len() == 1 { "node" } else { "nodes" };
    print_info(&format!(
        "Added {} {} to cluster '{}': {}",
        aliases.len(),
        nodes,
        cluster_tag,
        aliases.join(", ")
    ));
}
