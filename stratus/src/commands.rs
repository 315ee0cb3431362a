use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stratus", version, about = "Stratus cluster management CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add one or more nodes to a running cluster
    #[command(visible_alias = "an")]
    Addnode {
        /// alias to give to the new node (e.g. node007, mynode); repeatable,
        /// comma-separated values are accepted
        #[arg(short = 'a', long = "alias")]
        alias: Vec<String>,
        /// number of new nodes to launch
        #[arg(
            short = 'n',
            long = "num-nodes",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        num_nodes: u32,
        /// do not launch new instances; attach existing instances instead
        /// (requires at least one --alias)
        #[arg(short = 'x', long = "no-create")]
        no_create: bool,
        /// tag of the target cluster
        cluster_tag: Vec<String>,
    },
    Manager {
        #[command(subcommand)]
        command: ManagerCommands,
    },
    Cluster {
        #[command(subcommand)]
        command: ClusterCommands,
    },
}

#[derive(Subcommand)]
pub enum ManagerCommands {
    Run {
        #[arg(long)]
        detach: bool,
    },
    Stop,
}

#[derive(Subcommand)]
pub enum ClusterCommands {
    Create {
        tag: String,
    },
    List {
        #[arg(long, alias = "jq")]
        json_query: bool,
    },
}
