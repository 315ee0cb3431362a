use crate::commands::{ClusterCommands, Commands, ManagerCommands};
use crate::output::*;
use std::process::{Command, Stdio};
use stratus_cli::{
    client::{self, SocketClusterManager},
    manager,
    protocol::{ManagerRequest, ManagerResponse, DEFAULT_SOCKET_PATH},
};
use stratus_core::{run_add_node, AddNodeRunError};

pub fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Addnode {
            alias,
            num_nodes,
            no_create,
            cluster_tag,
        } => handle_addnode(&cluster_tag, &alias, num_nodes, no_create),
        Commands::Manager { command } => handle_manager_command(command)?,
        Commands::Cluster { command } => handle_cluster_command(command)?,
    }
    Ok(())
}

fn handle_addnode(cluster_tag: &[String], alias_tokens: &[String], num_nodes: u32, no_create: bool) {
    let mut manager = SocketClusterManager::new();
    match run_add_node(&mut manager, cluster_tag, alias_tokens, num_nodes, no_create) {
        Ok(aliases) => print_nodes_added(&cluster_tag[0], &aliases),
        Err(AddNodeRunError::Validation(err)) => {
            print_error(&err.to_string());
            std::process::exit(2);
        }
        Err(AddNodeRunError::Manager(message)) => {
            print_error(&message);
            std::process::exit(1);
        }
    }
}

fn handle_manager_command(command: ManagerCommands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ManagerCommands::Run { detach } => {
            if detach {
                if let Err(err) = spawn_detached_manager() {
                    print_error(&err);
                    std::process::exit(1);
                }
                print_info("Manager started");
            } else if let Err(err) = manager::run_manager() {
                print_error(&err);
                std::process::exit(1);
            }
        }
        ManagerCommands::Stop => {
            let request = ManagerRequest::ManagerStop;
            match client::send_request(&request) {
                Ok(response) => handle_manager_response(response),
                Err(err) => {
                    print_error(&err);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}

fn handle_cluster_command(command: ClusterCommands) -> Result<(), Box<dyn std::error::Error>> {
    let mut list_json_query = false;
    let request = match command {
        ClusterCommands::Create { tag } => ManagerRequest::ClusterCreate { tag },
        ClusterCommands::List { json_query } => {
            list_json_query = json_query;
            ManagerRequest::ClusterList
        }
    };
    match client::send_request(&request) {
        Ok(ManagerResponse::ClusterList { clusters }) if list_json_query => {
            let json =
                serde_json::to_string_pretty(&clusters).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
        Ok(response) => handle_manager_response(response),
        Err(err) => {
            print_error(&err);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn handle_manager_response(response: ManagerResponse) {
    match response {
        ManagerResponse::Ok { message } => print_info(&message),
        ManagerResponse::Error { message } => {
            print_error(&message);
            std::process::exit(1);
        }
        ManagerResponse::ClusterList { clusters } => print_cluster_list(&clusters),
        ManagerResponse::NodesAdded {
            cluster_tag,
            aliases,
        } => print_nodes_added(&cluster_tag, &aliases),
    }
}

fn spawn_detached_manager() -> Result<(), String> {
    let socket_path = std::path::Path::new(DEFAULT_SOCKET_PATH);
    if socket_path.exists() {
        if std::os::unix::net::UnixStream::connect(socket_path).is_ok() {
            return Err("Manager already running".to_string());
        }
        let _ = std::fs::remove_file(socket_path);
    }

    let exe = std::env::current_exe().map_err(|e| format!("Failed to get executable path: {e}"))?;
    let mut cmd = Command::new(exe);
    cmd.args(["manager", "run"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        unsafe {
            cmd.pre_exec(|| {
                if libc::setsid() == -1 {
                    return Err(std::io::Error::last_os_error());
                }
                Ok(())
            });
        }
    }

    cmd.spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to start manager: {e}"))
}
