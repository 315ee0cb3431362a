use cluster::MASTER_ALIAS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fully validated request to add nodes to a running cluster. Once built,
/// `num_nodes` is always >= 1 and `aliases` is either empty or exactly
/// `num_nodes` unique names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddNodesRequest {
    pub cluster_tag: String,
    pub num_nodes: u32,
    pub aliases: Vec<String>,
    pub no_create: bool,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddNodeError {
    #[error("please specify a cluster <cluster_tag>")]
    Usage,
    #[error("'master' is a reserved alias")]
    ReservedAlias,
    #[error("you must specify the same number of aliases (-a) as nodes (-n)")]
    AliasCountMismatch,
    #[error("cannot have duplicate aliases (duplicate: {0})")]
    DuplicateAlias(String),
    #[error("you must specify one or more node aliases via the -a option when using -x")]
    NoCreateWithoutAlias,
}

/// Splits each raw `-a` token on commas, preserving order, so
/// `-a a,b -a c` and `-a a -a b -a c` yield the same alias list.
pub fn flatten_alias_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .flat_map(|token| token.split(','))
        .map(str::to_string)
        .collect()
}

fn first_duplicate(aliases: &[String]) -> Option<&String> {
    let mut seen = HashSet::new();
    aliases.iter().find(|alias| !seen.insert(alias.as_str()))
}

/// Turns raw addnode options into a normalized [`AddNodesRequest`],
/// short-circuiting on the first violated rule.
///
/// A count left at its default of 1 is inferred from the alias list; an
/// explicit count must match the alias count exactly. Alias rules only
/// engage when at least one alias was supplied.
pub fn build_add_nodes_request(
    args: &[String],
    alias_tokens: &[String],
    num_nodes: u32,
    no_create: bool,
) -> Result<AddNodesRequest, AddNodeError> {
    if args.len() != 1 {
        return Err(AddNodeError::Usage);
    }
    let cluster_tag = args[0].clone();

    let aliases = flatten_alias_tokens(alias_tokens);
    if aliases.iter().any(|alias| alias == MASTER_ALIAS) {
        return Err(AddNodeError::ReservedAlias);
    }

    let mut num_nodes = num_nodes;
    if num_nodes == 1 && !aliases.is_empty() {
        num_nodes = aliases.len() as u32;
    }
    if num_nodes > 1 && !aliases.is_empty() && aliases.len() != num_nodes as usize {
        return Err(AddNodeError::AliasCountMismatch);
    }

    if let Some(duplicate) = first_duplicate(&aliases) {
        return Err(AddNodeError::DuplicateAlias(duplicate.clone()));
    }

    if no_create && aliases.is_empty() {
        return Err(AddNodeError::NoCreateWithoutAlias);
    }

    Ok(AddNodesRequest {
        cluster_tag,
        num_nodes,
        aliases,
        no_create,
    })
}
