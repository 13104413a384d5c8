//! Subflow extraction strategies.
//!
//! A flow document mixes subflow definitions with ordinary graph nodes.
//! Each strategy below classifies the document differently and pairs every
//! definition it keeps with the payload that definition should embed:
//!
//! - [`CombinedExtractor`]: one packaged unit; every definition shares the
//!   whole remaining-node list as its payload.
//! - [`SlicedExtractor`]: one package per `type == "subflow"` node; each
//!   payload is the minimal node subset referenced by that subflow's own
//!   port wiring.
//! - [`FlatExtractor`]: one package per module-tagged definition; every
//!   payload is the whole remaining-node list, no slicing.

use crate::error::ExtractError;
use crate::flow::{FlowDocument, Node, NodeMeta, slice_referenced_nodes};
use itertools::Itertools;

/// One subflow definition paired with the graph payload it embeds.
#[derive(Debug, Clone)]
pub struct ExtractedSubflow {
    pub definition: Node,
    pub payload: Vec<Node>,
}

/// The contract every extraction strategy implements.
pub trait SubflowExtractor {
    fn extract(&self, document: &FlowDocument) -> Result<Vec<ExtractedSubflow>, ExtractError>;
}

/// Partitions on `meta.module` presence and attaches the full remaining-node
/// list as one payload shared by every definition in the document.
pub struct CombinedExtractor;

impl SubflowExtractor for CombinedExtractor {
    fn extract(&self, document: &FlowDocument) -> Result<Vec<ExtractedSubflow>, ExtractError> {
        partition_by_module(document)
    }
}

/// Selects `type == "subflow"` nodes, synthesizing identity metadata for any
/// that lack a module tag, and slices each payload from the subflow's own
/// port wiring against the original full node list.
pub struct SlicedExtractor;

impl SubflowExtractor for SlicedExtractor {
    fn extract(&self, document: &FlowDocument) -> Result<Vec<ExtractedSubflow>, ExtractError> {
        let subflows: Vec<ExtractedSubflow> = document
            .nodes
            .iter()
            .filter(|node| node.is_subflow_type())
            .map(|node| {
                let mut definition = node.clone();
                if !definition.has_module_meta() {
                    definition.meta = Some(synthesize_meta(node));
                }
                let payload = slice_referenced_nodes(&document.nodes, node);
                ExtractedSubflow {
                    definition,
                    payload,
                }
            })
            .collect();

        if subflows.is_empty() {
            return Err(ExtractError::NoSubflowNodes);
        }
        Ok(subflows)
    }
}

/// Keeps every module-tagged definition independently; each one embeds the
/// whole remaining-node list.
pub struct FlatExtractor;

impl SubflowExtractor for FlatExtractor {
    fn extract(&self, document: &FlowDocument) -> Result<Vec<ExtractedSubflow>, ExtractError> {
        partition_by_module(document)
    }
}

/// Shared classification for the module-tagged policies: definitions are the
/// nodes whose metadata names a module, and every definition embeds the full
/// remaining-node list. What differs between those policies is the on-disk
/// layout, which the packaging driver decides.
fn partition_by_module(document: &FlowDocument) -> Result<Vec<ExtractedSubflow>, ExtractError> {
    let (subflows, rest): (Vec<&Node>, Vec<&Node>) = document
        .nodes
        .iter()
        .partition(|node| node.has_module_meta());

    if subflows.is_empty() {
        return Err(ExtractError::NoModuleMetadata);
    }

    let payload: Vec<Node> = rest.into_iter().cloned().collect();
    Ok(subflows
        .into_iter()
        .map(|definition| ExtractedSubflow {
            definition: definition.clone(),
            payload: payload.clone(),
        })
        .collect())
}

/// Builds stand-in metadata for an untagged subflow node: the display name
/// carries over, and the machine type is the lowercased name with whitespace
/// runs collapsed to single hyphens. No module or version is invented.
fn synthesize_meta(node: &Node) -> NodeMeta {
    let name = node.name.clone().unwrap_or_default();
    let type_name = name.split_whitespace().join("-").to_lowercase();
    NodeMeta {
        name: Some(name),
        type_name: Some(type_name),
        ..NodeMeta::default()
    }
}
