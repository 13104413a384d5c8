use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A full flow document: the ordered node list submitted for packaging.
///
/// Documents are plain JSON arrays on disk, so the wrapper is transparent
/// and a raw `[...]` parses directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowDocument {
    pub nodes: Vec<Node>,
}

impl FlowDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&contents)?)
    }
}

/// One element of a flow graph.
///
/// Only the fields this crate actually reads are typed; everything else a
/// document carries lands in `extra` and round-trips into output untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<NodeMeta>,

    #[serde(rename = "in", default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<Port>,

    #[serde(rename = "out", default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Port>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    /// A node is a subflow definition when its metadata names a module.
    pub fn has_module_meta(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|meta| meta.module.is_some())
    }

    pub fn is_subflow_type(&self) -> bool {
        self.node_type.as_deref() == Some("subflow")
    }
}

/// The identity metadata a subflow definition carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Keyword lists appear in the wild both as JSON arrays and as single
/// comma-separated strings; both normalize to a plain list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Keywords {
    List(Vec<String>),
    Csv(String),
}

impl Keywords {
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Keywords::List(items) => items
                .iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
            Keywords::Csv(csv) => csv
                .split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

/// One external connection point on a subflow definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Port {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wires: Vec<WireRef>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A reference from a port into the document's node-id space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireRef {
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
