//! Common test utilities for building flow documents and nodes.
use flowpack::prelude::*;

/// Creates an ordinary (non-definition) graph node.
#[allow(dead_code)]
pub fn ordinary_node(id: &str, node_type: &str) -> Node {
    Node {
        id: id.to_string(),
        node_type: Some(node_type.to_string()),
        ..Node::default()
    }
}

/// Creates a subflow definition node carrying full module metadata.
#[allow(dead_code)]
pub fn module_node(id: &str, module: &str, type_name: &str, version: &str) -> Node {
    Node {
        id: id.to_string(),
        meta: Some(NodeMeta {
            module: Some(module.to_string()),
            type_name: Some(type_name.to_string()),
            version: Some(version.to_string()),
            ..NodeMeta::default()
        }),
        ..Node::default()
    }
}

/// Creates a `type == "subflow"` node with the given display name and
/// port wiring (`in` wires then `out` wires, by referenced node id).
#[allow(dead_code)]
pub fn wired_subflow_node(id: &str, name: &str, in_ids: &[&str], out_ids: &[&str]) -> Node {
    Node {
        id: id.to_string(),
        node_type: Some("subflow".to_string()),
        name: Some(name.to_string()),
        inputs: vec![port(in_ids)],
        outputs: vec![port(out_ids)],
        ..Node::default()
    }
}

#[allow(dead_code)]
pub fn port(wire_ids: &[&str]) -> Port {
    Port {
        wires: wire_ids
            .iter()
            .map(|id| WireRef {
                id: id.to_string(),
                ..WireRef::default()
            })
            .collect(),
        ..Port::default()
    }
}

/// A document with one module-tagged definition and one ordinary node,
/// the minimal valid input for the combined and flat policies.
#[allow(dead_code)]
pub fn combined_document() -> FlowDocument {
    FlowDocument {
        nodes: vec![
            module_node("n1", "m1", "t1", "1.0.0"),
            ordinary_node("n2", "inject"),
        ],
    }
}

/// A document with one named subflow node wired to `x`, plus the `x` node
/// itself and an unreferenced bystander.
#[allow(dead_code)]
pub fn sliced_document() -> FlowDocument {
    FlowDocument {
        nodes: vec![
            wired_subflow_node("s1", "My Thing", &["x"], &[]),
            ordinary_node("x", "function"),
            ordinary_node("y", "debug"),
        ],
    }
}
