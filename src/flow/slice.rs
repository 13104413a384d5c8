use super::node::Node;
use ahash::AHashSet;

/// Computes the minimal node subset referenced by a subflow's port wiring.
///
/// Every `wires[].id` on the subflow's `in` and `out` ports is collected
/// into a set (duplicates collapse), and the full node list is filtered to
/// exactly those ids, preserving the list's original relative ordering.
///
/// A wire referencing an id with no matching node is silently dropped, and
/// a subflow with no wired ports yields an empty slice. The function is a
/// pure function of its inputs; slicing several subflows of one document in
/// any order produces the same result for each.
pub fn slice_referenced_nodes(nodes: &[Node], subflow: &Node) -> Vec<Node> {
    let mut referenced: AHashSet<&str> = AHashSet::new();
    for port in subflow.inputs.iter().chain(subflow.outputs.iter()) {
        for wire in &port.wires {
            referenced.insert(wire.id.as_str());
        }
    }

    nodes
        .iter()
        .filter(|node| referenced.contains(node.id.as_str()))
        .cloned()
        .collect()
}
