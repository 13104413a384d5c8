//! Tests for the three subflow extraction strategies.
mod common;
use common::*;
use flowpack::prelude::*;

#[test]
fn test_combined_first_definition_is_authoritative() {
    let mut document = combined_document();
    document.nodes.push(module_node("n3", "m2", "t2", "2.0.0"));

    let subflows = CombinedExtractor.extract(&document).expect("extracts");

    assert_eq!(subflows.len(), 2);
    let first_meta = subflows[0].definition.meta.as_ref().unwrap();
    assert_eq!(first_meta.module.as_deref(), Some("m1"));
    assert_eq!(first_meta.type_name.as_deref(), Some("t1"));
    assert_eq!(first_meta.version.as_deref(), Some("1.0.0"));
}

#[test]
fn test_combined_payload_is_shared_remainder() {
    let mut document = combined_document();
    document.nodes.push(module_node("n3", "m2", "t2", "2.0.0"));

    let subflows = CombinedExtractor.extract(&document).expect("extracts");

    // Every definition embeds the same remaining-node list, and no
    // definition ends up inside a payload.
    for subflow in &subflows {
        let ids: Vec<&str> = subflow.payload.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n2"]);
    }
}

#[test]
fn test_combined_fails_without_module_metadata() {
    let document = FlowDocument {
        nodes: vec![ordinary_node("n1", "inject"), ordinary_node("n2", "debug")],
    };

    let result = CombinedExtractor.extract(&document);
    assert_eq!(result.unwrap_err(), ExtractError::NoModuleMetadata);
}

#[test]
fn test_flat_fails_without_module_metadata() {
    let document = FlowDocument {
        nodes: vec![ordinary_node("n1", "inject")],
    };

    let result = FlatExtractor.extract(&document);
    assert_eq!(result.unwrap_err(), ExtractError::NoModuleMetadata);
}

#[test]
fn test_flat_keeps_every_tagged_definition() {
    let document = FlowDocument {
        nodes: vec![
            module_node("a", "ma", "ta", "0.1.0"),
            ordinary_node("n", "inject"),
            module_node("b", "mb", "tb", "0.2.0"),
        ],
    };

    let subflows = FlatExtractor.extract(&document).expect("extracts");

    assert_eq!(subflows.len(), 2);
    assert_eq!(subflows[0].definition.id, "a");
    assert_eq!(subflows[1].definition.id, "b");
    for subflow in &subflows {
        let ids: Vec<&str> = subflow.payload.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n"]);
    }
}

#[test]
fn test_sliced_synthesizes_meta_for_untagged_subflow() {
    let document = sliced_document();

    let subflows = SlicedExtractor.extract(&document).expect("extracts");

    assert_eq!(subflows.len(), 1);
    let meta = subflows[0].definition.meta.as_ref().unwrap();
    assert_eq!(meta.name.as_deref(), Some("My Thing"));
    assert_eq!(meta.type_name.as_deref(), Some("my-thing"));
    assert!(meta.module.is_none());
    assert!(meta.version.is_none());
}

#[test]
fn test_sliced_collapses_whitespace_runs_in_type_name() {
    let document = FlowDocument {
        nodes: vec![wired_subflow_node("s1", "My   Big\tThing", &[], &[])],
    };

    let subflows = SlicedExtractor.extract(&document).expect("extracts");
    let meta = subflows[0].definition.meta.as_ref().unwrap();
    assert_eq!(meta.type_name.as_deref(), Some("my-big-thing"));
}

#[test]
fn test_sliced_keeps_existing_module_meta() {
    let mut subflow = wired_subflow_node("s1", "Tagged", &[], &[]);
    subflow.meta = Some(NodeMeta {
        module: Some("already".to_string()),
        type_name: Some("tagged".to_string()),
        ..NodeMeta::default()
    });
    let document = FlowDocument {
        nodes: vec![subflow],
    };

    let subflows = SlicedExtractor.extract(&document).expect("extracts");
    let meta = subflows[0].definition.meta.as_ref().unwrap();
    assert_eq!(meta.module.as_deref(), Some("already"));
    assert_eq!(meta.type_name.as_deref(), Some("tagged"));
}

#[test]
fn test_sliced_payload_comes_from_own_wiring() {
    let document = sliced_document();

    let subflows = SlicedExtractor.extract(&document).expect("extracts");
    let ids: Vec<&str> = subflows[0].payload.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["x"]);
}

#[test]
fn test_sliced_fails_without_subflow_nodes() {
    let document = FlowDocument {
        nodes: vec![ordinary_node("n1", "inject")],
    };

    let result = SlicedExtractor.extract(&document);
    assert_eq!(result.unwrap_err(), ExtractError::NoSubflowNodes);
}
