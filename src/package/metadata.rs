use crate::flow::{Node, NodeMeta};
use crate::package::PackageOptions;

/// The template parameters derived from one subflow definition.
///
/// One value is built per subflow from that subflow's own metadata plus
/// run-level defaults; nothing is shared or mutated across a batch. A
/// definition without module or version metadata (possible under the sliced
/// policy) renders those fields as empty strings.
#[derive(Debug, Clone, Default)]
pub struct PackagingMetadata {
    pub name: String,
    pub module: String,
    pub version: String,
    pub desc: String,
    pub license: String,
    pub keywords: Vec<String>,
    pub info: String,
    pub category: String,
}

impl PackagingMetadata {
    pub fn from_definition(
        definition: &Node,
        options: &PackageOptions,
        default_category: &str,
    ) -> Self {
        let meta = definition.meta.clone().unwrap_or_else(NodeMeta::default);
        let name = meta.type_name.clone().unwrap_or_default();

        let keywords = meta
            .keywords
            .as_ref()
            .map(|k| k.to_list())
            .or_else(|| options.keywords.clone())
            .unwrap_or_default();

        Self {
            desc: meta
                .desc
                .clone()
                .unwrap_or_else(|| format!("Node-RED node for {name}")),
            license: meta.license.clone().unwrap_or_else(|| "unknown".to_string()),
            module: meta.module.clone().unwrap_or_default(),
            version: meta.version.clone().unwrap_or_default(),
            info: meta.info.clone().unwrap_or_default(),
            category: options
                .category
                .clone()
                .unwrap_or_else(|| default_category.to_string()),
            keywords,
            name,
        }
    }
}
