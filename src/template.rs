//! Text-artifact rendering.
//!
//! All template sources are embedded at compile time and registered once;
//! rendering takes a flat parameter context. Two families exist, mirroring
//! the two on-disk layouts: `subflow/*` for the combined single-package
//! layout and `subflows/*` for the per-subflow layouts.

use crate::package::PackagingMetadata;
use tera::{Context, Tera};

const COMBINED_PACKAGE_JSON: &str = include_str!("../templates/subflow/package.json.tera");
const COMBINED_SUBFLOW_JS: &str = include_str!("../templates/subflow/subflow.js.tera");
const COMBINED_README: &str = include_str!("../templates/subflow/README.md.tera");
const COMBINED_LICENSE: &str = include_str!("../templates/subflow/LICENSE.tera");
const MULTI_PACKAGE_JSON: &str = include_str!("../templates/subflows/package.json.tera");
const MULTI_SUBFLOW_JS: &str = include_str!("../templates/subflows/subflow.js.tera");

/// The compiled set of output templates.
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        // Output is JSON, JavaScript, and Markdown, never HTML.
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            ("subflow/package.json", COMBINED_PACKAGE_JSON),
            ("subflow/subflow.js", COMBINED_SUBFLOW_JS),
            ("subflow/README.md", COMBINED_README),
            ("subflow/LICENSE", COMBINED_LICENSE),
            ("subflows/package.json", MULTI_PACKAGE_JSON),
            ("subflows/subflow.js", MULTI_SUBFLOW_JS),
        ])?;
        Ok(Self { tera })
    }

    /// Renders one named template with a subflow's packaging parameters.
    pub fn render(
        &self,
        template: &str,
        metadata: &PackagingMetadata,
        encoding: &str,
    ) -> Result<String, tera::Error> {
        self.tera
            .render(template, &subflow_context(metadata, encoding))
    }

    /// Renders the top-level manifest for the per-subflow layouts, which
    /// lists every subflow type name in the package.
    pub fn render_package_manifest(
        &self,
        project_name: &str,
        project_version: &str,
        node_names: &[String],
    ) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("projectName", project_name);
        context.insert("projectVersion", project_version);
        context.insert("nodeName", node_names);
        self.tera.render("subflows/package.json", &context)
    }
}

fn subflow_context(metadata: &PackagingMetadata, encoding: &str) -> Context {
    let mut context = Context::new();
    context.insert("nodeName", &metadata.name);
    context.insert("projectName", &metadata.module);
    context.insert("projectVersion", &metadata.version);
    context.insert("keywords", &metadata.keywords);
    context.insert("category", &metadata.category);
    context.insert("description", &metadata.desc);
    context.insert("licenseName", &metadata.license);
    context.insert("nodeRead", &metadata.info);
    context.insert("encoding", encoding);
    context
}
