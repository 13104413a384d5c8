//! The packaging driver.
//!
//! One run takes a flow document, an extraction policy, a destination
//! directory, and run options, and produces a publishable package tree
//! (optionally archived). Subflows are processed one at a time in document
//! order; each gets its own independently-built [`PackagingMetadata`].
//!
//! A failure at any step aborts the rest of the run and is returned as-is.
//! Output already written stays on disk; callers must treat a failed run's
//! destination tree as partial.

pub mod metadata;

pub use metadata::PackagingMetadata;

use crate::archive::create_tgz;
use crate::encode::Encoding;
use crate::error::PackageError;
use crate::extract::{
    CombinedExtractor, ExtractedSubflow, FlatExtractor, SlicedExtractor, SubflowExtractor,
};
use crate::flow::FlowDocument;
use crate::template::TemplateSet;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// Which extraction policy and on-disk layout a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagePolicy {
    /// One combined package named after the first definition's module;
    /// every definition shares the remaining-node payload.
    Combined,
    /// One sub-package per `type == "subflow"` node, each embedding only
    /// the nodes its own port wiring references.
    Sliced,
    /// One sub-package per module-tagged definition, each embedding the
    /// whole remaining-node list.
    Flat,
}

/// Caller-supplied options for one packaging run.
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    /// Requested payload encoding name; absent or `"none"` leaves payloads
    /// as plain structured data.
    pub encoding: Option<String>,
    /// Encryption key, required whenever `encoding` is not `"none"`.
    pub encode_key: Option<String>,
    /// Archive the produced package directory into a `.tgz`.
    pub tgz: bool,
    /// Run-level package name; required for the sliced and flat layouts.
    pub name: Option<String>,
    /// Run-level package version for the sliced and flat layouts.
    pub version: Option<String>,
    /// Fallback keyword list for definitions whose metadata omits one.
    pub keywords: Option<Vec<String>>,
    /// Overrides the layout's default palette category.
    pub category: Option<String>,
}

/// Orchestrates packaging runs. Owns the compiled template set, so one
/// instance can serve any number of runs.
pub struct Packager {
    templates: TemplateSet,
}

impl Packager {
    pub fn new() -> Result<Self, PackageError> {
        Ok(Self {
            templates: TemplateSet::new()?,
        })
    }

    /// Runs one packaging pass end to end and returns the produced path:
    /// the package directory, or the archive when `tgz` was requested.
    pub fn package(
        &self,
        policy: PackagePolicy,
        document: &FlowDocument,
        dst: &Path,
        options: &PackageOptions,
    ) -> Result<PathBuf, PackageError> {
        match policy {
            PackagePolicy::Combined => self.package_combined(document, dst, options),
            PackagePolicy::Sliced => {
                self.package_per_subflow(&SlicedExtractor, document, dst, options)
            }
            PackagePolicy::Flat => self.package_per_subflow(&FlatExtractor, document, dst, options),
        }
    }

    /// Combined layout: `dst/<module>/{subflow.json, subflow.js,
    /// package.json, README.md, LICENSE}`. The first definition's metadata
    /// is authoritative for the whole package, and `subflow.json` holds
    /// every definition under a `subflows` array, each wrapped as
    /// `{"encoding", "flow"}` even when no encoding was requested.
    pub fn package_combined(
        &self,
        document: &FlowDocument,
        dst: &Path,
        options: &PackageOptions,
    ) -> Result<PathBuf, PackageError> {
        let encoding = Encoding::resolve(options.encoding.as_deref(), options.encode_key.as_deref())?;
        let subflows = CombinedExtractor.extract(document)?;

        let main = PackagingMetadata::from_definition(&subflows[0].definition, options, "subflow");
        let package_dir = dst.join(&main.module);
        create_dir(&package_dir)?;

        let records = subflows
            .iter()
            .map(|subflow| {
                let wrapped = json!({
                    "encoding": encoding.name(),
                    "flow": encoding.transform(&subflow.payload)?,
                });
                attach_flow(subflow, wrapped)
            })
            .collect::<Result<Vec<Value>, PackageError>>()?;
        write_json(
            &package_dir.join("subflow.json"),
            &json!({ "subflows": records }),
        )?;

        for (template, file) in [
            ("subflow/package.json", "package.json"),
            ("subflow/subflow.js", "subflow.js"),
            ("subflow/README.md", "README.md"),
            ("subflow/LICENSE", "LICENSE"),
        ] {
            let rendered = self.templates.render(template, &main, encoding.name())?;
            write_text(&package_dir.join(file), &rendered)?;
        }

        if options.tgz {
            let archive = dst.join(format!("{}-{}.tgz", main.module, main.version));
            create_tgz(&package_dir, &archive)?;
            Ok(archive)
        } else {
            Ok(package_dir)
        }
    }

    /// Sliced and flat layouts share their tree shape:
    /// `dst/<name>/<subflow-type>/{subflow.json, subflow.js}` per subflow
    /// plus `dst/<name>/package.json` listing every subflow type name. The
    /// extractor decides what each payload contains.
    fn package_per_subflow(
        &self,
        extractor: &dyn SubflowExtractor,
        document: &FlowDocument,
        dst: &Path,
        options: &PackageOptions,
    ) -> Result<PathBuf, PackageError> {
        let encoding = Encoding::resolve(options.encoding.as_deref(), options.encode_key.as_deref())?;
        let subflows = extractor.extract(document)?;

        let run_name = options
            .name
            .clone()
            .ok_or(PackageError::MissingPackageName)?;
        let run_version = options.version.clone().unwrap_or_default();

        let main_dir = dst.join(&run_name);
        create_dir(&main_dir)?;

        let mut node_names = Vec::with_capacity(subflows.len());
        for subflow in &subflows {
            let metadata = PackagingMetadata::from_definition(&subflow.definition, options, "subflows");
            let subflow_dir = main_dir.join(&metadata.name);
            create_dir(&subflow_dir)?;
            node_names.push(metadata.name.clone());

            // Plain payloads stay a bare node array; encoded ones are
            // wrapped so the encoding name travels with the ciphertext.
            let flow = if encoding.is_none() {
                encoding.transform(&subflow.payload)?
            } else {
                json!({
                    "encoding": encoding.name(),
                    "flow": encoding.transform(&subflow.payload)?,
                })
            };
            write_json(&subflow_dir.join("subflow.json"), &attach_flow(subflow, flow)?)?;

            let rendered = self
                .templates
                .render("subflows/subflow.js", &metadata, encoding.name())?;
            write_text(&subflow_dir.join("subflow.js"), &rendered)?;
        }

        let manifest = self
            .templates
            .render_package_manifest(&run_name, &run_version, &node_names)?;
        write_text(&main_dir.join("package.json"), &manifest)?;

        if options.tgz {
            let archive = dst.join(format!("{run_name}-{run_version}.tgz"));
            create_tgz(&main_dir, &archive)?;
            Ok(archive)
        } else {
            Ok(main_dir)
        }
    }
}

/// Serializes a definition node and sets its `flow` field to the prepared
/// payload value.
fn attach_flow(subflow: &ExtractedSubflow, flow: Value) -> Result<Value, PackageError> {
    let mut record = serde_json::to_value(&subflow.definition)?;
    if let Value::Object(fields) = &mut record {
        fields.insert("flow".to_string(), flow);
    }
    Ok(record)
}

/// Creates a directory and any missing parents; already existing is fine.
fn create_dir(path: &Path) -> Result<(), PackageError> {
    fs::create_dir_all(path).map_err(|source| PackageError::io(path, source))
}

fn write_text(path: &Path, contents: &str) -> Result<(), PackageError> {
    fs::write(path, contents).map_err(|source| PackageError::io(path, source))
}

fn write_json(path: &Path, value: &Value) -> Result<(), PackageError> {
    let data = serde_json::to_string_pretty(value)?;
    write_text(path, &data)
}
