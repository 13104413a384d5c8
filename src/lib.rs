//! # Flowpack - Subflow Packaging Toolchain
//!
//! **Flowpack** scaffolds publishable packages from flow-based automation
//! definitions. Given a JSON flow document, it extracts the subflow
//! definitions it contains, optionally encrypts each embedded graph payload,
//! renders the package's text artifacts (manifest, entry script,
//! documentation, license), and writes the result into a destination tree,
//! optionally archived as a `.tgz`.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: parse a flow document (a JSON array of nodes) into a
//!     [`flow::FlowDocument`].
//! 2.  **Pick a policy**: a [`package::PackagePolicy`] selects how the
//!     document is classified and laid out on disk: one combined package,
//!     one sub-package per subflow node with graph slicing, or one
//!     sub-package per module-tagged definition.
//! 3.  **Package**: run [`package::Packager::package`] with the destination
//!     directory and [`package::PackageOptions`] (encoding, archiving,
//!     run-level defaults).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let document = FlowDocument::from_file("flows.json")?;
//!
//!     let packager = Packager::new()?;
//!     let options = PackageOptions {
//!         encoding: Some("AES".to_string()),
//!         encode_key: Some("secret".to_string()),
//!         tgz: true,
//!         ..PackageOptions::default()
//!     };
//!
//!     let produced = packager.package(
//!         PackagePolicy::Combined,
//!         &document,
//!         Path::new("out"),
//!         &options,
//!     )?;
//!     println!("Wrote {}", produced.display());
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod encode;
pub mod error;
pub mod extract;
pub mod flow;
pub mod package;
pub mod prelude;
pub mod template;
