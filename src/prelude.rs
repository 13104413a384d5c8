//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the flowpack crate so a
//! caller can drive a packaging run without importing each piece
//! individually.

// Driver and options
pub use crate::package::{PackageOptions, PackagePolicy, Packager, PackagingMetadata};

// Flow document model
pub use crate::flow::{FlowDocument, Keywords, Node, NodeMeta, Port, WireRef};

// Extraction strategies
pub use crate::extract::{
    CombinedExtractor, ExtractedSubflow, FlatExtractor, SlicedExtractor, SubflowExtractor,
};

// Payload encoding
pub use crate::encode::Encoding;

// Error types
pub use crate::error::{EncodingError, ExtractError, PackageError};

// Standard library re-exports commonly used with this crate
pub use std::path::{Path, PathBuf};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
