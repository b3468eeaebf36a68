//! Skeleton document storage
//!
//! Fetching the skeleton is the one external touchpoint of invoice
//! generation. Stores report the document text or a "not found" signal; the
//! generator turns the latter into [`crate::InvoiceError::SkeletonNotFound`]
//! before any rendering starts.

use std::fs;
use std::path::PathBuf;

/// Default invoice skeleton compiled into the binary.
///
/// A single-file HTML invoice: accent-sentinel styling, company and billing
/// placeholders, the GST markup targeted by the strip rules, and directives
/// for the document title, HSN column and export note.
pub const DEFAULT_SKELETON: &str = include_str!("../data/skeleton.html");

/// Source of skeleton documents.
pub trait SkeletonStore {
    /// Fetch the skeleton, or `None` when it does not exist.
    fn load(&self) -> Option<String>;
}

/// Store backed by [`DEFAULT_SKELETON`]; never missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSkeleton;

impl SkeletonStore for EmbeddedSkeleton {
    fn load(&self) -> Option<String> {
        Some(DEFAULT_SKELETON.to_string())
    }
}

/// Store reading a skeleton file from disk.
#[derive(Debug, Clone)]
pub struct FileSkeleton {
    path: PathBuf,
}

impl FileSkeleton {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SkeletonStore for FileSkeleton {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }
}
