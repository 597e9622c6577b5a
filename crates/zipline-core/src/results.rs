//! Final run output: file tree and metric report

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of a file-tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
}

/// A node in the processed-archive file tree.
///
/// Directories may nest children; files never have any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    #[serde(rename = "kind")]
    pub kind: FileKind,
    #[serde(default)]
    pub children: Vec<FileNode>,
}

impl FileNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FileKind::File,
            children: Vec::new(),
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            kind: FileKind::Directory,
            children,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == FileKind::Directory
    }

    /// Total node count including this node
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(FileNode::count).sum::<usize>()
    }
}

/// Visual classification of a report value.
///
/// Unknown wire values decode to `Neutral` so a new server-side
/// classification renders plainly instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl Classification {
    pub fn parse(s: &str) -> Self {
        match s {
            "positive" => Classification::Positive,
            "negative" => Classification::Negative,
            _ => Classification::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Neutral => "neutral",
            Classification::Positive => "positive",
            Classification::Negative => "negative",
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Classification::parse(&raw))
    }
}

/// One row of the run summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub classification: Classification,
}

/// Everything a fully completed run produces. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionPayload {
    /// Name of the processed archive, used to build the download link
    pub archive_name: String,
    #[serde(default)]
    pub file_tree: Vec<FileNode>,
    /// Metric key to report row. Rendered in key order.
    #[serde(default)]
    pub report: BTreeMap<String, ReportEntry>,
}
