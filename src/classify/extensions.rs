// src/classify/extensions.rs
// =============================================================================
// Static extension tables plus the two lookups built on them:
// - is_code_file: is this filename one we keep in the tree?
// - file_color: which color does a node get in the graph?
//
// Lookups are case-sensitive and exact: ".TS" is not ".ts".
// =============================================================================

use crate::tree::NodeKind;

/// Color used for every folder, whatever its name.
pub const FOLDER_COLOR: &str = "#3b82f6";

/// Color used for files whose extension is not in the table.
pub const FALLBACK_COLOR: &str = "#808080";

/// Semantic group of a recognized code file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Single-file components (.vue)
    Component,
    JavaScript,
    TypeScript,
    Style,
    Template,
}

impl FileCategory {
    pub fn color(self) -> &'static str {
        match self {
            FileCategory::Component => "#41B883",
            FileCategory::JavaScript => "#F7DF1E",
            FileCategory::TypeScript => "#3178C6",
            FileCategory::Style => "#FF69B4",
            FileCategory::Template => "#E34F26",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileCategory::Component => "component",
            FileCategory::JavaScript => "javascript",
            FileCategory::TypeScript => "typescript",
            FileCategory::Style => "style",
            FileCategory::Template => "template",
        }
    }
}

// The allow-list. An extension is a code file extension iff it appears here.
const CODE_FILE_EXTENSIONS: &[(&str, FileCategory)] = &[
    (".vue", FileCategory::Component),
    (".js", FileCategory::JavaScript),
    (".jsx", FileCategory::JavaScript),
    (".mjs", FileCategory::JavaScript),
    (".cjs", FileCategory::JavaScript),
    (".ts", FileCategory::TypeScript),
    (".tsx", FileCategory::TypeScript),
    (".mts", FileCategory::TypeScript),
    (".cts", FileCategory::TypeScript),
    (".css", FileCategory::Style),
    (".scss", FileCategory::Style),
    (".sass", FileCategory::Style),
    (".less", FileCategory::Style),
    (".styl", FileCategory::Style),
    (".html", FileCategory::Template),
    (".pug", FileCategory::Template),
];

/// Returns the substring from the last `.` to the end, or `None` when the
/// name has no dot at all.
///
/// Example: "src/app.spec.ts" -> Some(".ts")
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|idx| &filename[idx..])
}

/// Looks up the category for an exact extension (including the leading dot).
pub fn category_of(extension: &str) -> Option<FileCategory> {
    CODE_FILE_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, category)| *category)
}

/// True when the filename's extension is in the allow-list.
pub fn is_code_file(filename: &str) -> bool {
    extension_of(filename)
        .and_then(category_of)
        .is_some()
}

/// Picks the display color for a node.
///
/// Folders always get FOLDER_COLOR. Files get their category color, or
/// FALLBACK_COLOR when the extension is missing or unknown.
pub fn file_color(kind: NodeKind, extension: Option<&str>) -> &'static str {
    match kind {
        NodeKind::Folder => FOLDER_COLOR,
        NodeKind::File => extension
            .and_then(category_of)
            .map(FileCategory::color)
            .unwrap_or(FALLBACK_COLOR),
    }
}
