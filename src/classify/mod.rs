// src/classify/mod.rs
// =============================================================================
// This module decides which files count as "code" and how they are colored.
//
// Submodules:
// - extensions: the fixed extension tables and the lookup functions
//
// Everything here is pure: no I/O, no errors. Unknown extensions simply
// fall back to a default color.
// =============================================================================

mod extensions;

pub use extensions::{
    category_of, extension_of, file_color, is_code_file, FileCategory, FALLBACK_COLOR,
    FOLDER_COLOR,
};
