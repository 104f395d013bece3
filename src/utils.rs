//! Common utility functions shared across the codebase.

use std::path::Path;

/// Checks if a path names a WinForms Designer file (`*.Designer.cs`).
///
/// Only Designer files are accepted by the caller-facing parse path; the
/// hand-written half of a form class lives in a sibling `.cs` file and does
/// not follow the generated convention.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use formlens::utils::is_designer_file;
///
/// assert!(is_designer_file(Path::new("Form1.Designer.cs")));
/// assert!(is_designer_file(Path::new("src/ui/Main.Designer.cs")));
/// assert!(!is_designer_file(Path::new("Form1.cs")));
/// assert!(!is_designer_file(Path::new("Form1.Designer.cs.bak")));
/// ```
pub fn is_designer_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".Designer.cs"))
}
