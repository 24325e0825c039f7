//! # Output Naming
//!
//! Coin-cell assemblies are named after their towers (`CR1632_CR2025.scad`);
//! button-cell assemblies always write the same file.

/// Fixed output file of the button-cell variant.
pub const BUTTON_CELL_FILE_NAME: &str = "button-cell-storage.scad";

/// Extension of every generated file.
pub const SCAD_EXTENSION: &str = "scad";

/// How a variant names its output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNaming {
    /// Tower labels joined with `_`.
    JoinedLabels,
    /// Always this name.
    Fixed(&'static str),
}

impl FileNaming {
    pub fn file_name<S: AsRef<str>>(&self, labels: &[S]) -> String {
        match self {
            FileNaming::JoinedLabels => joined_label_file_name(labels),
            FileNaming::Fixed(name) => (*name).to_string(),
        }
    }
}

/// `CR1632_CR2025.scad` for `["CR1632", "CR2025"]`.
///
/// Characters that are unsafe in file names are replaced with `-`.
pub fn joined_label_file_name<S: AsRef<str>>(labels: &[S]) -> String {
    let stem = labels
        .iter()
        .map(|l| sanitize(l.as_ref()))
        .collect::<Vec<_>>()
        .join("_");
    format!("{}.{}", stem, SCAD_EXTENSION)
}

fn sanitize(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '+') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_labels() {
        assert_eq!(joined_label_file_name(&["CR1632", "CR2025"]), "CR1632_CR2025.scad");
        assert_eq!(joined_label_file_name(&["CR2032"]), "CR2032.scad");
    }

    #[test]
    fn test_unsafe_characters_replaced() {
        assert_eq!(joined_label_file_name(&["a/b", "c d"]), "a-b_c-d.scad");
    }

    #[test]
    fn test_fixed_name_ignores_labels() {
        let naming = FileNaming::Fixed(BUTTON_CELL_FILE_NAME);
        assert_eq!(naming.file_name(&["LR44", "SR626"]), "button-cell-storage.scad");
    }
}
