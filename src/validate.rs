use crate::error::ComposeError;

/// Extension every composable document must carry.
pub const INCLUDE_EXTENSION: &str = ".md";

/// Checks the document handed to an entry point.
pub fn validate_top_level(path: &str) -> Result<(), ComposeError> {
    if !path.ends_with(INCLUDE_EXTENSION) {
        return Err(ComposeError::InvalidTopLevelInput {
            path: path.to_string(),
        });
    }
    Ok(())
}

/// Checks the path written inside an include directive.
///
/// The rules run in a fixed order and the first violation wins:
/// markdown extension, then parent traversal, then absolute or
/// drive-qualified form. Nothing is canonicalized and the file system
/// is never touched.
pub fn validate_include_path(path: &str) -> Result<(), ComposeError> {
    if !path.ends_with(INCLUDE_EXTENSION) {
        return Err(ComposeError::InvalidIncludeExtension {
            path: path.to_string(),
        });
    }
    if path.contains("..") {
        return Err(ComposeError::PathTraversalRejected {
            path: path.to_string(),
        });
    }
    if path.contains(':') || path.starts_with('/') {
        return Err(ComposeError::AbsolutePathRejected {
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_markdown_paths_pass() {
        assert!(validate_include_path("part.md").is_ok());
        assert!(validate_include_path("sub/dir/part.md").is_ok());
        assert!(validate_include_path("./part.md").is_ok());
        assert!(validate_include_path("my notes.md").is_ok());
    }

    #[test]
    fn test_extension_is_checked_first() {
        assert!(matches!(
            validate_include_path("../secret.txt"),
            Err(ComposeError::InvalidIncludeExtension { .. })
        ));
        assert!(matches!(
            validate_include_path("part.markdown"),
            Err(ComposeError::InvalidIncludeExtension { .. })
        ));
    }

    #[test]
    fn test_traversal_is_rejected() {
        assert!(matches!(
            validate_include_path("../part.md"),
            Err(ComposeError::PathTraversalRejected { .. })
        ));
        assert!(matches!(
            validate_include_path("a/../../b.md"),
            Err(ComposeError::PathTraversalRejected { .. })
        ));
        // traversal wins over absolute
        assert!(matches!(
            validate_include_path("/x/../b.md"),
            Err(ComposeError::PathTraversalRejected { .. })
        ));
    }

    #[test]
    fn test_absolute_and_drive_paths_are_rejected() {
        assert!(matches!(
            validate_include_path("/etc/part.md"),
            Err(ComposeError::AbsolutePathRejected { .. })
        ));
        assert!(matches!(
            validate_include_path("C:/docs/part.md"),
            Err(ComposeError::AbsolutePathRejected { .. })
        ));
        assert!(matches!(
            validate_include_path("file:part.md"),
            Err(ComposeError::AbsolutePathRejected { .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = validate_include_path("/abs.md").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only relative local paths are allowed. (/abs.md)"
        );
        let err = validate_include_path("../up.md").unwrap_err();
        assert_eq!(
            err.to_string(),
            "File path shouldn't contain '..' elements ../up.md"
        );
        let err = validate_include_path("notes.txt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only markdown files could be included (notes.txt)"
        );
    }

    #[test]
    fn test_top_level_requires_markdown() {
        assert!(validate_top_level("doc.md").is_ok());
        assert!(matches!(
            validate_top_level("doc.txt"),
            Err(ComposeError::InvalidTopLevelInput { .. })
        ));
    }
}
