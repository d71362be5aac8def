use miette::{Diagnostic, NamedSource, SourceSpan};
use std::io;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ComposeError {
    #[error("Only markdown files are allowed. ({path})")]
    #[diagnostic(
        code(compose::invalid_input),
        help("The document passed to the composer must end with `.md`.")
    )]
    InvalidTopLevelInput { path: String },

    #[error("Only markdown files could be included ({path})")]
    #[diagnostic(
        code(compose::invalid_include_extension),
        help("Include directives may only reference files ending with `.md`.")
    )]
    InvalidIncludeExtension { path: String },

    #[error("File path shouldn't contain '..' elements {path}")]
    #[diagnostic(
        code(compose::path_traversal),
        help("Includes are resolved below the including document's directory; `..` is not allowed.")
    )]
    PathTraversalRejected { path: String },

    #[error("Only relative local paths are allowed. ({path})")]
    #[diagnostic(
        code(compose::absolute_path),
        help("Remove the leading `/` or drive prefix and reference the file relative to the including document.")
    )]
    AbsolutePathRejected { path: String },

    #[error("File \"{child}\" included from {parent} not found.")]
    #[diagnostic(
        code(compose::include_not_found),
        help("Check the file name and that it lives next to the including document.")
    )]
    IncludeNotFound {
        child: String,
        parent: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("included here")]
        span: SourceSpan,
    },

    #[error("Circular reference between \"{child}\" and \"{parent}\".")]
    #[diagnostic(
        code(compose::circular_reference),
        help("A document cannot include itself, directly or through other includes.")
    )]
    CircularReference {
        child: String,
        parent: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("this include closes the cycle")]
        span: SourceSpan,
    },

    #[error("Failed to read {path}")]
    #[diagnostic(code(compose::read))]
    Read {
        path: String,
        #[source]
        source: Arc<io::Error>,
    },
}

impl ComposeError {
    pub(crate) fn read(path: &std::path::Path, source: io::Error) -> Self {
        ComposeError::Read {
            path: path.display().to_string(),
            source: Arc::new(source),
        }
    }
}
