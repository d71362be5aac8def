use crate::error::ComposeError;
use crate::resolver::{normalize, Resolver};
use crate::storage::{AsyncStorage, FsStorage, Storage};
use crate::validate::validate_top_level;
use std::path::Path;

/// Composes a markdown document from the local file system.
///
/// Every include directive in `md_file` is replaced, recursively, by the
/// content of the document it references. Paths inside directives are
/// relative to the directory of the document that contains them.
///
/// # Errors
///
/// Returns a `ComposeError` if `md_file` is not a `.md` file, if a
/// directive references an invalid, missing or circular document, or if
/// a document cannot be read. The first problem found aborts the whole
/// composition.
pub async fn process_includes(md_file: impl AsRef<Path>) -> Result<String, ComposeError> {
    process_includes_with(&FsStorage, md_file).await
}

/// Blocking variant of [`process_includes`].
///
/// # Errors
///
/// Same as [`process_includes`].
pub fn process_includes_sync(md_file: impl AsRef<Path>) -> Result<String, ComposeError> {
    process_includes_sync_with(&FsStorage, md_file)
}

/// Composes a document read through any [`AsyncStorage`].
///
/// # Errors
///
/// Same as [`process_includes`].
pub async fn process_includes_with<S>(
    storage: &S,
    md_file: impl AsRef<Path>,
) -> Result<String, ComposeError>
where
    S: AsyncStorage + ?Sized,
{
    let md_file = md_file.as_ref();
    validate_top_level(&md_file.to_string_lossy())?;
    log::debug!("composing {}", md_file.display());
    Resolver::new(storage)
        .resolve(normalize(md_file), Vec::new())
        .await
}

/// Composes a document read through any blocking [`Storage`].
///
/// # Errors
///
/// Same as [`process_includes`].
pub fn process_includes_sync_with<S>(
    storage: &S,
    md_file: impl AsRef<Path>,
) -> Result<String, ComposeError>
where
    S: Storage + ?Sized,
{
    let md_file = md_file.as_ref();
    validate_top_level(&md_file.to_string_lossy())?;
    log::debug!("composing {}", md_file.display());
    Resolver::new(storage).resolve_sync(&normalize(md_file), &[])
}
