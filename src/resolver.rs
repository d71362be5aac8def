use crate::directive::{directives, Directive};
use crate::error::ComposeError;
use crate::splice::{splice, Fragment};
use crate::storage::{AsyncStorage, Storage};
use crate::utils::get_line_and_column;
use crate::validate::validate_include_path;
use futures::future::{BoxFuture, FutureExt};
use miette::NamedSource;
use std::path::{Component, Path, PathBuf};

/// Expands include directives recursively.
///
/// A resolver only borrows its storage. The same resolution rules apply
/// whether documents are read through [`Storage`] (`resolve_sync`) or
/// [`AsyncStorage`] (`resolve`).
pub struct Resolver<'s, S: ?Sized> {
    storage: &'s S,
}

impl<'s, S: ?Sized> Resolver<'s, S> {
    pub fn new(storage: &'s S) -> Self {
        Resolver { storage }
    }
}

impl<S: Storage + ?Sized> Resolver<'_, S> {
    /// Returns the fully expanded text of `path`.
    ///
    /// `ancestors` holds the documents currently being expanded above
    /// `path`, outermost first. Pass an empty slice for a top-level call.
    pub fn resolve_sync(
        &self,
        path: &Path,
        ancestors: &[PathBuf],
    ) -> Result<String, ComposeError> {
        log::trace!("reading {}", path.display());
        let text = self
            .storage
            .read_text(path)
            .map_err(|e| ComposeError::read(path, e))?;

        let lineage = extend(ancestors, path);
        let mut fragments = Vec::new();

        for directive in directives(&text) {
            let child = child_path(path, &text, &directive)?;
            if !self.storage.exists(&child) {
                return Err(not_found(path, &text, &directive, &child));
            }
            check_cycle(path, &text, &directive, &child, ancestors)?;

            let content = self.resolve_sync(&child, &lineage)?;
            fragments.push(fragment(&directive, content));
        }

        Ok(finish(text, &fragments))
    }
}

impl<S: AsyncStorage + ?Sized> Resolver<'_, S> {
    /// Non-blocking counterpart of [`Resolver::resolve_sync`].
    ///
    /// Suspends only while reading or probing storage; sibling includes
    /// are still expanded one after another, in document order.
    pub fn resolve(
        &self,
        path: PathBuf,
        ancestors: Vec<PathBuf>,
    ) -> BoxFuture<'_, Result<String, ComposeError>> {
        async move {
            log::trace!("reading {}", path.display());
            let text = self
                .storage
                .read_text(&path)
                .await
                .map_err(|e| ComposeError::read(&path, e))?;

            let found: Vec<Directive<'_>> = directives(&text).collect();
            let lineage = extend(&ancestors, &path);
            let mut fragments = Vec::with_capacity(found.len());

            for directive in &found {
                let child = child_path(&path, &text, directive)?;
                if !self.storage.exists(&child).await {
                    return Err(not_found(&path, &text, directive, &child));
                }
                check_cycle(&path, &text, directive, &child, &ancestors)?;

                let content = self.resolve(child, lineage.clone()).await?;
                fragments.push(fragment(directive, content));
            }

            Ok(finish(text, &fragments))
        }
        .boxed()
    }
}

/// Drops `.` components so the same file reached as `a.md` and `./a.md`
/// has one identity in the ancestor chain.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn extend(ancestors: &[PathBuf], current: &Path) -> Vec<PathBuf> {
    let mut lineage = Vec::with_capacity(ancestors.len() + 1);
    lineage.extend_from_slice(ancestors);
    lineage.push(current.to_path_buf());
    lineage
}

/// Validates the directive's path and resolves it against the directory
/// of the including document.
fn child_path(
    parent: &Path,
    text: &str,
    directive: &Directive<'_>,
) -> Result<PathBuf, ComposeError> {
    validate_include_path(directive.path)?;

    let dir = parent.parent().unwrap_or_else(|| Path::new(""));
    let child = normalize(&dir.join(directive.path));

    let (line, _) = get_line_and_column(text, directive.start);
    log::debug!(
        "{}:{}: including {}",
        parent.display(),
        line,
        child.display()
    );
    Ok(child)
}

fn check_cycle(
    parent: &Path,
    text: &str,
    directive: &Directive<'_>,
    child: &Path,
    ancestors: &[PathBuf],
) -> Result<(), ComposeError> {
    if ancestors.iter().any(|a| a == child) {
        let chain = ancestors
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        log::debug!("cycle detected: {} -> {}", chain, parent.display());
        return Err(ComposeError::CircularReference {
            child: child.display().to_string(),
            parent: parent.display().to_string(),
            src: named_source(parent, text),
            span: (directive.start, directive.len).into(),
        });
    }
    Ok(())
}

fn not_found(parent: &Path, text: &str, directive: &Directive<'_>, child: &Path) -> ComposeError {
    ComposeError::IncludeNotFound {
        child: child.display().to_string(),
        parent: parent.display().to_string(),
        src: named_source(parent, text),
        span: (directive.start, directive.len).into(),
    }
}

fn named_source(path: &Path, text: &str) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), text.to_string())
}

fn fragment(directive: &Directive<'_>, content: String) -> Fragment {
    Fragment {
        content,
        start: directive.start,
        len: directive.len,
    }
}

fn finish(text: String, fragments: &[Fragment]) -> String {
    if fragments.is_empty() {
        text
    } else {
        splice(&text, fragments)
    }
}
