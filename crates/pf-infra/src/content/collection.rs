use std::path::{Path, PathBuf};

use pf_core::ids::EntryId;
use walkdir::WalkDir;

use super::error::ContentError;

const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// One file of a collection and the id derived from its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFile {
    pub id: EntryId,
    pub path: PathBuf,
}

/// Lists `dir/**/*.{md,mdx}` sorted by id. A missing directory is an empty
/// collection.
pub fn scan_collection(dir: &Path) -> Result<Vec<CollectionFile>, ContentError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ContentError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() || !has_content_extension(entry.path()) {
            continue;
        }
        if let Some(id) = entry_id(dir, entry.path()) {
            files.push(CollectionFile {
                id,
                path: entry.into_path(),
            });
        }
    }

    files.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(files)
}

fn has_content_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// `<dir>/en/foo.mdx` -> `en/foo`, `/`-separated on every platform.
fn entry_id(dir: &Path, path: &Path) -> Option<EntryId> {
    let relative = path.strip_prefix(dir).ok()?.with_extension("");
    let segments: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(EntryId::from(segments.join("/")))
}
