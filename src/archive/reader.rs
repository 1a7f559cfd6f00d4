use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{RefError, RefResult};
use crate::reference::ArchiveEntryRef;

use super::TempFileScope;

/// Read the referenced archive entry in full as UTF-8 text.
///
/// Requires the reference to carry an inner entry path. The archive handle
/// lives on this call's stack and is released on every exit path.
///
/// # Errors
///
/// [`RefError::NoInnerEntry`] when the reference addresses a file directly,
/// [`RefError::ArchiveOpen`] when the archive cannot be opened,
/// [`RefError::EntryNotFound`] when the entry is absent, and
/// [`RefError::Io`] on read failure (including non-UTF-8 contents).
pub fn read_contents(reference: &ArchiveEntryRef) -> RefResult<String> {
    let archive_path = reference.archive_path()?;
    let entry_name = inner_entry_name(reference)?;

    debug!(archive = %archive_path.display(), entry = entry_name, "reading archive entry");

    let mut archive = open_archive(&archive_path)?;
    let mut entry = archive
        .by_name(entry_name)
        .map_err(|err| entry_error(err, &archive_path, entry_name))?;

    let mut contents = String::new();
    entry.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Copy the referenced entry's raw bytes into a new file created through
/// the caller-supplied temporary-file scope, and return the file's path.
///
/// The extracted file is named from the entry's own base name and
/// extension, not from the reference's outer form.
///
/// # Errors
///
/// The same kinds as [`read_contents`], plus
/// [`RefError::InvalidEntryName`] when the entry name has no extension
/// segment to derive a file name from.
pub fn extract_to_temp_file(
    reference: &ArchiveEntryRef,
    scope: &dyn TempFileScope,
) -> RefResult<PathBuf> {
    let archive_path = reference.archive_path()?;
    let entry_name = inner_entry_name(reference)?;

    let mut archive = open_archive(&archive_path)?;
    let mut entry = archive
        .by_name(entry_name)
        .map_err(|err| entry_error(err, &archive_path, entry_name))?;

    // Name the output from the entry itself: "com/Foo.class" -> "Foo" + "class"
    let base_name = entry_name.rsplit('/').next().unwrap_or(entry_name);
    let (stem, extension) = base_name
        .rsplit_once('.')
        .ok_or_else(|| RefError::InvalidEntryName {
            name: entry_name.to_string(),
        })?;

    let output_path = scope.create_temp_file(stem, extension)?;
    let mut output = File::create(&output_path)?;
    io::copy(&mut entry, &mut output)?;

    debug!(
        archive = %archive_path.display(),
        entry = entry_name,
        output = %output_path.display(),
        "extracted archive entry"
    );

    Ok(output_path)
}

/// The entry name to look up in the archive's directory.
///
/// The identifier grammar writes inner paths with a leading `/`
/// (`...!/com/Foo.class`) while archives store `com/Foo.class`.
fn inner_entry_name(reference: &ArchiveEntryRef) -> RefResult<&str> {
    let inner = reference
        .inner_entry_path()
        .ok_or_else(|| RefError::NoInnerEntry {
            reference: reference.to_canonical_string(),
        })?;
    Ok(inner.strip_prefix('/').unwrap_or(inner))
}

fn open_archive(path: &Path) -> RefResult<ZipArchive<File>> {
    let file = File::open(path).map_err(|err| RefError::ArchiveOpen {
        path: path.to_path_buf(),
        source: ZipError::Io(err),
    })?;
    ZipArchive::new(file).map_err(|err| RefError::ArchiveOpen {
        path: path.to_path_buf(),
        source: err,
    })
}

fn entry_error(err: ZipError, archive: &Path, entry: &str) -> RefError {
    match err {
        ZipError::FileNotFound => RefError::EntryNotFound {
            archive: archive.to_path_buf(),
            entry: entry.to_string(),
        },
        ZipError::Io(err) => RefError::Io(err),
        other => RefError::ArchiveOpen {
            path: archive.to_path_buf(),
            source: other,
        },
    }
}
