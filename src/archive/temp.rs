use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::TempFileScope;

/// A [`TempDir`] is the canonical scope: files land inside the directory
/// and disappear with it when the caller drops the scope.
impl TempFileScope for TempDir {
    fn create_temp_file(&self, base_name: &str, extension: &str) -> io::Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix(&format!("{base_name}-"))
            .suffix(&format!(".{extension}"))
            .tempfile_in(self.path())?;

        // Hand ownership to the scope: the file must outlive this call,
        // the enclosing directory handles cleanup.
        let (_, path) = file.keep().map_err(|err| err.error)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_scope_names_files_from_entry_parts() {
        let scope = tempfile::tempdir().unwrap();
        let path = scope.create_temp_file("Foo", "class").unwrap();

        assert!(path.exists());
        assert_eq!(path.parent(), Some(scope.path()));

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("Foo-"));
        assert!(name.ends_with(".class"));
    }

    #[test]
    fn test_scope_owns_cleanup() {
        let scope = tempfile::tempdir().unwrap();
        let path = scope.create_temp_file("Bar", "kt").unwrap();
        drop(scope);
        assert!(!path.exists());
    }
}
