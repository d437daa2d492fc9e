//! Plugin candidate discovery.

use std::fs;

use tracing::debug;

use super::error::{PluginError, Result};

/// List `folder` one level deep and keep the files whose name contains
/// `pattern` as a plain substring (not a glob, not a regex).
///
/// Candidate paths are `folder` + file name, verbatim: the caller is
/// responsible for the trailing path separator, nothing is normalized here.
/// An empty pattern keeps every file. Directories are skipped. Entries come
/// back in whatever order the underlying directory listing yields them.
pub fn scan(folder: &str, pattern: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(folder).map_err(|source| PluginError::DirectoryRead {
        folder: folder.to_string(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PluginError::DirectoryRead {
            folder: folder.to_string(),
            source,
        })?;
        if entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.contains(pattern) {
            candidates.push(format!("{folder}{name}"));
        }
    }

    debug!(folder, pattern, count = candidates.len(), "scanned plugin folder");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::{self, File};

    use tempfile::TempDir;

    /// Folder string with the trailing separator the scanner contract
    /// requires.
    fn folder_of(dir: &TempDir) -> String {
        format!("{}/", dir.path().display())
    }

    fn sorted(mut paths: Vec<String>) -> Vec<String> {
        paths.sort();
        paths
    }

    #[test]
    fn keeps_only_files_matching_the_pattern() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a_plugin.so")).unwrap();
        File::create(dir.path().join("b_other.txt")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let folder = folder_of(&dir);
        let candidates = scan(&folder, "plugin").unwrap();

        assert_eq!(candidates, vec![format!("{folder}a_plugin.so")]);
    }

    #[test]
    fn empty_pattern_keeps_every_file() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("one.so")).unwrap();
        File::create(dir.path().join("two.txt")).unwrap();

        let folder = folder_of(&dir);
        let candidates = scan(&folder, "").unwrap();

        assert_eq!(
            sorted(candidates),
            vec![format!("{folder}one.so"), format!("{folder}two.txt")]
        );
    }

    #[test]
    fn directories_are_skipped_even_when_their_name_matches() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("plugin_dir")).unwrap();
        File::create(dir.path().join("plugin_file.so")).unwrap();

        let folder = folder_of(&dir);
        let candidates = scan(&folder, "plugin").unwrap();

        assert_eq!(candidates, vec![format!("{folder}plugin_file.so")]);
    }

    #[test]
    fn missing_folder_is_a_directory_read_error() {
        let err = scan("/definitely/not/a/real/folder/", "").unwrap_err();
        assert!(matches!(err, PluginError::DirectoryRead { .. }));
    }

    #[test]
    fn folder_that_is_a_file_is_a_directory_read_error() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("not_a_dir.txt");
        File::create(&file_path).unwrap();

        let err = scan(&file_path.display().to_string(), "").unwrap_err();
        assert!(matches!(err, PluginError::DirectoryRead { .. }));
    }

    #[test]
    fn candidate_paths_concatenate_folder_and_name_verbatim() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("mod.so")).unwrap();

        // No trailing separator on purpose: the scanner must not add one.
        let folder = dir.path().display().to_string();
        let candidates = scan(&folder, "").unwrap();

        assert_eq!(candidates, vec![format!("{folder}mod.so")]);
    }
}
