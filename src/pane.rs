use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// The browsed directory: its path, sorted listing and cursor.
///
/// `path` always matches the process working directory; it only changes
/// through [`PaneState::change_directory`].
pub struct PaneState {
    pub path: PathBuf,
    pub entries: Vec<Entry>,
    cursor: usize,
}

impl PaneState {
    /// Open `path` as the starting directory and move the process there.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let (path, entries) = enter_directory(path)?;
        Ok(Self {
            path,
            entries,
            cursor: 0,
        })
    }

    /// Move to `target`, resolved against the current directory.
    ///
    /// On failure nothing changes: path, listing and cursor keep their
    /// previous values.
    pub fn change_directory(&mut self, target: &Path) -> Result<(), AppError> {
        let (path, entries) = enter_directory(&self.path.join(target))?;
        self.path = path;
        self.entries = entries;
        self.cursor = 0;
        Ok(())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor < self.entries.len().saturating_sub(1) {
            self.cursor += 1;
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve, list and chdir into `path`; returns the canonical path and listing.
fn enter_directory(path: &Path) -> Result<(PathBuf, Vec<Entry>), AppError> {
    let access_error = |source| AppError::DirectoryAccess {
        path: path.to_path_buf(),
        source,
    };

    let resolved = path.canonicalize().map_err(access_error)?;
    let entries = list_directory(&resolved).map_err(access_error)?;
    env::set_current_dir(&resolved).map_err(access_error)?;

    Ok((resolved, entries))
}

/// List a directory, sorted case-insensitively.
///
/// `read_dir` never yields "." or ".."; entries that fail to read are
/// skipped. Ties keep enumeration order since the sort is stable.
pub fn list_directory(path: &Path) -> std::io::Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .map(|e| {
            let path = e.path();
            // Follow symlinks so a link to a directory can be entered
            let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
            Entry {
                name: e.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            }
        })
        .collect();

    entries.sort_by_cached_key(|e| e.name.to_lowercase());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::cwd_lock;
    use tempfile::TempDir;

    fn names(pane: &PaneState) -> Vec<&str> {
        pane.entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn setup_dir() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();
        fs::write(tmp.path().join("A.txt"), "a").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("inner.txt"), "x").unwrap();
        tmp
    }

    #[test]
    fn test_list_directory_sorted_case_insensitive() {
        let tmp = setup_dir();
        fs::write(tmp.path().join("c.md"), "").unwrap();
        fs::write(tmp.path().join("Zeta"), "").unwrap();

        let entries = list_directory(tmp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A.txt", "b.txt", "c.md", "sub", "Zeta"]);
        assert!(names.iter().all(|n| *n != "." && *n != ".."));
    }

    #[test]
    fn test_list_directory_marks_directories() {
        let tmp = setup_dir();
        let entries = list_directory(tmp.path()).unwrap();
        let sub = entries.iter().find(|e| e.name == "sub").unwrap();
        assert!(sub.is_dir);
        assert!(entries.iter().filter(|e| e.name != "sub").all(|e| !e.is_dir));
    }

    #[test]
    fn test_list_directory_missing_path_errors() {
        let tmp = TempDir::new().unwrap();
        assert!(list_directory(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_open_moves_process_directory() {
        let _guard = cwd_lock();
        let tmp = setup_dir();
        let pane = PaneState::open(tmp.path()).unwrap();

        assert_eq!(pane.path, tmp.path().canonicalize().unwrap());
        assert_eq!(env::current_dir().unwrap(), pane.path);
        assert_eq!(names(&pane), ["A.txt", "b.txt", "sub"]);
        assert_eq!(pane.cursor(), 0);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let _guard = cwd_lock();
        let tmp = setup_dir();
        let mut pane = PaneState::open(tmp.path()).unwrap();

        pane.move_up();
        assert_eq!(pane.cursor(), 0);
        for _ in 0..10 {
            pane.move_down();
        }
        assert_eq!(pane.cursor(), 2);
        pane.move_up();
        assert_eq!(pane.cursor(), 1);
        assert_eq!(pane.selected_entry().unwrap().name, "b.txt");
    }

    #[test]
    fn test_cursor_moves_on_empty_listing_are_noops() {
        let _guard = cwd_lock();
        let tmp = TempDir::new().unwrap();
        let mut pane = PaneState::open(tmp.path()).unwrap();

        pane.move_down();
        pane.move_up();
        assert_eq!(pane.cursor(), 0);
        assert!(pane.selected_entry().is_none());
    }

    #[test]
    fn test_change_directory_descends_and_resets_cursor() {
        let _guard = cwd_lock();
        let tmp = setup_dir();
        let mut pane = PaneState::open(tmp.path()).unwrap();
        pane.move_down();

        pane.change_directory(Path::new("sub")).unwrap();
        assert_eq!(pane.path, tmp.path().join("sub").canonicalize().unwrap());
        assert_eq!(env::current_dir().unwrap(), pane.path);
        assert_eq!(names(&pane), ["inner.txt"]);
        assert_eq!(pane.cursor(), 0);

        pane.change_directory(Path::new("..")).unwrap();
        assert_eq!(pane.path, tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_change_directory_failure_keeps_state() {
        let _guard = cwd_lock();
        let tmp = setup_dir();
        let mut pane = PaneState::open(tmp.path()).unwrap();
        pane.move_down();
        let before = pane.path.clone();

        let err = pane.change_directory(Path::new("does-not-exist")).unwrap_err();
        assert!(matches!(err, AppError::DirectoryAccess { .. }));

        // A regular file is not enterable either
        assert!(pane.change_directory(Path::new("A.txt")).is_err());

        assert_eq!(pane.path, before);
        assert_eq!(names(&pane), ["A.txt", "b.txt", "sub"]);
        assert_eq!(pane.cursor(), 1);
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
