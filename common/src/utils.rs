use std::path::{Path, PathBuf};

/// Walks up from the current working directory and then from the directory of
/// the running executable, returning the first existing entry named `name`.
pub fn search_current_ancestor_dirs_for(name: &str) -> Option<PathBuf> {
    [std::env::current_dir(), std::env::current_exe()]
        .into_iter()
        .filter_map(Result::ok)
        .find_map(|start| search_ancestors_of(&start, name))
}

/// Same as [`search_current_ancestor_dirs_for`] but starting from `start`.
pub fn search_ancestors_of(start: &Path, name: &str) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| try_join_path(dir, name))
}

pub fn try_join_path(path: impl AsRef<Path>, child: impl AsRef<Path>) -> Option<PathBuf> {
    let path = path.as_ref().join(child);
    if path.exists() { Some(path) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_entry_in_an_ancestor() {
        let root = std::env::temp_dir().join(format!("numcmn_utils_{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("marker.toml"), "").unwrap();

        let found = search_ancestors_of(&nested, "marker.toml");
        assert_eq!(found, Some(root.join("marker.toml")));
        assert_eq!(search_ancestors_of(&nested, "surely_missing_entry.toml"), None);

        std::fs::remove_dir_all(&root).unwrap();
    }
}
