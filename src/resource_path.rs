use std::path::{Path, PathBuf};

/// Resolve an asset path whether the game is launched from the repo root
/// or from inside the target directory.
pub fn find_resource(relative_path: &str) -> Option<PathBuf> {
    let search_paths = ["", "../", "../../"];

    for base in &search_paths {
        let full_path = Path::new(base).join(relative_path);
        if full_path.exists() {
            return Some(full_path);
        }
    }

    None
}
