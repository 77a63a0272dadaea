use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fresh directory per call; tests remove it with `fs::remove_dir_all` when done.
pub fn scratch_dir(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let count = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "ini_reader_{name}_{}_{count}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_ini(dir: &Path, file_name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).unwrap();
    path
}
