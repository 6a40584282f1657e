use std::path::PathBuf;

use cfg_if::cfg_if;

const DB_FILE_NAME: &str = "flights.db";

/// Conventional location of the reservations database when no path is configured.
pub fn default_db_path() -> PathBuf {
    cfg_if! {
        if #[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))] {
            let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            let dir = base.join("FlySky");
        } else if #[cfg(target_os = "android")] {
            let dir = PathBuf::from("/data/data/com.flysky.reservations/files/FlySky");
        } else {
            let dir = PathBuf::from(".");
        }
    }

    dir.join(DB_FILE_NAME)
}
