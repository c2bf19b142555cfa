use std::ffi::OsString;
use std::path::PathBuf;

/// Default ports tree location.
pub const DEFAULT_PORTS_DIR: &str = "/usr/ports";

/// Default INDEX file name inside the ports tree.
pub const DEFAULT_INDEX_NAME: &str = "INDEX-13";

/// Environment variable overriding the ports tree location.
pub const PORTSDIR_VAR: &str = "PORTSDIR";

/// Path of the INDEX file used when the caller does not supply one.
///
/// This is `$PORTSDIR/INDEX-13` when `PORTSDIR` is set to a non-empty
/// value, and `/usr/ports/INDEX-13` otherwise.
pub fn default_index_path() -> PathBuf {
    index_path_in(std::env::var_os(PORTSDIR_VAR))
}

fn index_path_in(portsdir: Option<OsString>) -> PathBuf {
    let dir = match portsdir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_PORTS_DIR),
    };
    dir.join(DEFAULT_INDEX_NAME)
}
