use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Dependency kind of a port.
///
/// Each kind corresponds to one dependency field of an INDEX line and to a
/// `*_DEPENDS` variable in the port's Makefile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepKind {
    /// `BUILD_DEPENDS`: needed to build the port.
    Build,
    /// `RUN_DEPENDS`: needed at runtime.
    Run,
    /// `EXTRACT_DEPENDS`: needed to extract the distfiles.
    Extra,
    /// `PATCH_DEPENDS`: needed to patch the sources.
    Patch,
    /// `FETCH_DEPENDS`: needed to fetch the distfiles.
    Fetch,
}

impl DepKind {
    /// All kinds, in the order their fields appear in an INDEX line.
    pub const ALL: [DepKind; 5] = [
        DepKind::Build,
        DepKind::Run,
        DepKind::Extra,
        DepKind::Patch,
        DepKind::Fetch,
    ];

    /// The Makefile variable holding dependencies of this kind.
    pub fn makefile_var(self) -> &'static str {
        match self {
            DepKind::Build => "BUILD_DEPENDS",
            DepKind::Run => "RUN_DEPENDS",
            DepKind::Extra => "EXTRACT_DEPENDS",
            DepKind::Patch => "PATCH_DEPENDS",
            DepKind::Fetch => "FETCH_DEPENDS",
        }
    }
}

impl FromStr for DepKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Short names plus the Makefile variable names.
        match s {
            "build" | "BUILD_DEPENDS" => Ok(DepKind::Build),
            "run" | "RUN_DEPENDS" => Ok(DepKind::Run),
            "extra" | "extract" | "EXTRACT_DEPENDS" => Ok(DepKind::Extra),
            "patch" | "PATCH_DEPENDS" => Ok(DepKind::Patch),
            "fetch" | "FETCH_DEPENDS" => Ok(DepKind::Fetch),
            _ => Err(Error::InvalidDepKind(s.to_string())),
        }
    }
}

impl fmt::Display for DepKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            DepKind::Build => "build",
            DepKind::Run => "run",
            DepKind::Extra => "extract",
            DepKind::Patch => "patch",
            DepKind::Fetch => "fetch",
        };
        f.write_str(s)
    }
}
