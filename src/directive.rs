use crate::error::{Error, Result};
use crate::index::PortIndex;

/// Package name prefix of the Python flavor used to resolve directives.
pub const DEFAULT_PYTHON_PREFIX: &str = "py36-";

impl PortIndex {
    /// Format a flavored Python `*_DEPENDS` line for `short_name`.
    ///
    /// `short_name` is the package name without the interpreter prefix
    /// (e.g. `billiard`). The origin is that of the first package, in source
    /// order, whose name contains [`DEFAULT_PYTHON_PREFIX`] followed by
    /// `short_name` anywhere, as [`find_origins_containing`](Self::find_origins_containing)
    /// matches. The match is case-sensitive and not anchored, so `six` also
    /// resolves through a `py36-sixer` package listed earlier.
    ///
    /// # Examples
    ///
    /// ```
    /// use freebsd_ports_index::PortIndex;
    ///
    /// let index = PortIndex::load([
    ///     "py36-billiard-3.6.0.0|/usr/ports/devel/py-billiard|/usr/local|c|d|python@FreeBSD.org|devel python|||https://github.com/celery/billiard|||",
    /// ])
    /// .unwrap();
    /// assert_eq!(
    ///     index.gen_dependency_directive("billiard").unwrap(),
    ///     "\t${PYTHON_PKGNAMEPREFIX}billiard>=0:devel/py-billiard@${PY_FLAVOR} \\"
    /// );
    /// ```
    pub fn gen_dependency_directive(&self, short_name: &str) -> Result<String> {
        self.gen_dependency_directive_with(DEFAULT_PYTHON_PREFIX, short_name)
    }

    /// Like [`gen_dependency_directive`](Self::gen_dependency_directive), with
    /// an explicit interpreter prefix such as `py311-`.
    pub fn gen_dependency_directive_with(&self, prefix: &str, short_name: &str) -> Result<String> {
        let key = format!("{prefix}{short_name}");
        let origin = self
            .find_origins_containing(&key)
            .first()
            .copied()
            .ok_or(Error::NotFound(key))?;
        Ok(format!(
            "\t${{PYTHON_PKGNAMEPREFIX}}{short_name}>=0:{origin}@${{PY_FLAVOR}} \\"
        ))
    }
}
