use std::fmt;
use std::str::FromStr;

use winnow::combinator::preceded;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_till;

use crate::depends::DepKind;
use crate::error::{Error, Result};

/// A single package entry from a ports `INDEX` file.
///
/// One port directory may produce several records, e.g. one per Python
/// flavor (`py27-evdev-0.8.1` and `py36-evdev-0.8.1` both come from
/// `devel/py-evdev`).
///
/// See `Tools/make_index` in the ports tree for how the file is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRecord {
    /// Package name including version and revision (e.g. `ruby-2.5.5_2,1`).
    pub package_name: String,

    /// Port directory as `category/portname`.
    pub origin: String,

    /// Installation prefix (usually `/usr/local`).
    pub install_prefix: String,

    /// One-line description (`COMMENT`).
    pub short_description: String,

    /// Long description; in generated INDEX files this is the path to
    /// `pkg-descr`.
    pub long_description: String,

    /// Maintainer address.
    pub maintainer: String,

    /// Categories; the first one is the primary category.
    pub categories: Vec<String>,

    /// Build dependencies, as package names.
    pub build_deps: Vec<String>,

    /// Runtime dependencies, as package names.
    pub run_deps: Vec<String>,

    /// Extract dependencies, as package names.
    pub extra_deps: Vec<String>,

    /// Patch dependencies, as package names.
    pub patch_deps: Vec<String>,

    /// Fetch dependencies, as package names.
    pub fetch_deps: Vec<String>,

    /// Project homepage (`WWW`).
    pub homepage: String,
}

impl PortRecord {
    /// Parse one INDEX line into a `PortRecord`.
    ///
    /// A trailing line terminator is stripped. Space-separated list fields
    /// are split on every single space, so an empty field yields `[""]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use freebsd_ports_index::PortRecord;
    ///
    /// let line = "foo-1.0|/usr/ports/category/foo|/usr/local|Foo desc|Foo long desc|\
    ///             me@example.org|category|dep-a dep-b|dep-c|http://example.org|||\n";
    /// let record = PortRecord::parse_line(line).unwrap();
    /// assert_eq!(record.origin, "category/foo");
    /// assert_eq!(record.build_deps, vec!["dep-a", "dep-b"]);
    /// assert_eq!(record.fetch_deps, vec![""]);
    /// ```
    pub fn parse_line(line: &str) -> Result<PortRecord> {
        let line = strip_line_terminator(line);
        let (
            package_name,
            origin,
            install_prefix,
            short_description,
            long_description,
            maintainer,
            categories,
            build_deps,
            run_deps,
            homepage,
            extra_deps,
            patch_deps,
            fetch_deps,
        ) = parse_fields()
            .parse(line)
            .map_err(|_| Error::MalformedRecord {
                found: line.split('|').count(),
            })?;

        Ok(PortRecord {
            package_name: package_name.to_string(),
            origin: normalize_origin(origin),
            install_prefix: install_prefix.to_string(),
            short_description: short_description.to_string(),
            long_description: long_description.to_string(),
            maintainer: maintainer.to_string(),
            categories: split_list(categories),
            build_deps: split_list(build_deps),
            run_deps: split_list(run_deps),
            extra_deps: split_list(extra_deps),
            patch_deps: split_list(patch_deps),
            fetch_deps: split_list(fetch_deps),
            homepage: homepage.to_string(),
        })
    }

    /// The raw dependency list of the given kind.
    pub fn deps(&self, kind: DepKind) -> &[String] {
        match kind {
            DepKind::Build => &self.build_deps,
            DepKind::Run => &self.run_deps,
            DepKind::Extra => &self.extra_deps,
            DepKind::Patch => &self.patch_deps,
            DepKind::Fetch => &self.fetch_deps,
        }
    }

    /// Every dependency entry with its kind, in INDEX field order.
    ///
    /// Empty entries from empty fields are included.
    pub fn all_deps(&self) -> impl Iterator<Item = (DepKind, &str)> + '_ {
        DepKind::ALL
            .into_iter()
            .flat_map(move |kind| self.deps(kind).iter().map(move |d| (kind, d.as_str())))
    }

    /// Whether `name` appears literally in any dependency list.
    pub fn depends_on(&self, name: &str) -> bool {
        DepKind::ALL
            .into_iter()
            .any(|kind| self.deps(kind).iter().any(|d| d == name))
    }

    /// The primary (first) category, if any.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories
            .first()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }
}

impl FromStr for PortRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PortRecord::parse_line(s)
    }
}

impl fmt::Display for PortRecord {
    /// Writes the record back as an INDEX line, without a line terminator.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.package_name,
            self.origin,
            self.install_prefix,
            self.short_description,
            self.long_description,
            self.maintainer,
            self.categories.join(" "),
            self.build_deps.join(" "),
            self.run_deps.join(" "),
            self.homepage,
            self.extra_deps.join(" "),
            self.patch_deps.join(" "),
            self.fetch_deps.join(" "),
        )
    }
}

fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Keep the last two path segments, e.g. `/usr/ports/lang/ruby25` -> `lang/ruby25`.
fn normalize_origin(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').collect();
    let start = segments.len().saturating_sub(2);
    segments[start..].join("/")
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(' ').map(str::to_string).collect()
}

// Winnow parsers

type Fields<'s> = (
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
    &'s str,
);

fn field<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_till(0.., '|').parse_next(input)
}

fn next_field<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded('|', field).parse_next(input)
}

/// Exactly 13 fields; `parse` rejects any input left over.
fn parse_fields<'s>() -> impl Parser<&'s str, Fields<'s>, ErrMode<ContextError>> {
    (
        field,
        next_field,
        next_field,
        next_field,
        next_field,
        next_field,
        next_field,
        next_field,
        next_field,
        next_field,
        next_field,
        next_field,
        next_field,
    )
}
