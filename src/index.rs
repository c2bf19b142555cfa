use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::depends::DepKind;
use crate::error::{Error, Result};
use crate::location::default_index_path;
use crate::record::PortRecord;

/// An in-memory ports INDEX.
///
/// Holds every record in source order plus a map from package name to
/// record. The index is built once and never modified afterwards, so a
/// shared reference can be queried from any number of threads.
///
/// Queries other than [`find_by_exact_name`](Self::find_by_exact_name) are
/// linear scans in source order. When several records match a first-match
/// query, the earliest one in the file wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortIndex {
    records: Vec<PortRecord>,
    by_name: HashMap<String, usize>,
}

impl PortIndex {
    /// Build an index from INDEX lines, in order.
    ///
    /// A single malformed line fails the whole load; the error carries its
    /// 1-based line number.
    ///
    /// # Examples
    ///
    /// ```
    /// use freebsd_ports_index::PortIndex;
    ///
    /// let lines = [
    ///     "a-1.0|x/a|/usr/local|A|A long|me@example.org|x|b-1.0||http://a.example|||",
    ///     "b-1.0|x/b|/usr/local|B|B long|me@example.org|x|||http://b.example|||",
    /// ];
    /// let index = PortIndex::load(lines).unwrap();
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.reverse_deps("b-1.0"), vec!["a-1.0"]);
    /// ```
    pub fn load<I, S>(lines: I) -> Result<PortIndex>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(lines.into_iter().map(Ok))
    }

    /// Build an index from the full text of an INDEX file.
    pub fn parse(text: &str) -> Result<PortIndex> {
        Self::load(text.lines())
    }

    /// Read and parse the INDEX file at `path`.
    ///
    /// The file is read line by line and closed before returning, whether
    /// or not parsing succeeds.
    pub fn load_file(path: impl AsRef<Path>) -> Result<PortIndex> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let index = Self::build(BufReader::new(file).lines().map(|l| l.map_err(io_err)))?;

        log::debug!("loaded {} INDEX records from {}", index.len(), path.display());
        Ok(index)
    }

    /// Load `path`, or the default INDEX location when `path` is `None`.
    ///
    /// See [`default_index_path`](crate::default_index_path).
    pub fn open(path: Option<&Path>) -> Result<PortIndex> {
        match path {
            Some(path) => Self::load_file(path),
            None => Self::load_file(default_index_path()),
        }
    }

    fn build<I, S>(lines: I) -> Result<PortIndex>
    where
        I: IntoIterator<Item = Result<S>>,
        S: AsRef<str>,
    {
        let mut index = PortIndex::default();
        for (n, line) in lines.into_iter().enumerate() {
            let line = line?;
            let record = PortRecord::parse_line(line.as_ref()).map_err(|e| Error::Line {
                line: n + 1,
                source: Box::new(e),
            })?;
            index.insert(record);
        }
        Ok(index)
    }

    fn insert(&mut self, record: PortRecord) {
        let pos = self.records.len();
        if let Some(prev) = self.by_name.insert(record.package_name.clone(), pos) {
            log::warn!(
                "duplicate package {} at records {} and {}, keeping the later one",
                record.package_name,
                prev + 1,
                pos + 1
            );
        }
        self.records.push(record);
    }

    /// Number of records, duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order.
    pub fn records(&self) -> &[PortRecord] {
        &self.records
    }

    /// Iterate over records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, PortRecord> {
        self.records.iter()
    }

    /// Look up a record by its exact package name.
    pub fn find_by_exact_name(&self, name: &str) -> Result<&PortRecord> {
        self.by_name
            .get(name)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Origin of the package with exactly this name.
    pub fn origin_of(&self, name: &str) -> Result<&str> {
        self.find_by_exact_name(name).map(|r| r.origin.as_str())
    }

    /// Origin of the first record whose package name starts with `prefix`,
    /// ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use freebsd_ports_index::PortIndex;
    ///
    /// let index = PortIndex::load([
    ///     "ruby-2.5.5_2,1|/usr/ports/lang/ruby25|/usr/local|Ruby|d|ruby@FreeBSD.org|lang ruby|||https://www.ruby-lang.org/|||",
    /// ])
    /// .unwrap();
    /// assert_eq!(index.find_origin_by_prefix("Ruby-2").unwrap(), "lang/ruby25");
    /// assert!(index.find_origin_by_prefix("python").is_err());
    /// ```
    pub fn find_origin_by_prefix(&self, prefix: &str) -> Result<&str> {
        let needle = prefix.to_lowercase();
        self.records
            .iter()
            .find(|r| r.package_name.to_lowercase().starts_with(&needle))
            .map(|r| r.origin.as_str())
            .ok_or_else(|| Error::NotFound(prefix.to_string()))
    }

    /// Package name of the first record whose origin starts with `prefix`.
    pub fn find_name_by_origin_prefix(&self, prefix: &str) -> Result<&str> {
        self.records
            .iter()
            .find(|r| r.origin.starts_with(prefix))
            .map(|r| r.package_name.as_str())
            .ok_or_else(|| Error::NotFound(prefix.to_string()))
    }

    /// Every record whose origin contains `fragment`, in source order.
    pub fn find_all_by_origin_substring(&self, fragment: &str) -> Vec<&PortRecord> {
        self.records
            .iter()
            .filter(|r| r.origin.contains(fragment))
            .collect()
    }

    /// Every record built from exactly this origin, e.g. all flavors of a
    /// port.
    pub fn find_all_by_origin(&self, origin: &str) -> Vec<&PortRecord> {
        self.records.iter().filter(|r| r.origin == origin).collect()
    }

    /// Every record whose package name starts with `prefix`, in source order.
    pub fn find_all_by_name_prefix(&self, prefix: &str) -> Vec<&PortRecord> {
        self.records
            .iter()
            .filter(|r| r.package_name.starts_with(prefix))
            .collect()
    }

    /// Package names containing `fragment`, in source order.
    pub fn find_names_containing(&self, fragment: &str) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.package_name.contains(fragment))
            .map(|r| r.package_name.as_str())
            .collect()
    }

    /// Origins of the packages whose name contains `fragment`, one per
    /// matching record.
    pub fn find_origins_containing(&self, fragment: &str) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.package_name.contains(fragment))
            .map(|r| r.origin.as_str())
            .collect()
    }

    /// Every record maintained by exactly `maintainer`.
    pub fn search_by_maintainer(&self, maintainer: &str) -> Vec<&PortRecord> {
        self.records
            .iter()
            .filter(|r| r.maintainer == maintainer)
            .collect()
    }

    /// Distinct maintainers, in order of first appearance.
    pub fn maintainers(&self) -> Vec<&str> {
        dedup_in_order(self.records.iter().map(|r| r.maintainer.as_str()))
    }

    /// The record a dependency list query refers to: the package with this
    /// exact name, else the last record with this exact origin.
    fn resolve(&self, origin_or_name: &str) -> Result<&PortRecord> {
        self.find_by_exact_name(origin_or_name).or_else(|_| {
            self.records
                .iter()
                .rev()
                .find(|r| r.origin == origin_or_name)
                .ok_or_else(|| Error::NotFound(origin_or_name.to_string()))
        })
    }

    /// The records a dependency origin query walks: the package with this
    /// exact name, else every flavor of this origin in source order.
    fn resolve_all(&self, origin_or_name: &str) -> Result<Vec<&PortRecord>> {
        if let Ok(record) = self.find_by_exact_name(origin_or_name) {
            return Ok(vec![record]);
        }
        let flavors = self.find_all_by_origin(origin_or_name);
        if flavors.is_empty() {
            return Err(Error::NotFound(origin_or_name.to_string()));
        }
        Ok(flavors)
    }

    /// Raw dependency list of one kind for a package name or origin.
    ///
    /// When several flavors share the origin, the last one in source order
    /// answers, the same way duplicate names resolve. Empty fields yield
    /// `[""]`; callers filter empty entries if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use freebsd_ports_index::{DepKind, PortIndex};
    ///
    /// let index = PortIndex::parse("\
    /// py27-six-1.12|devel/py-six|/usr/local|c|d|m|devel|python27-2.7||w|||
    /// py36-six-1.12|devel/py-six|/usr/local|c|d|m|devel|python36-3.6||w|||
    /// ").unwrap();
    /// assert_eq!(index.deps_of(DepKind::Build, "devel/py-six").unwrap(), ["python36-3.6"]);
    /// assert_eq!(index.deps_of(DepKind::Run, "devel/py-six").unwrap(), [""]);
    /// ```
    pub fn deps_of(&self, kind: DepKind, origin_or_name: &str) -> Result<&[String]> {
        self.resolve(origin_or_name).map(|r| r.deps(kind))
    }

    /// Build dependencies of a package name or origin.
    pub fn build_deps_of(&self, origin_or_name: &str) -> Result<&[String]> {
        self.deps_of(DepKind::Build, origin_or_name)
    }

    /// Run dependencies of a package name or origin.
    pub fn run_deps_of(&self, origin_or_name: &str) -> Result<&[String]> {
        self.deps_of(DepKind::Run, origin_or_name)
    }

    /// Origins of the dependencies of one kind.
    ///
    /// An origin key walks every flavor of the port, so the result is the
    /// concatenation of each flavor's list in source order. Each dependency
    /// name is resolved by exact lookup; empty entries and names missing
    /// from the index yield `""` in their position. See
    /// [`resolved_deps_origins_of`](Self::resolved_deps_origins_of) for the
    /// list without them.
    pub fn deps_origins_of(&self, kind: DepKind, origin_or_name: &str) -> Result<Vec<&str>> {
        let mut origins = Vec::new();
        for record in self.resolve_all(origin_or_name)? {
            for dep in record.deps(kind) {
                match self.origin_of(dep) {
                    Ok(origin) => origins.push(origin),
                    Err(_) => {
                        if !dep.is_empty() {
                            log::trace!(
                                "{kind} dependency {dep} of {} is not in the index",
                                record.package_name
                            );
                        }
                        origins.push("");
                    }
                }
            }
        }
        Ok(origins)
    }

    /// Like [`deps_origins_of`](Self::deps_origins_of), with the `""`
    /// placeholders for empty and unresolvable entries dropped.
    pub fn resolved_deps_origins_of(
        &self,
        kind: DepKind,
        origin_or_name: &str,
    ) -> Result<Vec<&str>> {
        let mut origins = self.deps_origins_of(kind, origin_or_name)?;
        origins.retain(|origin| !origin.is_empty());
        Ok(origins)
    }

    /// Origins of the build dependencies of a port, across all its flavors.
    pub fn build_deps_origins_of(&self, origin: &str) -> Result<Vec<&str>> {
        self.deps_origins_of(DepKind::Build, origin)
    }

    /// Origins of the run dependencies of a port, across all its flavors.
    pub fn run_deps_origins_of(&self, origin: &str) -> Result<Vec<&str>> {
        self.deps_origins_of(DepKind::Run, origin)
    }

    /// Package names that list `name` in any dependency field.
    ///
    /// Each dependent appears once, in source order. An empty `name` has no
    /// dependents.
    pub fn reverse_deps(&self, name: &str) -> Vec<&str> {
        if name.is_empty() {
            return Vec::new();
        }
        dedup_in_order(
            self.records
                .iter()
                .filter(|r| r.depends_on(name))
                .map(|r| r.package_name.as_str()),
        )
    }

    /// Origins of the packages that list `name` in any dependency field,
    /// without duplicates.
    pub fn reverse_deps_origins(&self, name: &str) -> Vec<&str> {
        if name.is_empty() {
            return Vec::new();
        }
        dedup_in_order(
            self.records
                .iter()
                .filter(|r| r.depends_on(name))
                .map(|r| r.origin.as_str()),
        )
    }
}

fn dedup_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}

impl FromStr for PortIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PortIndex::parse(s)
    }
}

impl<'a> IntoIterator for &'a PortIndex {
    type Item = &'a PortRecord;
    type IntoIter = std::slice::Iter<'a, PortRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ruby-2.5.5_2,1|/usr/ports/lang/ruby25|/usr/local|Object-oriented interpreted scripting language|/usr/ports/lang/ruby25/pkg-descr|ruby@FreeBSD.org|lang ruby|libffi-3.2.1_3 libyaml-0.2.2 pkgconf-1.6.1,1|libffi-3.2.1_3 libyaml-0.2.2|https://www.ruby-lang.org/en/|||
libffi-3.2.1_3|/usr/ports/devel/libffi|/usr/local|Foreign Function Interface|/usr/ports/devel/libffi/pkg-descr|desktop@FreeBSD.org|devel|||https://sourceware.org/libffi/|||
libyaml-0.2.2|/usr/ports/textproc/libyaml|/usr/local|YAML 1.1 parser and emitter written in C|/usr/ports/textproc/libyaml/pkg-descr|swills@FreeBSD.org|textproc|||https://pyyaml.org/wiki/LibYAML|||
py27-evdev-0.8.1|/usr/ports/devel/py-evdev|/usr/local|Bindings to the Linux input handling subsystem|/usr/ports/devel/py-evdev/pkg-descr|swills@FreeBSD.org|devel python|python27-2.7.16_1 libevdev-1.6.0|python27-2.7.16_1 libevdev-1.6.0|https://github.com/gvalkov/python-evdev|||
py36-evdev-0.8.1|/usr/ports/devel/py-evdev|/usr/local|Bindings to the Linux input handling subsystem|/usr/ports/devel/py-evdev/pkg-descr|swills@FreeBSD.org|devel python|python36-3.6.9 libevdev-1.6.0|python36-3.6.9 libevdev-1.6.0|https://github.com/gvalkov/python-evdev|||
py36-billiard-3.6.0.0|/usr/ports/devel/py-billiard|/usr/local|Python multiprocessing fork|/usr/ports/devel/py-billiard/pkg-descr|python@FreeBSD.org|devel python|python36-3.6.9|python36-3.6.9|https://github.com/celery/billiard|||
fist-1.0|/usr/ports/textproc/fist|/usr/local|Fast indexed search tool|/usr/ports/textproc/fist/pkg-descr|swills@FreeBSD.org|textproc|||https://example.org/fist|||fetch-1.0
";

    fn sample() -> PortIndex {
        PortIndex::parse(SAMPLE).unwrap()
    }

    #[test]
    fn load_counts_records() {
        let index = sample();
        assert_eq!(index.len(), 7);
        assert!(!index.is_empty());
        assert_eq!(index.records()[0].package_name, "ruby-2.5.5_2,1");
        assert_eq!(index.iter().last().unwrap().package_name, "fist-1.0");
    }

    #[test]
    fn load_fails_on_malformed_line() {
        let text = "a-1.0|x/a|/usr/local|A|A|m|x|||w|||\nbroken|line\n";
        let err = PortIndex::parse(text).unwrap_err();
        match err {
            Error::Line { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, Error::MalformedRecord { found: 2 }));
            }
            _ => unreachable!("expected Line error"),
        }
    }

    #[test]
    fn empty_source_is_empty_index() {
        let index = PortIndex::parse("").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn duplicate_names_last_wins() {
        let text = "\
a-1.0|x/first|/usr/local|A|A|m|x|||w|||
a-1.0|x/second|/usr/local|A|A|m|x|||w|||
";
        let index = PortIndex::parse(text).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.find_by_exact_name("a-1.0").unwrap().origin, "x/second");
    }

    #[test]
    fn exact_name_lookup() {
        let index = sample();
        for record in &index {
            let found = index.find_by_exact_name(&record.package_name).unwrap();
            assert_eq!(found.package_name, record.package_name);
        }
        let err = index.find_by_exact_name("ruby-2").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn origin_of_name() {
        let index = sample();
        assert_eq!(index.origin_of("py27-evdev-0.8.1").unwrap(), "devel/py-evdev");
        assert!(index.origin_of("py27-evdev").is_err());
    }

    #[test]
    fn origin_by_prefix() {
        let index = sample();
        assert_eq!(index.find_origin_by_prefix("ruby-2").unwrap(), "lang/ruby25");
        assert_eq!(
            index.find_origin_by_prefix("ruby-2.5.5_2,1").unwrap(),
            "lang/ruby25"
        );
        assert_eq!(index.find_origin_by_prefix("fist-").unwrap(), "textproc/fist");
        assert_eq!(index.find_origin_by_prefix("PY27-EVDEV").unwrap(), "devel/py-evdev");
        assert!(index.find_origin_by_prefix("perl5").is_err());
    }

    #[test]
    fn origin_by_prefix_first_match_wins() {
        let index = sample();
        // Both libffi and libyaml start with "lib"; libffi comes first.
        assert_eq!(index.find_origin_by_prefix("lib").unwrap(), "devel/libffi");
        // Both evdev flavors share the "py" prefix with billiard.
        assert_eq!(index.find_origin_by_prefix("py").unwrap(), "devel/py-evdev");
    }

    #[test]
    fn name_by_origin_prefix() {
        let index = sample();
        assert_eq!(
            index.find_name_by_origin_prefix("lang/ruby25").unwrap(),
            "ruby-2.5.5_2,1"
        );
        // First flavor in source order.
        assert_eq!(
            index.find_name_by_origin_prefix("devel/py-evdev").unwrap(),
            "py27-evdev-0.8.1"
        );
        // Case-sensitive.
        assert!(index.find_name_by_origin_prefix("Lang/").is_err());
    }

    #[test]
    fn origin_substring_keeps_order() {
        let index = sample();
        let found = index.find_all_by_origin_substring("devel/");
        let names: Vec<_> = found.iter().map(|r| r.package_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "libffi-3.2.1_3",
                "py27-evdev-0.8.1",
                "py36-evdev-0.8.1",
                "py36-billiard-3.6.0.0",
            ]
        );
        assert!(found.iter().all(|r| r.origin.contains("devel/")));
        assert!(index.find_all_by_origin_substring("games/").is_empty());
    }

    #[test]
    fn all_flavors_of_origin() {
        let index = sample();
        let flavors = index.find_all_by_origin("devel/py-evdev");
        assert_eq!(flavors.len(), 2);
        assert_eq!(flavors[0].package_name, "py27-evdev-0.8.1");
        assert_eq!(flavors[1].package_name, "py36-evdev-0.8.1");
        assert_eq!(index.find_all_by_origin("textproc/fist")[0].categories[0], "textproc");
    }

    #[test]
    fn name_prefix_is_anchored() {
        let index = sample();
        let found = index.find_all_by_name_prefix("py36-");
        let names: Vec<_> = found.iter().map(|r| r.package_name.as_str()).collect();
        assert_eq!(names, vec!["py36-evdev-0.8.1", "py36-billiard-3.6.0.0"]);
        assert!(index.find_all_by_name_prefix("evdev").is_empty());
    }

    #[test]
    fn name_prefix_excludes_other_flavors() {
        let text = "\
py36-foo-1.0|devel/py-foo|/usr/local|c|d|m|devel|||w|||
py27-foo-1.0|devel/py-foo|/usr/local|c|d|m|devel|||w|||
";
        let index = PortIndex::parse(text).unwrap();
        let found = index.find_all_by_name_prefix("py36-");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].package_name, "py36-foo-1.0");
    }

    #[test]
    fn substring_name_search() {
        let index = sample();
        assert_eq!(
            index.find_names_containing("evdev"),
            vec!["py27-evdev-0.8.1", "py36-evdev-0.8.1"]
        );
        assert_eq!(
            index.find_origins_containing("evdev"),
            vec!["devel/py-evdev", "devel/py-evdev"]
        );
    }

    #[test]
    fn maintainer_search() {
        let index = sample();
        let found = index.search_by_maintainer("swills@FreeBSD.org");
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|r| r.maintainer == "swills@FreeBSD.org"));
        assert!(index.search_by_maintainer("swills").is_empty());
    }

    #[test]
    fn distinct_maintainers() {
        let index = sample();
        assert_eq!(
            index.maintainers(),
            vec![
                "ruby@FreeBSD.org",
                "desktop@FreeBSD.org",
                "swills@FreeBSD.org",
                "python@FreeBSD.org",
            ]
        );
    }

    #[test]
    fn deps_by_origin_or_name() {
        let index = sample();
        let by_origin = index.build_deps_of("lang/ruby25").unwrap();
        let by_name = index.build_deps_of("ruby-2.5.5_2,1").unwrap();
        assert_eq!(by_origin, by_name);
        assert_eq!(by_origin.len(), 3);
        assert_eq!(by_origin[0], "libffi-3.2.1_3");

        assert_eq!(
            index.run_deps_of("lang/ruby25").unwrap(),
            ["libffi-3.2.1_3", "libyaml-0.2.2"]
        );
        assert_eq!(index.run_deps_of("devel/libffi").unwrap(), [""]);
        assert_eq!(index.deps_of(DepKind::Fetch, "fist-1.0").unwrap(), ["fetch-1.0"]);
    }

    #[test]
    fn deps_of_last_flavor() {
        let index = sample();
        assert_eq!(
            index.run_deps_of("devel/py-evdev").unwrap(),
            ["python36-3.6.9", "libevdev-1.6.0"]
        );
        assert_eq!(
            index.run_deps_of("py27-evdev-0.8.1").unwrap(),
            ["python27-2.7.16_1", "libevdev-1.6.0"]
        );
    }

    #[test]
    fn deps_of_unknown_key() {
        let index = sample();
        assert!(index.build_deps_of("lang/ruby26").unwrap_err().is_not_found());
        assert!(index.build_deps_origins_of("lang/ruby26").unwrap_err().is_not_found());
        assert!(index
            .resolved_deps_origins_of(DepKind::Build, "lang/ruby26")
            .is_err());
        assert!(index.build_deps_origins_of("").is_err());
    }

    #[test]
    fn deps_origins_keep_placeholders() {
        let index = sample();
        // pkgconf is not in the sample index.
        assert_eq!(
            index.build_deps_origins_of("lang/ruby25").unwrap(),
            vec!["devel/libffi", "textproc/libyaml", ""]
        );
        assert_eq!(
            index.run_deps_origins_of("lang/ruby25").unwrap(),
            vec!["devel/libffi", "textproc/libyaml"]
        );
        assert_eq!(index.run_deps_origins_of("devel/libffi").unwrap(), vec![""]);
    }

    #[test]
    fn resolved_deps_origins_drop_placeholders() {
        let index = sample();
        assert_eq!(
            index
                .resolved_deps_origins_of(DepKind::Build, "lang/ruby25")
                .unwrap(),
            vec!["devel/libffi", "textproc/libyaml"]
        );
        assert!(index
            .resolved_deps_origins_of(DepKind::Run, "devel/libffi")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn deps_across_flavors() {
        let text = "\
python27-2.7.16_1|/usr/ports/lang/python27|/usr/local|c|d|python@FreeBSD.org|lang python|||w|||
python36-3.6.9|/usr/ports/lang/python36|/usr/local|c|d|python@FreeBSD.org|lang python|||w|||
libevdev-1.6.0|/usr/ports/devel/libevdev|/usr/local|c|d|x11@FreeBSD.org|devel|||w|||
py27-evdev-0.8.1|/usr/ports/devel/py-evdev|/usr/local|c|d|swills@FreeBSD.org|devel python|python27-2.7.16_1 libevdev-1.6.0|python27-2.7.16_1|w|||
py36-evdev-0.8.1|/usr/ports/devel/py-evdev|/usr/local|c|d|swills@FreeBSD.org|devel python|python36-3.6.9 libevdev-1.6.0|python36-3.6.9|w|||
";
        let index = PortIndex::parse(text).unwrap();

        // Lists come from the last flavor.
        assert_eq!(
            index.build_deps_of("devel/py-evdev").unwrap(),
            ["python36-3.6.9", "libevdev-1.6.0"]
        );
        assert_eq!(index.run_deps_of("devel/py-evdev").unwrap(), ["python36-3.6.9"]);

        // Origins cover every flavor, in source order.
        assert_eq!(
            index.build_deps_origins_of("devel/py-evdev").unwrap(),
            vec!["lang/python27", "devel/libevdev", "lang/python36", "devel/libevdev"]
        );
        assert_eq!(
            index.run_deps_origins_of("devel/py-evdev").unwrap(),
            vec!["lang/python27", "lang/python36"]
        );

        // A package name selects that flavor only.
        assert_eq!(
            index.build_deps_origins_of("py27-evdev-0.8.1").unwrap(),
            vec!["lang/python27", "devel/libevdev"]
        );

        // An empty field resolves to a single placeholder.
        assert_eq!(index.build_deps_origins_of("lang/python36").unwrap(), vec![""]);
    }

    #[test]
    fn reverse_deps_basic() {
        let text = "\
A|x/a|/usr/local|c|d|m|x||B|w|||
B|x/b|/usr/local|c|d|m|x|||w|||
";
        let index = PortIndex::parse(text).unwrap();
        assert_eq!(index.reverse_deps("B"), vec!["A"]);
        assert_eq!(index.reverse_deps_origins("B"), vec!["x/a"]);
        assert!(index.reverse_deps("A").is_empty());
    }

    #[test]
    fn reverse_deps_dedup() {
        let index = sample();
        // Each dependent lists python36 as both a build and a run dependency.
        assert_eq!(
            index.reverse_deps("python36-3.6.9"),
            vec!["py36-evdev-0.8.1", "py36-billiard-3.6.0.0"]
        );
        assert_eq!(
            index.reverse_deps("libevdev-1.6.0"),
            vec!["py27-evdev-0.8.1", "py36-evdev-0.8.1"]
        );
        assert_eq!(index.reverse_deps_origins("libevdev-1.6.0"), vec!["devel/py-evdev"]);
        assert_eq!(index.reverse_deps("fetch-1.0"), vec!["fist-1.0"]);
    }

    #[test]
    fn reverse_deps_is_literal() {
        let index = sample();
        assert!(index.reverse_deps("python36").is_empty());
        assert!(index.reverse_deps("").is_empty());
        assert!(index.reverse_deps_origins("").is_empty());
    }

    #[test]
    fn index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PortIndex>();

        let index = sample();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| index.reverse_deps("python36-3.6.9").len()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), 2);
            }
        });
    }

    #[test]
    fn from_str_matches_parse() {
        let index: PortIndex = SAMPLE.parse().unwrap();
        assert_eq!(index, sample());
    }
}
