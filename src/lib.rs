//! FreeBSD ports `INDEX` parser and in-memory query layer.
//!
//! The ports tree publishes an `INDEX` file (e.g. `/usr/ports/INDEX-13`)
//! with one line per package. Each line holds 13 `|`-separated fields;
//! categories and dependency fields are lists separated by a single space.
//! This crate parses that file into [`PortRecord`]s and answers queries over
//! the resulting [`PortIndex`]: lookups by package name or origin,
//! dependency listings, reverse dependencies and maintainer search.
//!
//! # Examples
//!
//! ```
//! use freebsd_ports_index::PortIndex;
//!
//! let input = "\
//! ruby-2.5.5_2,1|/usr/ports/lang/ruby25|/usr/local|Ruby|d|ruby@FreeBSD.org|lang ruby|libffi-3.2.1_3|libffi-3.2.1_3|https://www.ruby-lang.org/|||
//! libffi-3.2.1_3|/usr/ports/devel/libffi|/usr/local|FFI|d|desktop@FreeBSD.org|devel|||https://sourceware.org/libffi/|||
//! ";
//! let index = PortIndex::parse(input).unwrap();
//! assert_eq!(index.find_origin_by_prefix("ruby-2").unwrap(), "lang/ruby25");
//! assert_eq!(index.build_deps_origins_of("lang/ruby25").unwrap(), vec!["devel/libffi"]);
//! assert_eq!(index.reverse_deps("libffi-3.2.1_3"), vec!["ruby-2.5.5_2,1"]);
//! ```

mod depends;
mod directive;
mod error;
mod index;
mod location;
mod record;

// Re-export public types
pub use depends::DepKind;
pub use directive::DEFAULT_PYTHON_PREFIX;
pub use error::{Error, Result};
pub use index::PortIndex;
pub use location::{default_index_path, DEFAULT_INDEX_NAME, DEFAULT_PORTS_DIR, PORTSDIR_VAR};
pub use record::PortRecord;
