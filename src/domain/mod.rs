//! Domain types - module identities, tag names and version rules independent of I/O

pub mod module;
pub mod tag;
pub mod version;

pub use module::{ModuleId, ModuleInfo, ModuleSet};
pub use tag::{combine_tags_with_version, paths_for, tag_name_for, tag_names_for, ModuleTagName};
pub use version::is_stable;
