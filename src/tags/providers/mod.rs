//! Tag provider implementations

pub mod angular;
pub mod custom;
pub mod html5;
pub mod ionic;

pub use angular::AngularTagProvider;
pub use custom::CustomTagProvider;
pub use html5::Html5TagProvider;
pub use ionic::IonicTagProvider;

use crate::tags::provider::TagInfo;

/// Enumerate a static `(name, documentation)` table
pub(crate) fn table_tags<'a>(
    table: &'a [(&'a str, &'a str)],
) -> Box<dyn Iterator<Item = TagInfo<'a>> + 'a> {
    Box::new(table.iter().map(|&(name, documentation)| TagInfo {
        name,
        documentation,
    }))
}
