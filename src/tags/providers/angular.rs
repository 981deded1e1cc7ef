//! AngularJS directive elements

use crate::tags::provider::{TagInfo, TagProvider};
use crate::tags::providers::table_tags;

/// Provider for AngularJS element directives, applicable to plain HTML only
pub struct AngularTagProvider;

impl TagProvider for AngularTagProvider {
    fn id(&self) -> &str {
        "angular"
    }

    fn is_applicable(&self, language_id: &str) -> bool {
        language_id == "html"
    }

    fn tags(&self) -> Box<dyn Iterator<Item = TagInfo<'_>> + '_> {
        table_tags(ANGULAR_TAGS)
    }
}

const ANGULAR_TAGS: &[(&str, &str)] = &[
    ("ng-form", "Nestable alias of form. Lets forms be nested so that the outer form is valid only when all of its child forms are valid."),
    ("ng-include", "Fetches, compiles and includes an external HTML fragment."),
    ("ng-pluralize", "Displays messages according to en-US localization rules, choosing the message that matches the count attribute."),
    ("ng-view", "Complements the $route service by including the rendered template of the current route into the main layout."),
];
