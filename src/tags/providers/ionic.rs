//! Ionic framework elements

use crate::tags::provider::{TagInfo, TagProvider};
use crate::tags::providers::table_tags;

/// Provider for Ionic components, applicable to plain HTML only
pub struct IonicTagProvider;

impl TagProvider for IonicTagProvider {
    fn id(&self) -> &str {
        "ionic"
    }

    fn is_applicable(&self, language_id: &str) -> bool {
        language_id == "html"
    }

    fn tags(&self) -> Box<dyn Iterator<Item = TagInfo<'_>> + '_> {
        table_tags(IONIC_TAGS)
    }
}

const IONIC_TAGS: &[(&str, &str)] = &[
    ("ion-checkbox", "A checkbox that toggles a boolean model value."),
    ("ion-content", "A scrollable content area that fills the space between the header and footer bars."),
    ("ion-delete-button", "A button shown on the left side of an item while the list is in delete mode."),
    ("ion-footer-bar", "A fixed bar at the bottom of the screen."),
    ("ion-header-bar", "A fixed bar at the top of the screen holding a title and buttons."),
    ("ion-infinite-scroll", "Calls a function when the user scrolls near the bottom of the content, to load more data."),
    ("ion-item", "An item of a list, which may contain text, buttons, icons and other elements."),
    ("ion-list", "A list of items supporting swipe-to-edit, drag-to-reorder and item removal."),
    ("ion-modal-view", "The container for the content of a modal window."),
    ("ion-nav-back-button", "A back button placed in the navigation bar that returns to the previous view."),
    ("ion-nav-bar", "A navigation bar that updates as the application state changes."),
    ("ion-nav-buttons", "Sets the buttons shown in the navigation bar for the containing view."),
    ("ion-nav-title", "Sets a custom title for the containing view in the navigation bar."),
    ("ion-nav-view", "The container in which views are rendered as the user navigates."),
    ("ion-option-button", "A button revealed when the user swipes an item to the left."),
    ("ion-pane", "A simple container that fits its content to the full screen."),
    ("ion-popover-view", "The container for the content of a popover."),
    ("ion-radio", "A radio button; all radios sharing a model form a group."),
    ("ion-refresher", "Adds pull-to-refresh to a scroll view."),
    ("ion-reorder-button", "A handle shown on the right side of an item while the list is in reorder mode."),
    ("ion-scroll", "A scrollable container with pinch-to-zoom support."),
    ("ion-side-menu", "A container for a side menu, sibling to an ion-side-menu-content element."),
    ("ion-side-menu-content", "The container for the main visible content, sibling to one or more side menus."),
    ("ion-side-menus", "A container element for side menus and the main content."),
    ("ion-slide", "A single slide inside an ion-slide-box."),
    ("ion-slide-box", "A container for pages of content the user can swipe between."),
    ("ion-spinner", "An animated SVG loading indicator."),
    ("ion-tab", "A single tab inside ion-tabs; its content only exists while the tab is selected."),
    ("ion-tabs", "A multi-tabbed interface with a tab bar and a set of pages."),
    ("ion-toggle", "A switch that toggles a boolean model value."),
    ("ion-view", "A container for view content and navigation bar information."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ionic_provider_applies_to_html_only() {
        assert!(IonicTagProvider.is_applicable("html"));
        assert!(!IonicTagProvider.is_applicable("razor"));
    }

    #[test]
    fn ionic_tags_are_prefixed() {
        let provider = IonicTagProvider;
        assert_eq!(provider.tags().count(), 31);
        assert!(provider.tags().all(|tag| tag.name.starts_with("ion-")));
    }
}
