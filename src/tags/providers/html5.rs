//! HTML5 element documentation

use crate::tags::provider::{TagInfo, TagProvider};
use crate::tags::providers::table_tags;

/// Provider for the standard HTML5 elements, applicable to every language
pub struct Html5TagProvider;

impl TagProvider for Html5TagProvider {
    fn id(&self) -> &str {
        "html5"
    }

    fn is_applicable(&self, _language_id: &str) -> bool {
        true
    }

    fn tags(&self) -> Box<dyn Iterator<Item = TagInfo<'_>> + '_> {
        table_tags(HTML5_TAGS)
    }
}

const HTML5_TAGS: &[(&str, &str)] = &[
    // The root element
    ("html", "The root of an HTML document. Every other element must be a descendant of this element."),
    // Document metadata
    ("head", "Holds machine-readable information about the document, such as its title, scripts and style sheets."),
    ("title", "Defines the document title shown in the browser's title bar or tab. Only text is allowed inside it."),
    ("base", "Specifies the base URL used to resolve all relative URLs in the document. A document can have only one."),
    ("link", "Relates the current document to an external resource. Most commonly used to link style sheets."),
    ("meta", "Represents metadata that cannot be expressed with the other metadata elements, such as the character encoding."),
    ("style", "Contains style information for the document or part of it, usually written in CSS."),
    // Scripting
    ("script", "Embeds or references executable code, typically JavaScript."),
    ("noscript", "Defines content to show when scripting is not supported or is turned off in the browser."),
    ("template", "Holds HTML that is not rendered when the page loads but can be instantiated later from script."),
    ("slot", "A placeholder inside a web component that users can fill with their own markup."),
    // Sections
    ("body", "Represents the content of the document. There can be only one body element."),
    ("article", "Represents a self-contained composition that is meant to be independently distributable or reusable, such as a post or a news story."),
    ("section", "Represents a generic standalone section of a document, typically with a heading."),
    ("nav", "Represents a section of a page whose purpose is to provide navigation links."),
    ("aside", "Represents content only indirectly related to the main content, often shown as a sidebar."),
    ("h1", "The highest level section heading."),
    ("h2", "A second level section heading."),
    ("h3", "A third level section heading."),
    ("h4", "A fourth level section heading."),
    ("h5", "A fifth level section heading."),
    ("h6", "The lowest level section heading."),
    ("hgroup", "Groups a heading with related secondary content such as subheadings or taglines."),
    ("header", "Represents introductory content, typically a group of introductory or navigational aids."),
    ("footer", "Represents a footer for its nearest sectioning content or the root, with information such as the author or copyright."),
    ("address", "Supplies contact information for its nearest article or body ancestor."),
    ("main", "Represents the dominant content of the body of a document. A document should have only one visible main element."),
    ("search", "Represents a part of the document containing a search or filtering form."),
    // Grouping content
    ("p", "Represents a paragraph."),
    ("hr", "Represents a thematic break between paragraph-level elements, such as a change of scene in a story."),
    ("pre", "Represents preformatted text that is displayed exactly as written in the source, usually in a monospaced font."),
    ("blockquote", "Represents a section quoted from another source. The source URL can be given with the cite attribute."),
    ("ol", "Represents an ordered list of items, typically rendered as a numbered list."),
    ("ul", "Represents an unordered list of items, typically rendered as a bulleted list."),
    ("menu", "Represents an unordered list of commands, treated by browsers like ul."),
    ("li", "Represents an item in a list."),
    ("dl", "Represents a description list made of groups of terms and descriptions."),
    ("dt", "Specifies a term in a description list."),
    ("dd", "Provides the description or definition of the preceding term in a description list."),
    ("figure", "Represents self-contained content, optionally with a caption, referenced as a single unit from the main flow."),
    ("figcaption", "Represents a caption or legend describing the rest of the contents of its parent figure."),
    ("div", "A generic container for flow content. It has no effect on the content or layout until styled."),
    // Text-level semantics
    ("a", "Creates a hyperlink to web pages, files, email addresses, locations in the same page, or anything else a URL can address."),
    ("em", "Marks text that has stress emphasis."),
    ("strong", "Indicates that its contents have strong importance, seriousness or urgency."),
    ("small", "Represents side comments and small print, like copyright and legal text."),
    ("s", "Renders text with a strikethrough to represent content that is no longer relevant or accurate."),
    ("cite", "Marks up the title of a cited creative work."),
    ("q", "Indicates that the enclosed text is a short inline quotation."),
    ("dfn", "Indicates the term being defined within the context of a definition phrase or sentence."),
    ("abbr", "Represents an abbreviation or acronym, optionally with its expansion in the title attribute."),
    ("ruby", "Represents small annotations rendered above, below or next to base text, usually for East Asian typography."),
    ("rt", "Specifies the ruby text component of a ruby annotation."),
    ("rp", "Provides fall-back parentheses for browsers that do not support ruby annotations."),
    ("data", "Links a piece of content with a machine-readable translation given in the value attribute."),
    ("time", "Represents a specific period in time, optionally with a machine-readable datetime attribute."),
    ("code", "Displays its contents styled as a fragment of computer code."),
    ("var", "Represents the name of a variable in a mathematical expression or a programming context."),
    ("samp", "Encloses inline text that represents sample or quoted output from a computer program."),
    ("kbd", "Represents a span of inline text denoting textual user input from a keyboard, voice input or other device."),
    ("sub", "Specifies inline text to be displayed as subscript."),
    ("sup", "Specifies inline text to be displayed as superscript."),
    ("i", "Represents text in an alternate voice or mood, such as idiomatic phrases or technical terms."),
    ("b", "Draws attention to text without conveying extra importance, such as keywords in a summary."),
    ("u", "Represents text with an unarticulated, non-textual annotation, rendered with an underline."),
    ("mark", "Represents text highlighted for reference or notation purposes because of its relevance in the enclosing context."),
    ("bdi", "Isolates a span of text that might be formatted in a different direction from the text around it."),
    ("bdo", "Overrides the current directionality of text so that the text within is rendered in the given direction."),
    ("span", "A generic inline container for phrasing content. It has no meaning on its own until styled."),
    ("br", "Produces a line break in text."),
    ("wbr", "Represents a position within text where the browser may optionally break a line."),
    // Edits
    ("ins", "Represents a range of text that has been added to a document."),
    ("del", "Represents a range of text that has been deleted from a document."),
    // Embedded content
    ("picture", "Contains zero or more source elements and one img element to offer alternative versions of an image for different displays."),
    ("img", "Embeds an image into the document."),
    ("iframe", "Represents a nested browsing context, embedding another HTML page into the current one."),
    ("embed", "Embeds external content at the specified point, provided by an external application or plug-in."),
    ("object", "Represents an external resource, treated as an image, a nested browsing context or a plug-in resource."),
    ("video", "Embeds a media player which supports video playback into the document."),
    ("audio", "Embeds sound content in a document, with one or more audio sources."),
    ("source", "Specifies multiple media resources for picture, audio or video elements."),
    ("track", "Provides timed text tracks, such as subtitles, for audio and video elements."),
    ("map", "Used with area elements to define an image map, a clickable link area."),
    ("area", "Defines an area inside an image map that has predefined clickable regions."),
    ("canvas", "A container used to draw graphics from script, via the canvas scripting API or WebGL."),
    ("svg", "A container defining a new coordinate system and viewport for inline SVG graphics."),
    ("math", "The top-level element of MathML content embedded in the document."),
    // Tabular data
    ("table", "Represents tabular data, information presented in a two-dimensional table of rows and columns."),
    ("caption", "Specifies the caption or title of a table."),
    ("colgroup", "Defines a group of columns within a table."),
    ("col", "Defines a column within a table and is used for defining common semantics on all its cells."),
    ("tbody", "Encapsulates a set of table rows, indicating that they comprise the body of the table."),
    ("thead", "Defines a set of rows defining the head of the columns of the table."),
    ("tfoot", "Defines a set of rows summarizing the columns of the table."),
    ("tr", "Defines a row of cells in a table."),
    ("td", "Defines a cell of a table that contains data."),
    ("th", "Defines a cell as the header of a group of table cells."),
    // Forms
    ("form", "Represents a document section containing interactive controls for submitting information."),
    ("label", "Represents a caption for an item in a user interface."),
    ("input", "Creates interactive controls for web-based forms to accept data from the user. Behavior depends on the type attribute."),
    ("button", "Represents a clickable button, used to submit forms or anywhere in a document for accessible, standard button functionality."),
    ("select", "Represents a control that provides a menu of options."),
    ("datalist", "Contains a set of option elements that represent the permissible or recommended options available to choose from."),
    ("optgroup", "Creates a grouping of options within a select element."),
    ("option", "Defines an item contained in a select, an optgroup or a datalist element."),
    ("textarea", "Represents a multi-line plain-text editing control."),
    ("output", "A container into which a site or app can inject the results of a calculation or the outcome of a user action."),
    ("progress", "Displays an indicator showing the completion progress of a task, typically a progress bar."),
    ("meter", "Represents either a scalar value within a known range or a fractional value."),
    ("fieldset", "Groups several controls as well as labels within a web form."),
    ("legend", "Represents a caption for the content of its parent fieldset."),
    // Interactive elements
    ("details", "Creates a disclosure widget in which information is visible only when the widget is toggled into an open state."),
    ("summary", "Specifies a summary, caption or legend for a details element's disclosure box."),
    ("dialog", "Represents a dialog box or other interactive component, such as a dismissible alert or a subwindow."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("html")]
    #[case("php")]
    #[case("markdown")]
    fn html5_provider_applies_to_every_language(#[case] language_id: &str) {
        assert!(Html5TagProvider.is_applicable(language_id));
    }

    #[test]
    fn html5_tags_are_lowercase_and_unique() {
        let provider = Html5TagProvider;
        let mut seen = std::collections::HashSet::new();
        for tag in provider.tags() {
            assert_eq!(tag.name, tag.name.to_lowercase());
            assert!(seen.insert(tag.name), "duplicate tag {}", tag.name);
            assert!(!tag.documentation.is_empty());
        }
    }

    #[test]
    fn html5_tags_include_common_elements() {
        let provider = Html5TagProvider;
        let names: Vec<_> = provider.tags().map(|tag| tag.name).collect();
        for name in ["div", "span", "a", "table", "input", "script", "style"] {
            assert!(names.contains(&name), "missing {name}");
        }
    }
}
