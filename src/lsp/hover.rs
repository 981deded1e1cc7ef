//! Hover documentation for start and end tag names
//!
//! The element tree only records where tags begin, so the exact span of a tag
//! name is recovered by re-scanning the raw text from that anchor up to the
//! cursor.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tower_lsp::lsp_types::{Hover, HoverContents, LanguageString, MarkedString, Position, Range};

use crate::document::TextDocument;
use crate::parser::scanner::{Scanner, Token, TokenType};
use crate::parser::types::HtmlDocument;
use crate::tags::provider::TagProvider;
use crate::tags::resolver::{applicable_providers, resolve_tag_doc};

/// Characters with a meaning in markdown
static MARKDOWN_SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\`*_{}\[\]()#+\-.!]").unwrap());

/// Resolve hover documentation for the tag name under `position`.
///
/// Returns `None` unless the cursor is on (or directly after) the name of a
/// start or end tag that one of the applicable providers documents.
pub fn do_hover(
    document: &TextDocument,
    position: Position,
    html_document: &HtmlDocument,
    providers: &[Arc<dyn TagProvider>],
) -> Option<Hover> {
    let offset = document.offset_at(position);
    let node = html_document.find_node_at(offset)?;
    node.tag.as_ref()?;

    let providers = applicable_providers(providers, document.language_id());

    if let Some(end_tag_start) = node.end_tag_start.filter(|&start| offset >= start) {
        let token = find_tag_name_token(document.text(), TokenType::EndTag, end_tag_start, offset)?;
        return tag_hover(document, &token, false, &providers);
    }

    let token = find_tag_name_token(document.text(), TokenType::StartTag, node.start, offset)?;
    tag_hover(document, &token, true, &providers)
}

fn tag_hover(
    document: &TextDocument,
    token: &Token,
    is_open_tag: bool,
    providers: &[&dyn TagProvider],
) -> Option<Hover> {
    // The label keeps the casing written in the document
    let tag_name = token.text(document.text());
    let tag = resolve_tag_doc(tag_name, providers)?;
    Some(assemble(
        tag_name,
        token_range(document, token),
        is_open_tag,
        tag.documentation,
    ))
}

/// Find the range of the `expected_kind` token containing `cursor_offset`,
/// scanning from `scan_start`.
pub fn find_tag_name_range(
    document: &TextDocument,
    expected_kind: TokenType,
    scan_start: usize,
    cursor_offset: usize,
) -> Option<Range> {
    find_tag_name_token(document.text(), expected_kind, scan_start, cursor_offset)
        .map(|token| token_range(document, &token))
}

/// Scan until the first token ending after the cursor, or ending exactly at
/// the cursor when it is of the expected kind. A punctuation token that ends
/// at the cursor (`<`, `</`) is skipped so the name right after it is found.
fn find_tag_name_token(
    text: &str,
    expected_kind: TokenType,
    scan_start: usize,
    cursor_offset: usize,
) -> Option<Token> {
    let token = Scanner::new(text, scan_start).find(|token| {
        token.kind == TokenType::Eos
            || token.end > cursor_offset
            || (token.end == cursor_offset && token.kind == expected_kind)
    })?;

    (token.kind == expected_kind && cursor_offset <= token.end).then_some(token)
}

fn token_range(document: &TextDocument, token: &Token) -> Range {
    Range {
        start: document.position_at(token.offset),
        end: document.position_at(token.end),
    }
}

/// Build the hover: an html code label followed by the plain-text documentation
pub fn assemble(tag_name: &str, range: Range, is_open_tag: bool, documentation: &str) -> Hover {
    let label = if is_open_tag {
        format!("<{tag_name}>")
    } else {
        format!("</{tag_name}>")
    };

    Hover {
        contents: HoverContents::Array(vec![
            MarkedString::LanguageString(LanguageString {
                language: "html".to_string(),
                value: label,
            }),
            MarkedString::String(escape_plain_text(documentation)),
        ]),
        range: Some(range),
    }
}

/// Escape markdown characters so the text renders verbatim
pub fn escape_plain_text(text: &str) -> String {
    MARKDOWN_SPECIAL_CHARS
        .replace_all(text, r"\$0")
        .into_owned()
}
