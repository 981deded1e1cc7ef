//! Raw-text HTML scanner
//!
//! The scanner can be started at any byte offset of a document and yields one
//! token per [`Scanner::scan`] call. It keeps no state beyond the text, the
//! current position and the tokenizer state, so a fresh scanner is cheap to
//! create for every lookup.

/// Kind of a scanned token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    StartCommentTag,
    Comment,
    EndCommentTag,
    StartTagOpen,
    StartTagClose,
    StartTagSelfClose,
    StartTag,
    EndTagOpen,
    EndTagClose,
    EndTag,
    DelimiterAssign,
    AttributeName,
    AttributeValue,
    StartDoctypeTag,
    Doctype,
    EndDoctypeTag,
    Content,
    Whitespace,
    Unknown,
    Script,
    Styles,
    /// End of input
    Eos,
}

/// Tokenizer state between two tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    WithinContent,
    AfterOpeningStartTag,
    AfterOpeningEndTag,
    WithinDoctype,
    WithinTag,
    WithinEndTag,
    WithinComment,
    WithinScriptContent,
    WithinStyleContent,
    AfterAttributeName,
    BeforeAttributeValue,
}

/// A scanned token covering `[offset, end)` in the document text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub offset: usize,
    pub end: usize,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.offset..self.end]
    }
}

/// Script `type` values whose content is markup rather than script
const HTML_SCRIPT_TYPES: [&str; 2] = ["text/x-handlebars-template", "text/html"];

pub struct Scanner<'a> {
    text: &'a str,
    position: usize,
    state: ScannerState,
    last_tag: Option<String>,
    last_attribute_name: Option<String>,
    last_type_value: Option<String>,
    has_space_after_tag: bool,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `text` starting at `initial_offset` in content state
    pub fn new(text: &'a str, initial_offset: usize) -> Self {
        Self::with_state(text, initial_offset, ScannerState::WithinContent)
    }

    pub fn with_state(text: &'a str, initial_offset: usize, state: ScannerState) -> Self {
        let mut position = initial_offset.min(text.len());
        while !text.is_char_boundary(position) {
            position -= 1;
        }
        Self {
            text,
            position,
            state,
            last_tag: None,
            last_attribute_name: None,
            last_type_value: None,
            has_space_after_tag: false,
            finished: false,
        }
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// Scan the next token.
    ///
    /// Each call either consumes at least one character or returns
    /// [`TokenType::Eos`]; once the end is reached every further call
    /// returns `Eos` again.
    pub fn next_token(&mut self) -> Token {
        let offset = self.position;
        let kind = self.scan_kind();
        if kind != TokenType::Eos && offset == self.position {
            self.advance_char();
            return self.token(offset, TokenType::Unknown);
        }
        self.token(offset, kind)
    }

    fn token(&self, offset: usize, kind: TokenType) -> Token {
        Token {
            kind,
            offset,
            end: self.position,
        }
    }

    fn scan_kind(&mut self) -> TokenType {
        if self.eos() {
            return TokenType::Eos;
        }

        loop {
            match self.state {
                ScannerState::WithinComment => {
                    if self.advance_if_str("-->") {
                        self.state = ScannerState::WithinContent;
                        return TokenType::EndCommentTag;
                    }
                    self.advance_until_str("-->");
                    return TokenType::Comment;
                }
                ScannerState::WithinDoctype => {
                    if self.advance_if_char('>') {
                        self.state = ScannerState::WithinContent;
                        return TokenType::EndDoctypeTag;
                    }
                    self.advance_until_char('>');
                    return TokenType::Doctype;
                }
                ScannerState::WithinContent => {
                    if self.advance_if_char('<') {
                        if self.peek_char() == Some('!') {
                            if self.advance_if_str("!--") {
                                self.state = ScannerState::WithinComment;
                                return TokenType::StartCommentTag;
                            }
                            if self.advance_if_str_ignore_case("!doctype") {
                                self.state = ScannerState::WithinDoctype;
                                return TokenType::StartDoctypeTag;
                            }
                        }
                        if self.advance_if_char('/') {
                            self.state = ScannerState::AfterOpeningEndTag;
                            return TokenType::EndTagOpen;
                        }
                        self.state = ScannerState::AfterOpeningStartTag;
                        return TokenType::StartTagOpen;
                    }
                    self.advance_until_char('<');
                    return TokenType::Content;
                }
                ScannerState::AfterOpeningEndTag => {
                    if self.advance_if_tag_name().is_some() {
                        self.state = ScannerState::WithinEndTag;
                        return TokenType::EndTag;
                    }
                    if self.skip_whitespace() {
                        return TokenType::Whitespace;
                    }
                    self.state = ScannerState::WithinEndTag;
                    let start = self.position;
                    self.advance_until_char('>');
                    if self.position > start {
                        return TokenType::Unknown;
                    }
                }
                ScannerState::WithinEndTag => {
                    if self.skip_whitespace() {
                        return TokenType::Whitespace;
                    }
                    if self.advance_if_char('>') {
                        self.state = ScannerState::WithinContent;
                        return TokenType::EndTagClose;
                    }
                    self.advance_char();
                    return TokenType::Unknown;
                }
                ScannerState::AfterOpeningStartTag => {
                    if let Some(name) = self.advance_if_tag_name() {
                        self.last_tag = Some(name.to_lowercase());
                        self.last_attribute_name = None;
                        self.last_type_value = None;
                        self.has_space_after_tag = false;
                        self.state = ScannerState::WithinTag;
                        return TokenType::StartTag;
                    }
                    if self.skip_whitespace() {
                        return TokenType::Whitespace;
                    }
                    self.state = ScannerState::WithinTag;
                    let start = self.position;
                    self.advance_until_char('>');
                    if self.position > start {
                        return TokenType::Unknown;
                    }
                }
                ScannerState::WithinTag => {
                    if self.skip_whitespace() {
                        self.has_space_after_tag = true;
                        return TokenType::Whitespace;
                    }
                    if self.has_space_after_tag {
                        if let Some(name) = self.advance_if_attribute_name() {
                            self.last_attribute_name = Some(name.to_lowercase());
                            self.state = ScannerState::AfterAttributeName;
                            self.has_space_after_tag = false;
                            return TokenType::AttributeName;
                        }
                    }
                    if self.advance_if_str("/>") {
                        self.state = ScannerState::WithinContent;
                        return TokenType::StartTagSelfClose;
                    }
                    if self.advance_if_char('>') {
                        self.state = self.content_state_after_start_tag();
                        return TokenType::StartTagClose;
                    }
                    self.advance_char();
                    return TokenType::Unknown;
                }
                ScannerState::AfterAttributeName => {
                    if self.skip_whitespace() {
                        self.has_space_after_tag = true;
                        return TokenType::Whitespace;
                    }
                    if self.advance_if_char('=') {
                        self.state = ScannerState::BeforeAttributeValue;
                        return TokenType::DelimiterAssign;
                    }
                    self.state = ScannerState::WithinTag;
                }
                ScannerState::BeforeAttributeValue => {
                    if self.skip_whitespace() {
                        return TokenType::Whitespace;
                    }
                    if let Some(value) = self.advance_if_unquoted_value() {
                        self.remember_type_value(value);
                        self.state = ScannerState::WithinTag;
                        self.has_space_after_tag = false;
                        return TokenType::AttributeValue;
                    }
                    if let Some(quote) = self.peek_char().filter(|&c| c == '"' || c == '\'') {
                        self.advance_char();
                        let value_start = self.position;
                        self.advance_until_char(quote);
                        let value: &'a str = &self.text[value_start..self.position];
                        self.advance_if_char(quote);
                        self.remember_type_value(value);
                        self.state = ScannerState::WithinTag;
                        self.has_space_after_tag = false;
                        return TokenType::AttributeValue;
                    }
                    self.state = ScannerState::WithinTag;
                    self.has_space_after_tag = false;
                }
                ScannerState::WithinScriptContent => {
                    return self.scan_raw_text("</script", TokenType::Script);
                }
                ScannerState::WithinStyleContent => {
                    return self.scan_raw_text("</style", TokenType::Styles);
                }
            }
        }
    }

    /// Consume raw text up to (not including) the closing tag.
    fn scan_raw_text(&mut self, closing: &str, kind: TokenType) -> TokenType {
        self.state = ScannerState::WithinContent;
        match find_ignore_ascii_case(self.rest(), closing) {
            // Nothing before the closing tag, let content state scan `</`
            Some(0) => self.scan_kind(),
            Some(index) => {
                self.position += index;
                kind
            }
            None => {
                self.position = self.text.len();
                kind
            }
        }
    }

    fn content_state_after_start_tag(&self) -> ScannerState {
        match self.last_tag.as_deref() {
            Some("script") => match self.last_type_value.as_deref() {
                Some(value) if HTML_SCRIPT_TYPES.iter().any(|&t| t == value) => ScannerState::WithinContent,
                _ => ScannerState::WithinScriptContent,
            },
            Some("style") => ScannerState::WithinStyleContent,
            _ => ScannerState::WithinContent,
        }
    }

    fn remember_type_value(&mut self, value: &str) {
        if self.last_attribute_name.as_deref() == Some("type") {
            self.last_type_value = Some(value.to_string());
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn eos(&self) -> bool {
        self.position >= self.text.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance_char(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.position += ch.len_utf8();
        }
    }

    fn advance_if_char(&mut self, ch: char) -> bool {
        if self.peek_char() == Some(ch) {
            self.position += ch.len_utf8();
            return true;
        }
        false
    }

    fn advance_if_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.position += s.len();
            return true;
        }
        false
    }

    fn advance_if_str_ignore_case(&mut self, s: &str) -> bool {
        let matches = self
            .rest()
            .get(..s.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(s));
        if matches {
            self.position += s.len();
        }
        matches
    }

    /// Advance to the next occurrence of `s`, or to the end of input.
    fn advance_until_str(&mut self, s: &str) -> bool {
        match self.rest().find(s) {
            Some(index) => {
                self.position += index;
                true
            }
            None => {
                self.position = self.text.len();
                false
            }
        }
    }

    fn advance_until_char(&mut self, ch: char) -> bool {
        match self.rest().find(ch) {
            Some(index) => {
                self.position += index;
                true
            }
            None => {
                self.position = self.text.len();
                false
            }
        }
    }

    /// Advance over the longest prefix whose characters satisfy `predicate`.
    fn advance_while(&mut self, predicate: impl Fn(usize, char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .enumerate()
            .find(|&(n, (_, ch))| !predicate(n, ch))
            .map_or(rest.len(), |(_, (index, _))| index);
        self.position += len;
        &rest[..len]
    }

    fn skip_whitespace(&mut self) -> bool {
        !self.advance_while(|_, ch| ch.is_whitespace()).is_empty()
    }

    /// Tag names: `[_:\w][_:\w\-.\d]*`
    fn advance_if_tag_name(&mut self) -> Option<&'a str> {
        let name = self.advance_while(|n, ch| {
            ch == '_' || ch == ':' || ch.is_alphanumeric() || (n > 0 && matches!(ch, '-' | '.'))
        });
        (!name.is_empty()).then_some(name)
    }

    /// Attribute names: `[^\s"'`=<>/]+`
    fn advance_if_attribute_name(&mut self) -> Option<&'a str> {
        let name = self.advance_while(|_, ch| {
            !ch.is_whitespace() && !matches!(ch, '"' | '\'' | '`' | '=' | '<' | '>' | '/')
        });
        (!name.is_empty()).then_some(name)
    }

    /// Unquoted attribute values: `[^\s"'`=<>]+`, leaving a trailing `/` of
    /// `/>` for the tag to close on.
    fn advance_if_unquoted_value(&mut self) -> Option<&'a str> {
        let start = self.position;
        let value = self.advance_while(|_, ch| {
            !ch.is_whitespace() && !matches!(ch, '"' | '\'' | '`' | '=' | '<' | '>')
        });
        if value.ends_with('/') && self.peek_char() == Some('>') {
            self.position -= 1;
        }
        let value = &self.text[start..self.position];
        (!value.is_empty()).then_some(value)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `Eos`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenType::Eos;
        Some(token)
    }
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.match_indices('<').map(|(index, _)| index).find(|&index| {
        haystack
            .get(index..index + needle.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(needle))
    })
}
