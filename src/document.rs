//! Text document model with offset/position conversion
//!
//! Offsets are byte offsets into the document text. Positions follow LSP,
//! so `character` counts UTF-16 code units within a line.

use tower_lsp::lsp_types::{Position, Url};

/// An opened text document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    uri: Url,
    language_id: String,
    version: i32,
    text: String,
    /// Byte offset where each line starts (always contains 0)
    line_offsets: Vec<usize>,
}

impl TextDocument {
    pub fn new(
        uri: Url,
        language_id: impl Into<String>,
        version: i32,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let line_offsets = compute_line_offsets(&text);
        Self {
            uri,
            language_id: language_id.into(),
            version,
            text,
            line_offsets,
        }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Convert a position to a byte offset.
    ///
    /// Positions past the end of a line are clamped to the start of the next
    /// line, and positions past the last line are clamped to the text length.
    pub fn offset_at(&self, position: Position) -> usize {
        let line = position.line as usize;
        let Some(&line_start) = self.line_offsets.get(line) else {
            return self.text.len();
        };
        let line_end = self
            .line_offsets
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());

        let mut utf16_count = 0u32;
        for (index, ch) in self.text[line_start..line_end].char_indices() {
            if utf16_count >= position.character {
                return line_start + index;
            }
            utf16_count += ch.len_utf16() as u32;
        }
        line_end
    }

    /// Convert a byte offset to a position.
    ///
    /// Offsets beyond the text are clamped to the end of the document. An
    /// offset inside a multi-byte character is moved back to its start.
    pub fn position_at(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_offsets.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_offsets[line];
        let character = self.text[line_start..offset].encode_utf16().count();

        Position {
            line: line as u32,
            character: character as u32,
        }
    }
}

fn compute_line_offsets(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut offsets = vec![0];
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'\r' => {
                if bytes.get(index + 1) == Some(&b'\n') {
                    index += 1;
                }
                offsets.push(index + 1);
            }
            b'\n' => offsets.push(index + 1),
            _ => {}
        }
        index += 1;
    }
    offsets
}
