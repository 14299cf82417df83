use prose_types::Paragraph;

/// A paragraph-structured document.
///
/// Paragraphs are separated by blank lines; each keeps its byte offset into
/// the original text so rule spans come out document-relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Split text into paragraphs on blank lines.
    ///
    /// A paragraph is a maximal run of non-blank lines; internal newlines
    /// stay part of the paragraph text. Trailing line breaks are not.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut paragraphs = Vec::new();
        let mut para_start: Option<usize> = None;
        let mut para_end = 0;
        let mut pos = 0;

        for line in text.split_inclusive('\n') {
            let content = line.trim_end_matches(['\r', '\n']);
            if content.trim().is_empty() {
                if let Some(start) = para_start.take() {
                    paragraphs.push(Paragraph::new(&text[start..para_end], start));
                }
            } else {
                if para_start.is_none() {
                    para_start = Some(pos);
                }
                para_end = pos + content.len();
            }
            pos += line.len();
        }
        if let Some(start) = para_start {
            paragraphs.push(Paragraph::new(&text[start..para_end], start));
        }

        Self { paragraphs }
    }

    /// Build a document directly from paragraphs
    #[must_use]
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// The paragraphs in document order
    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of paragraphs
    #[must_use]
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Returns true if the document has no paragraphs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// The window of `radius` paragraphs around `center`, clamped to the
    /// document bounds.
    #[must_use]
    pub fn window(&self, center: usize, radius: usize) -> &[Paragraph] {
        if self.paragraphs.is_empty() {
            return &[];
        }
        let center = center.min(self.paragraphs.len() - 1);
        let lo = center.saturating_sub(radius);
        let hi = (center + radius + 1).min(self.paragraphs.len());
        &self.paragraphs[lo..hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_blank_lines() {
        let doc = Document::from_text("First one.\n\nSecond one.\n");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.paragraphs()[0].text, "First one.");
        assert_eq!(doc.paragraphs()[0].offset, 0);
        assert_eq!(doc.paragraphs()[1].text, "Second one.");
        assert_eq!(doc.paragraphs()[1].offset, 12);
    }

    #[test]
    fn test_multi_line_paragraph() {
        let doc = Document::from_text("line one\nline two\n\nnext");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.paragraphs()[0].text, "line one\nline two");
        assert_eq!(doc.paragraphs()[1].offset, 19);
    }

    #[test]
    fn test_whitespace_only_lines_separate() {
        let doc = Document::from_text("a\n   \nb");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_empty_text() {
        let doc = Document::from_text("");
        assert!(doc.is_empty());
        assert!(doc.window(0, 3).is_empty());
    }

    #[test]
    fn test_window_clamps_to_bounds() {
        let doc = Document::from_text("a\n\nb\n\nc\n\nd");
        assert_eq!(doc.window(0, 1).len(), 2);
        assert_eq!(doc.window(2, 1).len(), 3);
        assert_eq!(doc.window(3, 10).len(), 4);
        // out-of-range center clamps to the last paragraph
        assert_eq!(doc.window(99, 0).len(), 1);
        assert_eq!(doc.window(99, 0)[0].text, "d");
    }
}
