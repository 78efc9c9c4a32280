//! Indent-aware string builder for HTML documents.
//!
//! Output uses 2-space indentation.

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Indent-aware string builder that produces formatted HTML markup.
pub struct HtmlWriter {
    buf: String,
    indent_level: usize,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
            indent_level: 0,
        }
    }

    /// Write a complete line of raw markup (appends newline).
    pub fn line(&mut self, markup: &str) {
        for _ in 0..self.indent_level {
            self.buf.push_str("  ");
        }
        self.buf.push_str(markup);
        self.buf.push('\n');
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write `<tag attrs>` and increase indent.
    pub fn open(&mut self, tag_with_attrs: &str) {
        self.line(&format!("<{}>", tag_with_attrs));
        self.indent();
    }

    /// Decrease indent and write `</tag>`.
    pub fn close(&mut self, tag: &str) {
        self.dedent();
        self.line(&format!("</{}>", tag));
    }

    /// Write `<tag>text</tag>` on one line; `text` is escaped.
    pub fn element(&mut self, tag: &str, text: &str) {
        self.line(&format!("<{tag}>{}</{tag}>", escape_html(text)));
    }

    /// Write one `<tr>` of `cell_tag` cells; cell text is escaped.
    pub fn row(&mut self, cell_tag: &str, cells: &[&str]) {
        let cells: String = cells
            .iter()
            .map(|c| format!("<{cell_tag}>{}</{cell_tag}>", escape_html(c)))
            .collect();
        self.line(&format!("<tr>{}</tr>", cells));
    }

    /// Consume the writer and return the generated markup.
    pub fn finish(self) -> String {
        self.buf
    }
}
