//! Minimal SVG document builder shared by the bar and pie charts.

use std::fmt::Write;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// An SVG document under construction
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    /// Start a document with a white background
    pub fn new(width: u32, height: u32) -> Self {
        let mut doc = Self {
            width,
            height,
            body: String::new(),
        };
        doc.rect(0.0, 0.0, width as f64, height as f64, "white", None);
        doc
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Filled rectangle with an optional hover tooltip
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, tooltip: Option<&str>) {
        let _ = write!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}""#,
            x, y, w, h, fill
        );
        self.close_with_tooltip("rect", tooltip);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        let _ = write!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
            x1, y1, x2, y2, stroke
        );
    }

    /// Arbitrary path with a white outline
    pub fn path(&mut self, d: &str, fill: &str, tooltip: Option<&str>) {
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="{}" stroke="white" stroke-width="1""#,
            d, fill
        );
        self.close_with_tooltip("path", tooltip);
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, tooltip: Option<&str>) {
        let _ = write!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}""#,
            cx, cy, r, fill
        );
        self.close_with_tooltip("circle", tooltip);
    }

    pub fn text(&mut self, x: f64, y: f64, size: u32, anchor: Anchor, content: &str) {
        self.text_styled(x, y, size, anchor, "", content);
    }

    pub fn bold_text(&mut self, x: f64, y: f64, size: u32, anchor: Anchor, content: &str) {
        self.text_styled(x, y, size, anchor, r#" font-weight="bold""#, content);
    }

    /// Text rotated -90° around its anchor point (y-axis labels)
    pub fn vertical_text(&mut self, x: f64, y: f64, size: u32, content: &str) {
        let style = format!(r#" transform="rotate(-90 {:.2} {:.2})""#, x, y);
        self.text_styled(x, y, size, Anchor::Middle, &style, content);
    }

    fn text_styled(&mut self, x: f64, y: f64, size: u32, anchor: Anchor, extra: &str, content: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="{}"{}>{}</text>"#,
            x,
            y,
            size,
            anchor.as_str(),
            extra,
            escape_text(content)
        );
    }

    fn close_with_tooltip(&mut self, tag: &str, tooltip: Option<&str>) {
        match tooltip {
            Some(tip) => {
                let _ = write!(self.body, "><title>{}</title></{}>", escape_text(tip), tag);
            }
            None => self.body.push_str("/>"),
        }
    }

    /// Serialize the document
    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Escape text for use in SVG character data and attributes
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text(">300 miles"), "&gt;300 miles");
        assert_eq!(escape_text("a & \"b\""), "a &amp; &quot;b&quot;");
    }

    #[test]
    fn test_document_structure() {
        let mut doc = SvgDocument::new(100, 50);
        doc.rect(1.0, 2.0, 3.0, 4.0, "red", Some("tip <1>"));
        doc.text(10.0, 20.0, 12, Anchor::Middle, "hello");
        let svg = doc.finish();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="100" height="50""#));
        assert!(svg.contains("<title>tip &lt;1&gt;</title></rect>"));
        assert!(svg.contains(r#"text-anchor="middle">hello</text>"#));
    }
}
