//! Markup writing primitive and its HTML implementation.

use std::io::{self, Write};

/// Open element / write attribute / write text / close element.
///
/// Attributes belong to the most recently started element and must be
/// written before any content of that element.
pub trait MarkupWriter {
    fn start_element(&mut self, name: &str) -> io::Result<()>;
    fn write_attribute(&mut self, name: &str, value: &str) -> io::Result<()>;
    /// Writes text content, escaping markup-significant characters.
    fn write_text(&mut self, text: &str) -> io::Result<()>;
    /// Writes content verbatim.
    fn write_raw(&mut self, markup: &str) -> io::Result<()>;
    fn end_element(&mut self, name: &str) -> io::Result<()>;
}

/// Streams HTML into any `io::Write` sink.
#[derive(Debug)]
pub struct HtmlWriter<W: Write> {
    out: W,
    tag_open: bool,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tag_open: false,
        }
    }

    /// Finish any pending start tag and hand back the sink.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.close_start_tag()?;
        Ok(self.out)
    }

    fn close_start_tag(&mut self) -> io::Result<()> {
        if self.tag_open {
            self.tag_open = false;
            self.out.write_all(b">")?;
        }
        Ok(())
    }
}

impl<W: Write> MarkupWriter for HtmlWriter<W> {
    fn start_element(&mut self, name: &str) -> io::Result<()> {
        self.close_start_tag()?;
        write!(self.out, "<{name}")?;
        self.tag_open = true;
        Ok(())
    }

    fn write_attribute(&mut self, name: &str, value: &str) -> io::Result<()> {
        if !self.tag_open {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("attribute {name} written outside a start tag"),
            ));
        }
        write!(self.out, " {name}=\"{}\"", escape_html(value))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.close_start_tag()?;
        self.out.write_all(escape_html(text).as_bytes())
    }

    fn write_raw(&mut self, markup: &str) -> io::Result<()> {
        self.close_start_tag()?;
        self.out.write_all(markup.as_bytes())
    }

    fn end_element(&mut self, name: &str) -> io::Result<()> {
        self.close_start_tag()?;
        write!(self.out, "</{name}>")
    }
}

/// HTML entity escaping for text and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn written(build: impl FnOnce(&mut HtmlWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut writer = HtmlWriter::new(Vec::new());
        build(&mut writer).expect("write failed");
        String::from_utf8(writer.into_inner().expect("flush failed")).expect("utf-8")
    }

    #[test]
    fn start_tags_close_lazily() {
        let html = written(|w| {
            w.start_element("div")?;
            w.write_attribute("id", "m")?;
            w.start_element("span")?;
            w.write_attribute("class", "a b")?;
            w.end_element("span")?;
            w.end_element("div")
        });
        assert_eq!(html, r#"<div id="m"><span class="a b"></span></div>"#);
    }

    #[test]
    fn text_and_attributes_are_escaped_raw_is_not() {
        let html = written(|w| {
            w.start_element("p")?;
            w.write_attribute("title", "say \"hi\"")?;
            w.write_text("<b>&'")?;
            w.write_raw("<i>x</i>")?;
            w.end_element("p")
        });
        assert_eq!(
            html,
            "<p title=\"say &quot;hi&quot;\">&lt;b&gt;&amp;&#39;<i>x</i></p>"
        );
    }

    #[test]
    fn attribute_after_content_is_rejected() {
        let mut writer = HtmlWriter::new(Vec::new());
        writer.start_element("p").expect("start");
        writer.write_text("x").expect("text");
        let err = writer.write_attribute("id", "late").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
