//! HTML markup for the index and term pages.
//!
//! All functions here are pure string builders; the caller decides where the
//! bytes go.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use quick_xml::escape::{escape, partial_escape};

use crate::render::Fragment;

/// Characters percent-encoded in page hrefs.
const HREF: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Options shared by every page builder.
#[derive(Debug, Clone, Copy)]
pub struct HtmlOptions<'a> {
    pub page_extension: &'a str,
    pub index_file: &'a str,
    pub escape: bool,
}

impl HtmlOptions<'_> {
    /// Element content: only `&`, `<` and `>` are escaped.
    fn text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.escape {
            partial_escape(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Attribute values: quotes are escaped as well.
    fn attr<'t>(&self, value: &'t str) -> Cow<'t, str> {
        if self.escape {
            escape(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    /// The href of the page for `term`.
    pub fn href(&self, term: &str) -> String {
        let encoded = format!("{}{}", utf8_percent_encode(term, HREF), self.page_extension);
        self.attr(&encoded).into_owned()
    }

    fn push_link(&self, out: &mut String, term: &str, text: &str) {
        out.push_str("<a href=\"");
        out.push_str(&self.href(term));
        out.push_str("\">");
        out.push_str(&self.text(text));
        out.push_str("</a>");
    }
}

/// Render fragments as the inline body of a definition.
pub fn fragments_to_html(fragments: &[Fragment<'_>], opts: &HtmlOptions<'_>) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match *fragment {
            Fragment::Plain(text) => out.push_str(&opts.text(text)),
            Fragment::Link { term, text } => opts.push_link(&mut out, term, text),
        }
    }
    out
}

/// A complete page for one term.
pub fn term_page(term: &str, fragments: &[Fragment<'_>], opts: &HtmlOptions<'_>) -> String {
    let term_text = opts.text(term);
    let mut doc = String::new();

    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    doc.push_str(&term_text);
    doc.push_str("</title>\n</head>\n<body>\n");
    doc.push_str("<h2 style=\"color: red\"><b><i>");
    doc.push_str(&term_text);
    doc.push_str("</i></b></h2>\n<blockquote>");
    doc.push_str(&fragments_to_html(fragments, opts));
    doc.push_str("</blockquote>\n<hr>\n<p>Return to <a href=\"");
    doc.push_str(&opts.attr(opts.index_file));
    doc.push_str("\">index</a>.</p>\n</body>\n</html>\n");

    doc
}

/// The index page listing `terms` in the given order.
pub fn index_page(title: &str, terms: &[String], opts: &HtmlOptions<'_>) -> String {
    let title = opts.text(title);
    let mut doc = String::new();

    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    doc.push_str(&title);
    doc.push_str("</title>\n</head>\n<body>\n<h1>");
    doc.push_str(&title);
    doc.push_str("</h1>\n<hr>\n<h2>Index</h2>\n<ul>\n");
    for term in terms {
        doc.push_str("<li>");
        opts.push_link(&mut doc, term, term);
        doc.push_str("</li>\n");
    }
    doc.push_str("</ul>\n</body>\n</html>\n");

    doc
}
