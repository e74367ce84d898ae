//! Sitemap XML rendering
//!
//! Documents follow the sitemaps.org 0.9 schema, are UTF-8 and use
//! two-space indentation.

use crate::date::format_timestamp;
use crate::sitemap::{SitemapFile, SitemapIndex};
use crate::{OutputError, OutputResult};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt::Display;

/// Namespace shared by sitemaps and sitemap indexes
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const INDENT_SIZE: usize = 2;

/// Renders a `<urlset>` document for one sitemap file
///
/// Each entry gets a `<loc>`; `<lastmod>` is written only when the entry
/// has a last-modified time.
pub fn render_sitemap(file: &SitemapFile) -> OutputResult<String> {
    let mut writer = start_document("urlset")?;

    for entry in &file.entries {
        write_start(&mut writer, "url")?;
        write_text_element(&mut writer, "loc", &entry.location)?;
        if let Some(last_modified) = &entry.last_modified {
            write_text_element(&mut writer, "lastmod", &format_timestamp(last_modified))?;
        }
        write_end(&mut writer, "url")?;
    }

    finish_document(writer, "urlset")
}

/// Renders the `<sitemapindex>` document
pub fn render_index(index: &SitemapIndex) -> OutputResult<String> {
    let mut writer = start_document("sitemapindex")?;

    for entry in &index.entries {
        write_start(&mut writer, "sitemap")?;
        write_text_element(&mut writer, "loc", &entry.location)?;
        write_text_element(
            &mut writer,
            "lastmod",
            &format_timestamp(&entry.last_modified),
        )?;
        write_end(&mut writer, "sitemap")?;
    }

    finish_document(writer, "sitemapindex")
}

fn xml_error(e: impl Display) -> OutputError {
    OutputError::Xml(e.to_string())
}

fn start_document(root: &str) -> OutputResult<Writer<Vec<u8>>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    let mut start = BytesStart::new(root);
    start.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer.write_event(Event::Start(start)).map_err(xml_error)?;

    Ok(writer)
}

fn finish_document(mut writer: Writer<Vec<u8>>, root: &str) -> OutputResult<String> {
    write_end(&mut writer, root)?;
    let mut document = String::from_utf8(writer.into_inner()).map_err(xml_error)?;
    document.push('\n');
    Ok(document)
}

fn write_start(writer: &mut Writer<Vec<u8>>, name: &str) -> OutputResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)
}

fn write_end(writer: &mut Writer<Vec<u8>>, name: &str) -> OutputResult<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> OutputResult<()> {
    write_start(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    write_end(writer, name)
}
