use std::io::BufRead;

use log::{debug, trace};
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;

use super::{Document, RawElement, Shape};
use crate::errors::{Error, Result};
use crate::types::AttrMap;

impl TryFrom<&BytesStart<'_>> for RawElement {
    type Error = Error;

    /// Build a `RawElement` from a `BytesStart` value. Failures here are are low-level
    /// XML type errors (e.g. bad attribute names, non-UTF8) rather than anything
    /// about the meaning of SVG attributes.
    fn try_from(e: &BytesStart) -> Result<Self> {
        let name = String::from_utf8(e.name().into_inner().to_vec())?;
        let attrs: Result<AttrMap> = e
            .attributes()
            .map(|a| {
                let aa = a.map_err(Error::from_err)?;
                let key = String::from_utf8(aa.key.into_inner().to_vec())?;
                let value = aa.unescape_value().map_err(Error::from_err)?.into_owned();
                Ok((key, value))
            })
            .collect();
        Ok(Self {
            name,
            attrs: attrs?,
            src_line: 0,
        })
    }
}

/// Collects the canvas size and shapes while walking XML events.
#[derive(Default)]
struct DocumentBuilder {
    doc: Option<Document>,
    // number of open elements at or below a `<defs>` element
    defs_depth: usize,
}

impl DocumentBuilder {
    fn element(&mut self, el: &RawElement, is_empty: bool) -> Result<()> {
        if self.defs_depth > 0 || el.name == "defs" {
            if !is_empty {
                self.defs_depth += 1;
            }
            trace!("skipping <{}> within defs", el.name);
            return Ok(());
        }
        if el.name == "svg" {
            if self.doc.is_none() {
                self.doc = Some(Document::from_svg_element(el)?);
            }
            return Ok(());
        }
        let doc = self.doc.as_mut().ok_or_else(|| {
            Error::Document(format!(
                "<{}> on line {} is outside an <svg> element",
                el.name, el.src_line
            ))
        })?;
        match Shape::from_element(el)? {
            Some(shape) => doc.shapes.push(shape),
            None => debug!("ignoring unsupported element <{}>", el.name),
        }
        Ok(())
    }

    fn end(&mut self) {
        self.defs_depth = self.defs_depth.saturating_sub(1);
    }
}

impl Document {
    /// Read an SVG document, extracting the canvas size and drawable shapes.
    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        let mut builder = DocumentBuilder::default();
        let mut buf = Vec::new();
        let mut src_line = 1;

        loop {
            let ev = reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::Document(format!("XML error near line {src_line}: {e}")))?;
            let event_lines = ev.iter().filter(|&c| *c == b'\n').count();

            match &ev {
                XmlEvent::Start(bs) | XmlEvent::Empty(bs) => {
                    let mut el = RawElement::try_from(bs)?;
                    el.src_line = src_line;
                    builder.element(&el, matches!(ev, XmlEvent::Empty(_)))?;
                }
                XmlEvent::End(_) => builder.end(),
                XmlEvent::Eof => break,
                _ => {}
            }

            src_line += event_lines;
            buf.clear();
        }

        let doc = builder
            .doc
            .ok_or_else(|| Error::Document("no <svg> element found".to_string()))?;
        debug!(
            "read document: size {:?}x{:?}, {} shapes",
            doc.width,
            doc.height,
            doc.shapes.len()
        );
        Ok(doc)
    }
}
