//! DOCX table scanner — streams `word/document.xml` out of the OPC container
//! and harvests label→value pairs from two-column table rows.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::DocumentError;

/// Scans every table in the document and returns the accumulated label map.
///
/// Only rows with exactly two cells, both non-empty after trimming,
/// contribute. Duplicate labels resolve last-write-wins across the whole
/// document, not just within one table.
pub fn scan_label_table(bytes: &[u8]) -> Result<HashMap<String, String>, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);

    let mut labels: HashMap<String, String> = HashMap::new();
    let mut cells: Vec<String> = Vec::new();
    let mut cell: Option<String> = None;
    let mut in_row = false;
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tr" => {
                    in_row = true;
                    cells.clear();
                }
                b"w:tc" if in_row => cell = Some(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Text(e) if in_text => {
                if let Some(text) = cell.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:tc" => {
                    if let Some(text) = cell.take() {
                        cells.push(text);
                    }
                }
                b"w:tr" => {
                    in_row = false;
                    if let [label, value] = cells.as_slice() {
                        let label = label.trim();
                        let value = value.trim();
                        if !label.is_empty() && !value.is_empty() {
                            labels.insert(label.to_string(), value.to_string());
                        }
                    }
                    cells.clear();
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(labels)
}
