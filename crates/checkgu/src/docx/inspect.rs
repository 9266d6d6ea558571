//! Reading generated packages back: entry listing, XML checks and text
//! extraction from `word/document.xml`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::DocxError;

use super::escape::is_xml_char;
use super::parts::DOCUMENT_PATH;

/// Every entry of a package as UTF-8 text, in archive order.
#[derive(Debug, Clone, Default)]
pub struct PackageContents {
    pub entries: Vec<(String, String)>,
}

impl PackageContents {
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }
}

/// Unzips every entry of a package.
pub fn read_package(bytes: &[u8]) -> Result<PackageContents, DocxError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        entries.push((file.name().to_string(), content));
    }

    Ok(PackageContents { entries })
}

/// Returns an error if `xml` is not well-formed.
///
/// Besides tag structure this rejects characters XML 1.0 does not allow,
/// whether written literally or as character references.
pub fn check_well_formed(xml: &str) -> Result<(), DocxError> {
    check_xml_chars(xml)?;

    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| DocxError::Packaging(format!("Invalid text node: {}", e)))?;
                check_xml_chars(&text)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocxError::Packaging(format!(
                    "XML parsing error at {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(DocxError::Packaging(format!(
            "{} element(s) left unclosed",
            depth
        )));
    }
    Ok(())
}

fn check_xml_chars(text: &str) -> Result<(), DocxError> {
    match text.char_indices().find(|(_, c)| !is_xml_char(*c)) {
        Some((offset, c)) => Err(DocxError::Packaging(format!(
            "Character U+{:04X} at byte {} is not allowed in XML",
            c as u32, offset
        ))),
        None => Ok(()),
    }
}

/// Extracts the text of `word/document.xml`, one line per paragraph.
pub fn read_document_text(bytes: &[u8]) -> Result<String, DocxError> {
    let package = read_package(bytes)?;
    let xml = package
        .get(DOCUMENT_PATH)
        .ok_or_else(|| DocxError::Packaging(format!("Missing {}", DOCUMENT_PATH)))?;
    document_text(xml)
}

fn document_text(xml: &str) -> Result<String, DocxError> {
    let mut reader = Reader::from_str(xml);

    let mut text = String::new();
    let mut in_text_element = false;
    let mut in_paragraph = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_element = true,
                b"p" => in_paragraph = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_element = false,
                b"p" => {
                    if in_paragraph {
                        text.push('\n');
                        in_paragraph = false;
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_element {
                    let decoded = e
                        .unescape()
                        .map_err(|e| DocxError::Packaging(format!("Invalid text node: {}", e)))?;
                    text.push_str(&decoded);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocxError::Packaging(format!("XML parsing error: {}", e)));
            }
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_text_joins_runs_per_paragraph() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:body>
                <w:p>
                    <w:r><w:t xml:space="preserve">Grade: </w:t></w:r>
                    <w:r><w:t>5 &amp; 6</w:t></w:r>
                </w:p>
            </w:body>
        </w:document>"#;

        assert_eq!(document_text(xml).unwrap(), "Grade: 5 & 6\n");
    }

    #[test]
    fn test_check_well_formed_rejects_mismatched_tags() {
        assert!(check_well_formed("<a><b></a></b>").is_err());
        assert!(check_well_formed("<a><b/></a>").is_ok());
    }

    #[test]
    fn test_check_well_formed_rejects_forbidden_characters() {
        let forbidden = [
            '\u{0}', '\u{1}', '\u{8}', '\u{B}', '\u{C}', '\u{1F}', '\u{FFFE}', '\u{FFFF}',
        ];
        for c in forbidden {
            let xml = format!("<a>Week{}1</a>", c);
            assert!(check_well_formed(&xml).is_err(), "U+{:04X} accepted", c as u32);
        }
        assert!(check_well_formed("<a>tab\there</a>").is_ok());
    }

    #[test]
    fn test_check_well_formed_rejects_forbidden_character_reference() {
        assert!(check_well_formed("<a>bell &#7; ring</a>").is_err());
    }

    #[test]
    fn test_check_well_formed_rejects_unclosed() {
        assert!(check_well_formed("<a><b>").is_err());
    }

    #[test]
    fn test_read_package_rejects_non_zip() {
        assert!(matches!(
            read_package(b"not a zip"),
            Err(DocxError::Packaging(_))
        ));
    }
}
