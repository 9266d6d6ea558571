//! Reading generated packages back for assertions.

#![allow(dead_code)]

use checkgu::docx::inspect::{check_well_formed, read_document_text, read_package, PackageContents};
use checkgu::docx::parts::DOCUMENT_PATH;

pub struct Package {
    bytes: Vec<u8>,
    contents: PackageContents,
}

impl Package {
    pub fn open(bytes: Vec<u8>) -> Self {
        let contents = read_package(&bytes).expect("package should be a readable zip");
        Self { bytes, contents }
    }

    pub fn names(&self) -> Vec<&str> {
        self.contents.names()
    }

    pub fn entry(&self, name: &str) -> &str {
        self.contents
            .get(name)
            .unwrap_or_else(|| panic!("missing entry {}", name))
    }

    pub fn document_xml(&self) -> &str {
        self.entry(DOCUMENT_PATH)
    }

    /// Paragraph text with entities resolved, one line per paragraph.
    pub fn text(&self) -> String {
        read_document_text(&self.bytes).expect("document text should parse")
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    /// Runs every entry through the crate's own check and a strict parser.
    pub fn assert_well_formed(&self) {
        for (name, content) in &self.contents.entries {
            if let Err(e) = check_well_formed(content) {
                panic!("{} is not well-formed: {}", name, e);
            }
            if let Err(e) = roxmltree::Document::parse(content) {
                panic!("{} rejected by strict parser: {}", name, e);
            }
        }
    }
}

/// Character data between tags, still escaped.
pub fn text_segments(xml: &str) -> Vec<&str> {
    xml.split('>')
        .skip(1)
        .filter_map(|chunk| chunk.split('<').next())
        .filter(|s| !s.is_empty())
        .collect()
}
