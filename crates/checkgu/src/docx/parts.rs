//! The XML parts of a minimal WordprocessingML package.

use crate::model::LessonPlanRecord;

use super::escape::escape_xml;

pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub const ROOT_RELS_PATH: &str = "_rels/.rels";
pub const DOCUMENT_RELS_PATH: &str = "word/_rels/document.xml.rels";
pub const DOCUMENT_PATH: &str = "word/document.xml";
pub const STYLES_PATH: &str = "word/styles.xml";

/// Every entry of a generated package, in the order they are written.
pub const PACKAGE_PARTS: [&str; 5] = [
    CONTENT_TYPES_PATH,
    ROOT_RELS_PATH,
    DOCUMENT_RELS_PATH,
    DOCUMENT_PATH,
    STYLES_PATH,
];

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Rendered when subject or grade is absent.
pub const MISSING_FIELD: &str = "N/A";

/// US Letter in twentieths of a point.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;
/// One inch.
const PAGE_MARGIN: u32 = 1440;

pub const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

pub const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

pub const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

pub const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="Calibri" w:eastAsia="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>
        <w:sz w:val="22"/>
        <w:szCs w:val="22"/>
      </w:rPr>
    </w:rPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:pPr>
      <w:spacing w:after="160" w:line="259" w:lineRule="auto"/>
    </w:pPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr>
      <w:spacing w:before="240" w:after="60"/>
    </w:pPr>
    <w:rPr>
      <w:rFonts w:ascii="Calibri Light" w:eastAsia="Calibri Light" w:hAnsi="Calibri Light"/>
      <w:sz w:val="56"/>
      <w:szCs w:val="56"/>
    </w:rPr>
  </w:style>
</w:styles>"#;

/// Run formatting for a single text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStyle {
    Plain,
    Bold,
    Italic,
}

/// Accumulates the `w:body` of `word/document.xml`.
///
/// All text passed in is escaped here; callers hand over raw record text.
struct BodyWriter {
    xml: String,
}

impl BodyWriter {
    fn new() -> Self {
        let mut xml = String::with_capacity(4096);
        xml.push_str(XML_DECLARATION);
        xml.push_str("\n<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\n  <w:body>\n");
        Self { xml }
    }

    fn run(&mut self, text: &str, style: RunStyle) {
        self.xml.push_str("      <w:r>\n");
        match style {
            RunStyle::Plain => {}
            RunStyle::Bold => self.xml.push_str("        <w:rPr><w:b/></w:rPr>\n"),
            RunStyle::Italic => self.xml.push_str("        <w:rPr><w:i/></w:rPr>\n"),
        }
        // Labels end in a space, which Word drops unless preserved.
        self.xml.push_str("        <w:t xml:space=\"preserve\">");
        self.xml.push_str(&escape_xml(text));
        self.xml.push_str("</w:t>\n      </w:r>\n");
    }

    fn paragraph(&mut self, text: &str, style: RunStyle) {
        self.xml.push_str("    <w:p>\n");
        self.run(text, style);
        self.xml.push_str("    </w:p>\n");
    }

    fn title(&mut self, text: &str) {
        self.xml
            .push_str("    <w:p>\n      <w:pPr><w:pStyle w:val=\"Title\"/></w:pPr>\n");
        self.run(text, RunStyle::Plain);
        self.xml.push_str("    </w:p>\n");
    }

    fn labeled(&mut self, label: &str, value: &str) {
        self.xml.push_str("    <w:p>\n");
        self.run(label, RunStyle::Bold);
        self.run(value, RunStyle::Plain);
        self.xml.push_str("    </w:p>\n");
    }

    fn blank(&mut self) {
        self.paragraph("", RunStyle::Plain);
    }

    fn finish(mut self) -> String {
        self.xml.push_str(&format!(
            "    <w:sectPr>\n      <w:pgSz w:w=\"{PAGE_WIDTH}\" w:h=\"{PAGE_HEIGHT}\"/>\n      <w:pgMar w:top=\"{m}\" w:right=\"{m}\" w:bottom=\"{m}\" w:left=\"{m}\"/>\n    </w:sectPr>\n",
            m = PAGE_MARGIN
        ));
        self.xml.push_str("  </w:body>\n</w:document>");
        self.xml
    }
}

/// Renders `word/document.xml` for a lesson plan.
pub fn document_xml(
    record: &LessonPlanRecord,
    lesson_content: &str,
    attribution: &str,
) -> String {
    let mut body = BodyWriter::new();

    body.title(&format!("Lesson Plan: {}", record.file_name));
    body.blank();

    body.labeled("Subject: ", field_or_missing(record.subject.as_deref()));
    body.labeled("Grade: ", field_or_missing(record.grade.as_deref()));
    body.labeled("Upload Date: ", &upload_date_text(record));
    body.labeled("Status: ", record.status.as_str());
    body.blank();

    body.paragraph("Lesson Content:", RunStyle::Bold);
    body.paragraph(lesson_content, RunStyle::Plain);

    if !record.placeholders.is_empty() {
        body.blank();
        body.paragraph("Template Placeholders:", RunStyle::Bold);
        for (key, value) in record.placeholders.iter() {
            body.paragraph(&format!("\u{2022} {}: {}", key, value), RunStyle::Plain);
        }
    }

    body.blank();
    body.paragraph(attribution, RunStyle::Italic);

    body.finish()
}

/// Absent and blank values both render as [`MISSING_FIELD`].
fn field_or_missing(value: Option<&str>) -> &str {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(MISSING_FIELD)
}

fn upload_date_text(record: &LessonPlanRecord) -> String {
    match record.upload_day() {
        Some(day) => day.format("%Y-%m-%d").to_string(),
        None => {
            tracing::warn!(
                record_id = record.id,
                "Upload date is not a valid ISO-8601 timestamp, rendering it verbatim"
            );
            record.upload_date.clone()
        }
    }
}
