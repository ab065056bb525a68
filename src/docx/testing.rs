//! In-memory docx fixtures for tests

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::archive::{MAIN_PART, MAIN_RELS_PART};

/// Wrap body XML in a `w:document` root with the usual prefixes bound
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{body}</w:body></w:document>"#
    )
}

/// A run with optional explicit font and size
pub fn run_xml(text: &str, font: Option<&str>, size_pt: Option<f64>) -> String {
    let mut rpr = String::new();
    if let Some(font) = font {
        rpr.push_str(&format!(r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}"/>"#));
    }
    if let Some(size) = size_pt {
        rpr.push_str(&format!(r#"<w:sz w:val="{}"/>"#, (size * 2.0).round() as i64));
    }
    let rpr = if rpr.is_empty() {
        String::new()
    } else {
        format!("<w:rPr>{rpr}</w:rPr>")
    };
    format!(r#"<w:r>{rpr}<w:t xml:space="preserve">{text}</w:t></w:r>"#)
}

/// Section properties; margins are top, bottom, left, right in twips
pub fn section_xml(orient: Option<&str>, margins: [u32; 4], header: u32, footer: u32) -> String {
    let orient = orient
        .map(|o| format!(r#" w:orient="{o}""#))
        .unwrap_or_default();
    format!(
        r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"{orient}/><w:pgMar w:top="{}" w:bottom="{}" w:left="{}" w:right="{}" w:header="{header}" w:footer="{footer}" w:gutter="0"/></w:sectPr>"#,
        margins[0], margins[1], margins[2], margins[3]
    )
}

pub fn relationships_xml(rels: &[(&str, &str)]) -> String {
    let entries: String = rels
        .iter()
        .map(|(id, target)| {
            let mode = if target.contains("://") {
                r#" TargetMode="External""#
            } else {
                ""
            };
            format!(
                r#"<Relationship Id="{id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="{target}"{mode}/>"#
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{entries}</Relationships>"#
    )
}

/// Builds a minimal docx container
#[derive(Default)]
pub struct DocxBuilder {
    body: String,
    rels: Vec<(String, String)>,
    main_override: Option<Vec<u8>>,
    rels_override: Option<Vec<u8>>,
    skip_main: bool,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw body XML
    pub fn body(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    /// Paragraph with a single unformatted run
    pub fn paragraph(self, text: &str) -> Self {
        let xml = format!("<w:p>{}</w:p>", run_xml(text, None, None));
        self.body(&xml)
    }

    pub fn section(self, orient: Option<&str>, margins: [u32; 4], header: u32, footer: u32) -> Self {
        let xml = section_xml(orient, margins, header, footer);
        self.body(&xml)
    }

    pub fn anchor_link(self, anchor: &str, text: &str) -> Self {
        let xml = format!(
            r#"<w:p><w:hyperlink w:anchor="{anchor}">{}</w:hyperlink></w:p>"#,
            run_xml(text, None, None)
        );
        self.body(&xml)
    }

    /// Anchor link inside a table cell, outside the body paragraphs
    pub fn table_link(self, anchor: &str, text: &str) -> Self {
        let xml = format!(
            r#"<w:tbl><w:tr><w:tc><w:p><w:hyperlink w:anchor="{anchor}">{}</w:hyperlink></w:p></w:tc></w:tr></w:tbl>"#,
            run_xml(text, None, None)
        );
        self.body(&xml)
    }

    pub fn external_link(mut self, id: &str, target: &str, text: &str) -> Self {
        self.rels.push((id.to_string(), target.to_string()));
        let xml = format!(
            r#"<w:p><w:hyperlink r:id="{id}">{}</w:hyperlink></w:p>"#,
            run_xml(text, None, None)
        );
        self.body(&xml)
    }

    pub fn bookmark(self, name: &str) -> Self {
        let xml = format!(
            r#"<w:p><w:bookmarkStart w:id="0" w:name="{name}"/><w:bookmarkEnd w:id="0"/></w:p>"#
        );
        self.body(&xml)
    }

    pub fn main_part(mut self, bytes: &[u8]) -> Self {
        self.main_override = Some(bytes.to_vec());
        self
    }

    pub fn rels_part(mut self, bytes: &[u8]) -> Self {
        self.rels_override = Some(bytes.to_vec());
        self
    }

    pub fn without_main_part(mut self) -> Self {
        self.skip_main = true;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
            .unwrap();

        if !self.skip_main {
            let main = self
                .main_override
                .unwrap_or_else(|| document_xml(&self.body).into_bytes());
            zip.start_file(MAIN_PART, options).unwrap();
            zip.write_all(&main).unwrap();
        }

        let rels = self.rels_override.unwrap_or_else(|| {
            let pairs: Vec<(&str, &str)> = self
                .rels
                .iter()
                .map(|(id, target)| (id.as_str(), target.as_str()))
                .collect();
            relationships_xml(&pairs).into_bytes()
        });
        zip.start_file(MAIN_RELS_PART, options).unwrap();
        zip.write_all(&rels).unwrap();

        zip.finish().unwrap().into_inner()
    }
}
