//! WordprocessingML to typed view
//!
//! Only body-level content is modelled: `w:body/w:p` paragraphs, `w:body/w:tbl`
//! tables, and section properties attached to body paragraphs or to the body.
//! Paragraph runs come from direct `w:r` children. Paragraph text also takes in
//! the runs of `w:hyperlink` children, so a link's label reads as part of its
//! paragraph.

use super::error::{DocxError, DocxResult};
use super::model::{
    Document, Margins, Orientation, Paragraph, RunStyle, SectionLayout, Table, TableCell,
    TableRow, TWIPS_PER_INCH,
};
use super::xml::{XmlElement, W_NS};

/// Build a [`Document`] from the root of `word/document.xml`
pub fn parse_document(root: &XmlElement) -> DocxResult<Document> {
    if !root.is(W_NS, "document") {
        return Err(DocxError::NotWordprocessing(format!(
            "unexpected root element '{}'",
            root.name.local
        )));
    }

    let body = root
        .child(W_NS, "body")
        .ok_or_else(|| DocxError::NotWordprocessing("missing w:body".to_string()))?;

    let mut document = Document::default();

    for element in body.child_elements() {
        if element.is(W_NS, "p") {
            document.paragraphs.push(parse_paragraph(element));
            if let Some(sect_pr) = element
                .child(W_NS, "pPr")
                .and_then(|ppr| ppr.child(W_NS, "sectPr"))
            {
                document.sections.push(parse_section(sect_pr));
            }
        } else if element.is(W_NS, "tbl") {
            document.tables.push(parse_table(element));
        } else if element.is(W_NS, "sectPr") {
            document.sections.push(parse_section(element));
        }
    }

    tracing::debug!(
        paragraphs = document.paragraphs.len(),
        tables = document.tables.len(),
        sections = document.sections.len(),
        "Parsed document body"
    );

    Ok(document)
}

fn parse_paragraph(p: &XmlElement) -> Paragraph {
    let mut paragraph = Paragraph::default();

    for child in p.child_elements() {
        if child.is(W_NS, "r") {
            paragraph.runs.push(parse_run_style(child));
            push_run_text(child, &mut paragraph.text);
        } else if child.is(W_NS, "hyperlink") {
            for run in child.children_named(W_NS, "r") {
                push_run_text(run, &mut paragraph.text);
            }
        }
    }

    paragraph
}

fn parse_run_style(run: &XmlElement) -> RunStyle {
    let Some(rpr) = run.child(W_NS, "rPr") else {
        return RunStyle::default();
    };

    let font_name = rpr
        .child(W_NS, "rFonts")
        .and_then(|fonts| fonts.attr(W_NS, "ascii"))
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    // w:sz is in half-points
    let font_size_pt = rpr
        .child(W_NS, "sz")
        .and_then(|sz| sz.attr(W_NS, "val"))
        .and_then(|val| val.trim().parse::<f64>().ok())
        .map(|half_points| half_points / 2.0);

    RunStyle {
        font_name,
        font_size_pt,
    }
}

fn push_run_text(run: &XmlElement, text: &mut String) {
    for child in run.child_elements() {
        if child.name.namespace.as_deref() != Some(W_NS) {
            continue;
        }
        match child.name.local.as_str() {
            "t" => text.push_str(&child.text()),
            "tab" | "ptab" => text.push('\t'),
            // Page and column breaks carry no text
            "br" => {
                if matches!(child.attr(W_NS, "type"), None | Some("textWrapping")) {
                    text.push('\n');
                }
            }
            "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }
}

fn parse_table(tbl: &XmlElement) -> Table {
    Table {
        rows: tbl
            .children_named(W_NS, "tr")
            .map(|tr| TableRow {
                cells: tr
                    .children_named(W_NS, "tc")
                    .map(|tc| TableCell {
                        paragraphs: tc.children_named(W_NS, "p").map(parse_paragraph).collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn parse_section(sect_pr: &XmlElement) -> SectionLayout {
    let orientation =
        Orientation::from_attr(sect_pr.child(W_NS, "pgSz").and_then(|sz| sz.attr(W_NS, "orient")));

    let pg_mar = sect_pr.child(W_NS, "pgMar");
    let inches = |name: &str| {
        pg_mar
            .and_then(|mar| mar.attr(W_NS, name))
            .and_then(twips_to_inches)
    };

    SectionLayout {
        orientation,
        margins: Margins {
            top: inches("top"),
            bottom: inches("bottom"),
            left: inches("left"),
            right: inches("right"),
        },
        header_distance_in: inches("header"),
        footer_distance_in: inches("footer"),
    }
}

fn twips_to_inches(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .map(|twips| twips / TWIPS_PER_INCH)
}
