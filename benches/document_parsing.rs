//! Document Parsing Benchmarks
//!
//! Performance benchmarks for opening a docx and running the offline checks.
//!
//! Run with: `cargo bench --bench document_parsing`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use docx_compliance_server::checks;
use docx_compliance_server::docx::{Document, DocxArchive};

/// Docx with `paragraphs` body paragraphs, a TOC and one table
fn create_docx(paragraphs: usize) -> Vec<u8> {
    use std::io::{Cursor, Write};
    use zip::{write::SimpleFileOptions, ZipWriter};

    let mut body = String::new();
    for i in 0..10 {
        body.push_str(&format!(
            r#"<w:p><w:hyperlink w:anchor="_Toc{i}"><w:r><w:t>Heading {i}</w:t></w:r></w:hyperlink></w:p>"#
        ));
    }
    for i in 0..paragraphs {
        if i % 50 == 0 {
            body.push_str(&format!(
                r#"<w:p><w:bookmarkStart w:id="{i}" w:name="_Toc{}"/><w:bookmarkEnd w:id="{i}"/></w:p>"#,
                i / 50
            ));
        }
        body.push_str(&format!(
            r#"<w:p><w:r><w:rPr><w:rFonts w:ascii="Times New Roman"/><w:sz w:val="24"/></w:rPr><w:t>Paragraph {i} of the benchmark document.</w:t></w:r></w:p>"#
        ));
    }
    body.push_str(r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:rPr><w:sz w:val="18"/></w:rPr><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#);
    body.push_str(r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#);

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{body}</w:body></w:document>"#
    );

    let mut buffer = Vec::new();
    {
        let cursor = Cursor::new(&mut buffer);
        let mut zip = ZipWriter::new(cursor);
        let options = SimpleFileOptions::default();

        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(document.as_bytes()).unwrap();

        zip.start_file("word/_rels/document.xml.rels", options).unwrap();
        zip.write_all(br#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"/>"#).unwrap();

        zip.finish().unwrap();
    }
    buffer
}

/// Benchmark opening the typed document view
fn bench_document_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_open");
    group.measurement_time(Duration::from_secs(10));

    for paragraphs in [100usize, 1_000] {
        let data = create_docx(paragraphs);
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("paragraphs", paragraphs), &data, |b, data| {
            b.iter(|| {
                let archive = DocxArchive::from_bytes(black_box(data.clone()))
                    .expect("Failed to open archive");
                let document = Document::open(&archive).expect("Failed to parse document");
                black_box(document)
            })
        });
    }

    group.finish();
}

/// Benchmark the offline check suite on an opened document
fn bench_inspection(c: &mut Criterion) {
    let data = create_docx(1_000);
    let archive = DocxArchive::from_bytes(data).expect("Failed to open archive");
    let document = Document::open(&archive).expect("Failed to parse document");

    c.bench_function("inspect_1000_paragraphs", |b| {
        b.iter(|| {
            let inspection = checks::inspect(black_box(&archive), black_box(&document))
                .expect("Inspection failed");
            black_box(inspection.report)
        })
    });
}

criterion_group!(benches, bench_document_open, bench_inspection);
criterion_main!(benches);
