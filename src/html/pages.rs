//! Upload form and report page

use html_escape::encode_text;

use crate::checks::{Report, TocCheck};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { font-size: 1.5rem; }
h2 { font-size: 1.1rem; margin-top: 1.5rem; }
.ok { color: #1a7f37; }
.issue { color: #b42318; }
.warning { color: #9a6700; }
table { border-collapse: collapse; }
td, th { border: 1px solid #ccc; padding: 0.25rem 0.5rem; text-align: left; }
"#;

pub fn render_upload_form() -> String {
    page(
        "Docx Compliance Checker",
        r#"<h1>Docx Compliance Checker</h1>
<p>Upload a Word document (.docx) to check fonts, margins, orientation and links.</p>
<form action="/upload" method="post" enctype="multipart/form-data">
  <input type="file" name="file" accept=".docx" required>
  <button type="submit">Check document</button>
</form>"#,
    )
}

pub fn render_report(filename: &str, report: &Report) -> String {
    let mut body = format!(
        "<h1>Compliance report: {}</h1>\n<p>{} issue(s) found. <a href=\"/\">Check another document</a></p>\n",
        encode_text(filename),
        report.issue_count()
    );

    section(&mut body, "Font names", &report.font_name_issues, "issue");
    section(&mut body, "Font sizes", &report.font_size_issues, "issue");
    section(&mut body, "Table font sizes", &report.table_font_issues, "warning");
    section(&mut body, "Page orientation", &report.orientation_issues, "issue");
    toc_section(&mut body, &report.toc_check);
    section(&mut body, "Margin errors", &report.margin_errors, "issue");
    section(&mut body, "Margin warnings", &report.margin_warnings, "warning");
    section(&mut body, "Header/footer distance", &report.header_footer_errors, "issue");
    section(&mut body, "Internal links", &report.internal_link_issues, "issue");
    section(&mut body, "External links", &report.external_link_issues, "issue");

    page(&format!("Report: {}", filename), &body)
}

fn section(out: &mut String, title: &str, issues: &[String], class: &str) {
    out.push_str(&format!("<h2>{}</h2>\n", encode_text(title)));

    if issues.is_empty() {
        out.push_str("<p class=\"ok\">No issues.</p>\n");
        return;
    }

    out.push_str("<ul>\n");
    for issue in issues {
        out.push_str(&format!("  <li class=\"{}\">{}</li>\n", class, encode_text(issue)));
    }
    out.push_str("</ul>\n");
}

fn toc_section(out: &mut String, toc: &TocCheck) {
    out.push_str("<h2>Table of contents</h2>\n");

    match toc {
        TocCheck::Failed { error } => {
            out.push_str(&format!("<p class=\"issue\">{}</p>\n", encode_text(error)));
        }
        TocCheck::Summary(summary) if !summary.toc_present => {
            out.push_str("<p>No table of contents links found.</p>\n");
        }
        TocCheck::Summary(summary) => {
            out.push_str(&format!(
                "<table>\n<tr><th>TOC links</th><td>{}</td></tr>\n<tr><th>Valid</th><td>{}</td></tr>\n<tr><th>Broken</th><td>{}</td></tr>\n</table>\n",
                summary.total_links_in_toc, summary.valid_links, summary.broken_links
            ));
            if !summary.broken_anchor_ids.is_empty() {
                out.push_str("<ul>\n");
                for anchor in &summary.broken_anchor_ids {
                    out.push_str(&format!(
                        "  <li class=\"issue\">Missing bookmark: {}</li>\n",
                        encode_text(anchor)
                    ));
                }
                out.push_str("</ul>\n");
            }
        }
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        encode_text(title),
        STYLE,
        body
    )
}
