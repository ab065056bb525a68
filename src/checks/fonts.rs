//! Body and table font checks

use crate::docx::Document;

pub const REQUIRED_FONT: &str = "Times New Roman";
pub const BODY_FONT_SIZE_PT: f64 = 12.0;
pub const TABLE_FONT_SIZE_PT: f64 = 9.0;

/// Longest paragraph excerpt quoted in an issue
const SNIPPET_CHARS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontIssues {
    pub name_issues: Vec<String>,
    pub size_issues: Vec<String>,
}

/// Flag explicit font family and size overrides in body paragraphs
///
/// At most one name issue and one size issue per paragraph; runs without an
/// explicit value inherit from the style and are skipped.
pub fn check_fonts(document: &Document) -> FontIssues {
    let mut issues = FontIssues::default();

    for (index, paragraph) in document.paragraphs.iter().enumerate() {
        let number = index + 1;
        let mut name_found = false;
        let mut size_found = false;

        for run in &paragraph.runs {
            if !name_found {
                if let Some(name) = run.font_name.as_deref().filter(|n| *n != REQUIRED_FONT) {
                    issues.name_issues.push(format!(
                        "Paragraph {}: Font '{}' instead of '{}'. Text: \"{}\"",
                        number,
                        name,
                        REQUIRED_FONT,
                        snippet(&paragraph.text)
                    ));
                    name_found = true;
                }
            }

            if !size_found {
                if let Some(size) = run.font_size_pt.filter(|s| *s != BODY_FONT_SIZE_PT) {
                    issues.size_issues.push(format!(
                        "Paragraph {}: Font size {}pt instead of 12pt. Text: \"{}\"",
                        number,
                        format_points(size),
                        snippet(&paragraph.text)
                    ));
                    size_found = true;
                }
            }

            if name_found && size_found {
                break;
            }
        }
    }

    issues
}

/// First run per table whose size is not 9pt, one issue per table at most
pub fn check_table_fonts(document: &Document) -> Vec<String> {
    document
        .tables
        .iter()
        .enumerate()
        .filter_map(|(index, table)| {
            table
                .runs()
                .find_map(|run| run.font_size_pt.filter(|s| *s != TABLE_FONT_SIZE_PT))
                .map(|size| {
                    format!(
                        "Table {}: Found font size {}pt instead of 9pt",
                        index + 1,
                        format_points(size)
                    )
                })
        })
        .collect()
}

/// Point sizes always carry a decimal: `11.0`, `10.5`
pub(crate) fn format_points(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{:.1}", size)
    } else {
        size.to_string()
    }
}

fn snippet(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
