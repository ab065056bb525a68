//! Page layout checks: orientation, margins, header/footer distance

use crate::docx::{Document, Orientation};

/// Margins below this are errors
pub const MARGIN_FLOOR_IN: f64 = 0.75;
/// Margins other than this are warnings
pub const MARGIN_CANONICAL_IN: f64 = 1.0;
/// Header and footer distances below this are errors
pub const HEADER_FOOTER_FLOOR_IN: f64 = 0.38;

pub const NOT_PORTRAIT: &str = "Page orientation is not portrait.";
pub const ORIENTATION_UNKNOWN: &str = "Unable to determine document orientation.";

/// Stops at the first section that is not portrait or whose orientation
/// cannot be read
pub fn check_orientation(document: &Document) -> Vec<String> {
    document
        .sections
        .iter()
        .find_map(|section| match section.orientation {
            Some(Orientation::Portrait) => None,
            Some(Orientation::Landscape) => Some(NOT_PORTRAIT),
            None => Some(ORIENTATION_UNKNOWN),
        })
        .map(|message| vec![message.to_string()])
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarginIssues {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Classify every side of every section: below the floor is an error,
/// otherwise anything but exactly 1in is a warning
pub fn check_margins(document: &Document) -> MarginIssues {
    let mut issues = MarginIssues::default();

    for (index, section) in document.sections.iter().enumerate() {
        for (side, value) in section.margins.sides() {
            let Some(value) = value else {
                continue;
            };

            if value < MARGIN_FLOOR_IN {
                issues.errors.push(format!(
                    "Section {}: {} margin is {:.2}in (less than 0.75in)",
                    index + 1,
                    side.label(),
                    value
                ));
            } else if value != MARGIN_CANONICAL_IN {
                issues.warnings.push(format!(
                    "Section {}: {} margin is {:.2}in (not exactly 1in)",
                    index + 1,
                    side.label(),
                    value
                ));
            }
        }
    }

    issues
}

pub fn check_header_footer_distance(document: &Document) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, section) in document.sections.iter().enumerate() {
        if let Some(header) = section.header_distance_in.filter(|d| *d < HEADER_FOOTER_FLOOR_IN) {
            errors.push(format!(
                "Section {}: Header is {:.2}in from top (must be ≥ 0.38in)",
                index + 1,
                header
            ));
        }
        if let Some(footer) = section.footer_distance_in.filter(|d| *d < HEADER_FOOTER_FLOOR_IN) {
            errors.push(format!(
                "Section {}: Footer is {:.2}in from bottom (must be ≥ 0.38in)",
                index + 1,
                footer
            ));
        }
    }

    errors
}
