//! Document ingestion — turns an uploaded DOCX into a normalized
//! `VacancyDraft` by scanning two-column tables for known Russian labels.
//!
//! Extraction is lenient by design: the only hard failure is an unreadable
//! container. Missing labels fall back to defaults, and a salary string with
//! no digits simply leaves the salary unset.

mod docx;
pub mod handlers;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Без названия";
pub const DEFAULT_STATUS: &str = "created";

const TITLE_LABEL: &str = "Название";
const STATUS_LABEL: &str = "Статус";
const DESCRIPTION_LABEL: &str = "Обязанности (для публикации)";
const REQUIREMENTS_LABEL: &str = "Требования (для публикации)";

/// Accepted salary source labels, in priority order. The first label present
/// in the document wins; kept as a table so the priority rule stays auditable.
const SALARY_LABELS: [&str; 3] = [
    "Доход (руб/мес)",
    "Оклад макс. (руб/мес)",
    "Оклад мин. (руб/мес)",
];

/// Raised only when the upload is not a readable DOCX container at all.
/// Absence of expected labels is never an error.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("not a valid docx container: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("document payload is unreadable: {0}")]
    Payload(#[from] std::io::Error),

    #[error("malformed document xml: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// A normalized, unpersisted vacancy produced by extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyDraft {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<i64>,
    pub status: String,
}

/// Extracts a `VacancyDraft` from raw DOCX bytes.
///
/// Pure function over its input; a document with zero tables yields a draft
/// with every field at its default.
pub fn extract_vacancy(bytes: &[u8]) -> Result<VacancyDraft, DocumentError> {
    let labels = docx::scan_label_table(bytes)?;

    let salary = SALARY_LABELS
        .iter()
        .find_map(|label| labels.get(*label))
        .and_then(|text| parse_salary(text));

    Ok(VacancyDraft {
        title: labels
            .get(TITLE_LABEL)
            .cloned()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: labels.get(DESCRIPTION_LABEL).cloned().unwrap_or_default(),
        requirements: labels.get(REQUIREMENTS_LABEL).cloned().unwrap_or_default(),
        salary,
        status: labels
            .get(STATUS_LABEL)
            .cloned()
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    })
}

/// Pulls the first maximal run of decimal digits out of a free-text salary
/// string, after discarding all whitespace. "120 000 руб." → 120000;
/// "по договорённости" → None.
fn parse_salary(text: &str) -> Option<i64> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits: String = compact
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
