//! Spreadsheet export.
//!
//! The collected records are flushed once, at the end of the run, to a
//! single-worksheet `.xlsx` file with a fixed header row.

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::{info, instrument};

use crate::models::ArticleRecord;

/// Spreadsheet column headers, in output order.
pub const HEADERS: [&str; 6] = [
    "title",
    "date",
    "description",
    "picture filename",
    "count of phrases",
    "contains_money",
];

const SHEET_NAME: &str = "news sheet";

/// Write all records to an `.xlsx` workbook at `path`.
///
/// The workbook has one worksheet named `news sheet`: the header row,
/// then one row per record. An article without a downloaded picture gets
/// an empty cell in the filename column.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = records.len()))]
pub fn write_news_sheet(records: &[ArticleRecord], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, record.title.as_str())?;
        worksheet.write_string(row, 1, record.date.as_str())?;
        worksheet.write_string(row, 2, record.description.as_str())?;
        if let Some(filename) = &record.picture_filename {
            worksheet.write_string(row, 3, filename.as_str())?;
        }
        worksheet.write_number(row, 4, record.phrase_count as f64)?;
        worksheet.write_boolean(row, 5, record.contains_money)?;
    }

    workbook.save(path)?;
    info!("Wrote news spreadsheet");
    Ok(())
}
