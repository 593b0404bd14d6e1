use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use tempfile::NamedTempFile;
use tracing::info;

use super::rows::{Cell, Sheet};

/// The two spreadsheet exports. They share the row shape and differ in
/// output file and sheet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Decks saved during the current session.
    Session,
    /// Every deck in the store.
    History,
}

impl ExportKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportKind::Session => "bbx-mazos.xlsx",
            ExportKind::History => "bbx-historial.xlsx",
        }
    }

    pub fn sheet_name(self) -> &'static str {
        match self {
            ExportKind::Session => "Mazos BBX",
            ExportKind::History => "Historial BBX",
        }
    }
}

/// Render `sheet` into xlsx bytes with a single worksheet named `sheet_name`.
pub fn workbook_bytes(sheet: &Sheet, sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .with_context(|| format!("Invalid sheet name '{}'", sheet_name))?;

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    for (row_index, row) in sheet.rows.iter().enumerate() {
        let row_num = (row_index + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col as u16, text)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row_num, col as u16, *n)?;
                }
                Cell::Blank => {}
            }
        }
    }

    let bytes = workbook
        .save_to_buffer()
        .context("Failed to serialize workbook")?;
    Ok(bytes)
}

/// Write the export for `kind` into `dir`, replacing any previous file.
///
/// The bytes go to a temporary file in `dir` that is then renamed onto the target.
pub fn write_workbook(sheet: &Sheet, kind: ExportKind, dir: &Path) -> Result<PathBuf> {
    let bytes = workbook_bytes(sheet, kind.sheet_name())?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export dir {:?}", dir))?;
    let target = dir.join(kind.file_name());

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(&bytes)?;
    temp.flush()?;
    temp.persist(&target)
        .with_context(|| format!("Failed to move workbook into place at {:?}", target))?;

    info!(
        "Exported {} deck rows to {:?}",
        sheet.rows.len(),
        target
    );
    Ok(target)
}
