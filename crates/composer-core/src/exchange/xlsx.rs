//! XLSX codec.
//!
//! Writes with `rust_xlsxwriter`, reads with `calamine` (which also accepts
//! legacy `.xls`). Everything happens in memory so the same code runs in the
//! browser.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::{Format, Workbook};

use super::{SheetTable, WorkbookCodec};
use crate::error::ExchangeError;

const VALUE_COLUMN_WIDTH: f64 = 24.0;
const DESCRIPTION_COLUMN_WIDTH: f64 = 48.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxCodec;

impl WorkbookCodec for XlsxCodec {
    fn encode(&self, sheets: &[SheetTable]) -> Result<Vec<u8>, ExchangeError> {
        if sheets.is_empty() {
            return Err(ExchangeError::NothingToExport);
        }

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;
            worksheet.set_column_width(0, VALUE_COLUMN_WIDTH)?;
            worksheet.set_column_width(1, DESCRIPTION_COLUMN_WIDTH)?;

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let excel_row = row_idx as u32;
                for (col, value) in row.iter().enumerate() {
                    // Blank cells stay missing; import reads them back as ""
                    if value.is_empty() {
                        continue;
                    }
                    if row_idx == 0 {
                        worksheet.write_string_with_format(excel_row, col as u16, value, &header_format)?;
                    } else {
                        worksheet.write_string(excel_row, col as u16, value)?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<SheetTable>, ExchangeError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| ExchangeError::OpenWorkbook(e.to_string()))?;

        let names = workbook.sheet_names().to_owned();
        let mut sheets = Vec::with_capacity(names.len());

        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| ExchangeError::ReadSheet {
                    sheet: name.clone(),
                    message: e.to_string(),
                })?;

            // The range starts at the first used cell; pad so column A is index 0
            let first_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);
            let rows = range
                .rows()
                .map(|row| {
                    let mut cells = vec![String::new(); first_col];
                    cells.extend(row.iter().map(cell_text));
                    cells
                })
                .collect();

            sheets.push(SheetTable { name, rows });
        }

        Ok(sheets)
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, rows: &[&[&str]]) -> SheetTable {
        SheetTable {
            name: name.to_string(),
            rows: rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
        }
    }

    #[test]
    fn encode_then_decode_keeps_sheet_order_and_cells() {
        let sheets = vec![
            table("Zones", &[&["Value", "Description"], &["Z1", "North"], &["Z2", ""]]),
            table("Levels", &[&["Value", "Description"], &["01", "Ground"]]),
        ];

        let bytes = XlsxCodec.encode(&sheets).unwrap();
        assert!(!bytes.is_empty());

        let decoded = XlsxCodec.decode(&bytes).unwrap();
        let names: Vec<&str> = decoded.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zones", "Levels"]);

        assert_eq!(decoded[0].rows[1], vec!["Z1", "North"]);
        assert_eq!(decoded[0].rows[2][0], "Z2");
        assert_eq!(decoded[1].rows[1], vec!["01", "Ground"]);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = XlsxCodec.decode(b"definitely not a workbook").unwrap_err();
        assert!(matches!(err, ExchangeError::OpenWorkbook(_)));
    }

    #[test]
    fn encode_rejects_empty_workbook() {
        assert!(matches!(XlsxCodec.encode(&[]), Err(ExchangeError::NothingToExport)));
    }

    #[test]
    fn numeric_cells_are_read_as_text() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Numbers").unwrap();
        sheet.write_string(0, 0, "Value").unwrap();
        sheet.write_number(1, 0, 42).unwrap();
        sheet.write_number(2, 0, 2.5).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let decoded = XlsxCodec.decode(&bytes).unwrap();
        assert_eq!(decoded[0].rows[1][0], "42");
        assert_eq!(decoded[0].rows[2][0], "2.5");
    }
}
