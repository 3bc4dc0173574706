//! Exchange Layer
//!
//! Maps the collection to and from plain tables. The spreadsheet format itself
//! lives behind [`WorkbookCodec`], so the domain never sees a workbook type.

mod xlsx;

use std::collections::HashSet;

use log::{info, warn};

use crate::domain::{Collection, ListItem};
use crate::error::ExchangeError;

pub use xlsx::XlsxCodec;

pub const HEADER_VALUE: &str = "Value";
pub const HEADER_DESCRIPTION: &str = "Description";

/// Longest sheet name spreadsheet applications accept
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_SHEET_CHARS: [char; 7] = [':', '\\', '/', '?', '*', '[', ']'];

/// One sheet as rows of cell text; row 0 is the header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetTable {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// Serializes tables into a workbook file and back
pub trait WorkbookCodec {
    fn encode(&self, sheets: &[SheetTable]) -> Result<Vec<u8>, ExchangeError>;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<SheetTable>, ExchangeError>;
}

/// Strip characters sheet names may not contain and cut to the length limit.
///
/// Apostrophes are trimmed after the cut; a name may not start or end with one.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cut: String = name
        .chars()
        .filter(|c| !FORBIDDEN_SHEET_CHARS.contains(c))
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    cut.trim_matches('\'').to_string()
}

/// Sanitized names made unique ignoring case, as workbooks require
fn unique_sheet_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for (index, name) in names.enumerate() {
        let mut base = sanitize_sheet_name(name);
        if base.trim().is_empty() {
            base = format!("Sheet{}", index + 1);
        }

        let mut candidate = base.clone();
        let mut n = 2;
        while seen.contains(&candidate.to_lowercase()) {
            let suffix = format!(" ({n})");
            let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
            candidate = format!("{}{}", base.chars().take(keep).collect::<String>(), suffix);
            n += 1;
        }

        seen.insert(candidate.to_lowercase());
        result.push(candidate);
    }
    result
}

/// One table per list: header row, then value/description per item
pub fn collection_to_tables(collection: &Collection) -> Vec<SheetTable> {
    let names = unique_sheet_names(collection.lists().iter().map(|l| l.name()));

    collection
        .lists()
        .iter()
        .zip(names)
        .map(|(list, name)| {
            let mut rows = Vec::with_capacity(list.items().len() + 1);
            rows.push(vec![HEADER_VALUE.to_string(), HEADER_DESCRIPTION.to_string()]);
            rows.extend(
                list.items()
                    .iter()
                    .map(|item| vec![item.value.clone(), item.description.clone()]),
            );
            SheetTable { name, rows }
        })
        .collect()
}

/// Turn a table back into list items.
///
/// Skips the header and blank-value rows; later case-insensitive duplicates
/// are dropped so the list stays valid.
pub fn table_to_items(table: &SheetTable) -> Vec<ListItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut items = Vec::new();

    for (index, row) in table.rows.iter().enumerate().skip(1) {
        let value = row.first().map(|c| c.trim()).unwrap_or_default();
        if value.is_empty() {
            continue;
        }
        if !seen.insert(value.to_lowercase()) {
            warn!("sheet '{}' row {}: duplicate value '{}' skipped", table.name, index + 1, value);
            continue;
        }
        let description = row.get(1).map(|c| c.trim()).unwrap_or_default();
        items.push(ListItem::new(value, description));
    }
    items
}

/// Encode every list into one workbook
pub fn export_collection<C: WorkbookCodec>(collection: &Collection, codec: &C) -> Result<Vec<u8>, ExchangeError> {
    if collection.is_empty() {
        return Err(ExchangeError::NothingToExport);
    }
    let tables = collection_to_tables(collection);
    let bytes = codec.encode(&tables)?;
    info!("exported {} lists ({} bytes)", tables.len(), bytes.len());
    Ok(bytes)
}

/// Replace the collection with the lists stored in `bytes`.
///
/// Decoding finishes before anything is touched, so on error the collection
/// is unchanged. Returns the number of imported lists.
pub fn import_collection<C: WorkbookCodec>(
    collection: &mut Collection,
    codec: &C,
    bytes: &[u8],
) -> Result<usize, ExchangeError> {
    let tables = codec.decode(bytes)?;
    if tables.is_empty() {
        return Err(ExchangeError::EmptyWorkbook);
    }

    let lists: Vec<(String, Vec<ListItem>)> = tables
        .iter()
        .map(|table| (table.name.clone(), table_to_items(table)))
        .collect();
    let count = lists.len();
    collection.replace_all(lists);
    info!("imported {} lists", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Keeps tables in memory; decode hands back whatever was encoded last
    #[derive(Default)]
    struct MemoryCodec {
        stored: RefCell<Vec<SheetTable>>,
        fail_decode: bool,
    }

    impl WorkbookCodec for MemoryCodec {
        fn encode(&self, sheets: &[SheetTable]) -> Result<Vec<u8>, ExchangeError> {
            *self.stored.borrow_mut() = sheets.to_vec();
            Ok(vec![sheets.len() as u8])
        }

        fn decode(&self, _bytes: &[u8]) -> Result<Vec<SheetTable>, ExchangeError> {
            if self.fail_decode {
                return Err(ExchangeError::OpenWorkbook("corrupt".to_string()));
            }
            Ok(self.stored.borrow().clone())
        }
    }

    fn table(name: &str, rows: &[&[&str]]) -> SheetTable {
        SheetTable {
            name: name.to_string(),
            rows: rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
        }
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("a:b/c\\d?e*f[g]h"), "abcdefgh");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40)).len(), 31);
        assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
        assert_eq!(sanitize_sheet_name("Ąę"), "Ąę");
    }

    #[test]
    fn test_sanitize_sheet_name_never_ends_with_apostrophe_after_cut() {
        let name = format!("{}'b", "a".repeat(30));
        let sheet = sanitize_sheet_name(&name);
        assert_eq!(sheet, "a".repeat(30));
        assert!(!sheet.ends_with('\''));

        let name = format!("{}'''", "c".repeat(29));
        assert_eq!(sanitize_sheet_name(&name), "c".repeat(29));
    }

    #[test]
    fn test_unique_sheet_names() {
        let long = "y".repeat(31);
        let names = unique_sheet_names(["Data", "data", "[]", "Data", long.as_str(), long.as_str()].into_iter());
        assert_eq!(names[0], "Data");
        assert_eq!(names[1], "data (2)");
        assert_eq!(names[2], "Sheet3");
        assert_eq!(names[3], "Data (3)");
        assert_eq!(names[4], long);
        assert_eq!(names[5].chars().count(), 31);
        assert!(names[5].ends_with(" (2)"));
    }

    #[test]
    fn test_table_to_items() {
        let t = table(
            "Colors",
            &[
                &["Value", "Description"],
                &["Red", "warm"],
                &["  "],
                &["Blue"],
                &["red", "again"],
                &[],
            ],
        );
        let items = table_to_items(&t);
        assert_eq!(items, vec![ListItem::new("Red", "warm"), ListItem::new("Blue", "")]);
    }

    #[test]
    fn test_export_import_through_codec() {
        let mut source = Collection::default();
        let a = source.add_list();
        let b = source.add_list();
        source.with_list_mut(a, |l| {
            l.set_draft_value("AB");
            l.set_draft_description("first");
            l.submit_draft().unwrap();
        });
        source.with_list_mut(b, |l| {
            l.set_draft_value("01");
            l.submit_draft().unwrap();
        });

        let codec = MemoryCodec::default();
        let bytes = export_collection(&source, &codec).unwrap();

        let mut target = Collection::default();
        let count = import_collection(&mut target, &codec, &bytes).unwrap();
        assert_eq!(count, 2);

        let got: Vec<(&str, &[ListItem])> = target.lists().iter().map(|l| (l.name(), l.items())).collect();
        let want: Vec<(&str, &[ListItem])> = source.lists().iter().map(|l| (l.name(), l.items())).collect();
        assert_eq!(got, want);
        assert_eq!(target.lists()[0].char_limit(), 2);
    }

    #[test]
    fn test_failed_import_leaves_collection() {
        let mut collection = Collection::with_sample(&crate::Settings::default());
        let before = collection.clone();
        let codec = MemoryCodec {
            fail_decode: true,
            ..Default::default()
        };
        assert!(import_collection(&mut collection, &codec, b"junk").is_err());
        assert_eq!(collection, before);
    }

    #[test]
    fn test_export_empty_collection_is_error() {
        let codec = MemoryCodec::default();
        let result = export_collection(&Collection::default(), &codec);
        assert!(matches!(result, Err(ExchangeError::NothingToExport)));
    }
}
