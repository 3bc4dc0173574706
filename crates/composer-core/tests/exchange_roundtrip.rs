//! Export/import through the real xlsx codec.

use composer_core::{export_collection, import_collection, Collection, ListItem, Settings, XlsxCodec};
use rust_xlsxwriter::Workbook;

fn add_items(collection: &mut Collection, id: u32, items: &[(&str, &str)]) {
    collection.with_list_mut(id, |list| {
        for (value, description) in items {
            list.set_draft_value(*value);
            list.set_draft_description(*description);
            list.submit_draft().expect("add failed");
        }
    });
}

fn snapshot(collection: &Collection) -> Vec<(String, Vec<ListItem>)> {
    collection
        .lists()
        .iter()
        .map(|l| (l.name().to_string(), l.items().to_vec()))
        .collect()
}

#[test]
fn export_then_import_reproduces_lists() {
    let mut source = Collection::new(&Settings::default());
    let building = source.add_list();
    let level = source.add_list();
    let discipline = source.add_list();
    source.rename_list(building, "Building");
    source.rename_list(level, "Level");
    source.rename_list(discipline, "Discipline");

    add_items(&mut source, building, &[("B1", "Main hall"), ("B2", "")]);
    add_items(&mut source, level, &[("00", "Ground floor"), ("01", "First floor"), ("-1", "")]);
    source.reorder(discipline, building);

    let bytes = export_collection(&source, &XlsxCodec).expect("export failed");

    let mut target = Collection::with_sample(&Settings::default());
    let count = import_collection(&mut target, &XlsxCodec, &bytes).expect("import failed");

    assert_eq!(count, 3);
    assert_eq!(snapshot(&target), snapshot(&source));

    let names: Vec<&str> = target.lists().iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["Discipline", "Building", "Level"]);

    let empty = &target.lists()[0];
    assert!(empty.is_empty());
    assert_eq!(empty.char_limit(), 20);
    assert_eq!(empty.selected_item(), "");

    let levels = &target.lists()[2];
    assert_eq!(levels.char_limit(), 2);
    assert_eq!(levels.selected_item(), "00");
}

#[test]
fn sanitized_names_survive_round_trip() {
    let mut source = Collection::default();
    let id = source.add_list();
    source.rename_list(id, "Phase [A/B]: draft?");
    add_items(&mut source, id, &[("P1", "")]);

    let bytes = export_collection(&source, &XlsxCodec).unwrap();
    let mut target = Collection::default();
    import_collection(&mut target, &XlsxCodec, &bytes).unwrap();

    assert_eq!(target.lists()[0].name(), "Phase AB draft");
    assert_eq!(target.lists()[0].items(), source.lists()[0].items());
}

#[test]
fn long_name_with_apostrophe_at_the_cut_still_exports() {
    let mut source = Collection::default();
    let id = source.add_list();
    source.rename_list(id, &format!("{}'b", "a".repeat(30)));
    add_items(&mut source, id, &[("X", "")]);

    let bytes = export_collection(&source, &XlsxCodec).expect("export failed");
    let mut target = Collection::default();
    import_collection(&mut target, &XlsxCodec, &bytes).expect("import failed");

    assert_eq!(target.lists()[0].name(), "a".repeat(30));
}

#[test]
fn import_reads_hand_written_workbook() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Systems").unwrap();
    sheet.write_string(0, 0, "Code").unwrap();
    sheet.write_string(0, 1, "Meaning").unwrap();
    sheet.write_string(1, 0, "HVAC").unwrap();
    sheet.write_string(1, 1, "Heating and ventilation").unwrap();
    sheet.write_string(2, 1, "orphan description").unwrap();
    sheet.write_string(3, 0, "EL").unwrap();
    sheet.write_string(4, 0, "hvac").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let mut collection = Collection::default();
    import_collection(&mut collection, &XlsxCodec, &bytes).unwrap();

    let list = &collection.lists()[0];
    assert_eq!(list.name(), "Systems");
    assert_eq!(
        list.items(),
        &[ListItem::new("HVAC", "Heating and ventilation"), ListItem::new("EL", "")]
    );
    assert_eq!(list.char_limit(), 4);
}

#[test]
fn failed_import_keeps_existing_lists() {
    let mut collection = Collection::with_sample(&Settings::default());
    let before = collection.clone();

    let result = import_collection(&mut collection, &XlsxCodec, b"PK\x03\x04 broken zip");
    assert!(result.is_err());
    assert_eq!(collection, before);
}
