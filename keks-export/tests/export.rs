use keks_core::{BakeSelection, IngredientLine, ShoppingListEntry, Unit, aggregate};
use keks_export::{ExportFormat, FORM_FEED, PageLayout, export_lines, paginate};
use tempfile::TempDir;

fn shopping_list() -> Vec<ShoppingListEntry> {
    let kipferl = vec![
        IngredientLine::new("Mehl", Unit::Gram, 250.0),
        IngredientLine::new("Zucker", Unit::TablespoonSolid, 2.0),
        IngredientLine::new("Milch", Unit::Liter, 1.0),
    ];
    let zopf = vec![
        IngredientLine::new("Mehl", Unit::Kilogram, 0.5),
        IngredientLine::new("Eier", Unit::Count, 3.0),
    ];

    aggregate(&[
        BakeSelection::new(kipferl, 2.0),
        BakeSelection::new(zopf, 1.0),
    ])
}

#[test]
fn test_text_export_of_aggregated_list() {
    let list = shopping_list();
    let lines = list.iter().map(ShoppingListEntry::line);
    let text = paginate("Einkaufsliste", lines, &PageLayout::a4()).render_text();

    insta::assert_snapshot!(text, @r"
    Einkaufsliste
    - 3.0 count Eier
    - 1000.0 gram Mehl
    - 2000.0 milliliter Milch
    - 48.0 gram Zucker
    ");
}

#[test]
fn test_long_list_breaks_onto_second_page() {
    let entries: Vec<ShoppingListEntry> = (1..=40)
        .map(|i| ShoppingListEntry::new(format!("Zutat {:02}", i), i as f64, Unit::Gram))
        .collect();
    let text = paginate(
        "Einkaufsliste",
        entries.iter().map(ShoppingListEntry::line),
        &PageLayout::a4(),
    )
    .render_text();

    let second = text.split(FORM_FEED).nth(1).unwrap();
    insta::assert_snapshot!(second, @r"
    - 37.0 gram Zutat 37
    - 38.0 gram Zutat 38
    - 39.0 gram Zutat 39
    - 40.0 gram Zutat 40
    ");
}

#[test]
fn test_export_follows_file_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("einkauf.json");
    let lines: Vec<String> = shopping_list().iter().map(ShoppingListEntry::line).collect();

    let format = ExportFormat::from_path(&path);
    let doc = export_lines(&path, "Einkaufsliste", lines, format, &PageLayout::a4())
        .unwrap()
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(format, ExportFormat::Json);
    assert_eq!(doc.line_count(), 4);
    assert!(written.contains("\"- 2000.0 milliliter Milch\""));
}

#[test]
fn test_empty_list_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("einkauf.txt");

    let result = export_lines(
        &path,
        "Einkaufsliste",
        aggregate(&[]).iter().map(ShoppingListEntry::line),
        ExportFormat::Text,
        &PageLayout::a4(),
    )
    .unwrap();

    assert!(result.is_none());
    assert!(!path.exists());
}
