//! Pages command - lists every documentation page.

use dtdocs_view::PageId;

use crate::style::table::styled_table;

pub fn run() {
    let rows: Vec<Vec<String>> = PageId::ALL
        .iter()
        .map(|page| {
            vec![
                page.slug().to_string(),
                page.title().to_string(),
                page.section().label().to_string(),
                page.href(),
            ]
        })
        .collect();

    println!(
        "{}",
        styled_table(&["Slug", "Title", "Section", "Path"], &rows)
    );
}
