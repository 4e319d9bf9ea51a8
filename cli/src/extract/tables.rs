//! Table extraction
//!
//! Each `<table>` becomes a rectangular [`Table`]. Column names come from the
//! first `<thead>` row, else from a leading row made only of `<th>` cells,
//! else they are numbered from "0". Cells spanning several columns repeat
//! their text in each column; short rows are padded with empty cells.
//! `rowspan` is not expanded.

use scraper::{ElementRef, Html};

use crate::error::ExtractError;
use crate::extract::html::{collapse_whitespace, elements_named};
use crate::types::Table;

/// Upper bound for `colspan` so a hostile attribute cannot blow up memory
const MAX_COLSPAN: usize = 1000;

struct RawRow {
    cells: Vec<String>,
    in_thead: bool,
    all_header_cells: bool,
}

/// Every table with at least one row, in document order.
///
/// Fails with [`ExtractError::NoTables`] when the page has none.
pub fn extract_tables(document: &Html) -> Result<Vec<Table>, ExtractError> {
    let tables: Vec<Table> = elements_named(document, "table")
        .filter_map(parse_table)
        .collect();

    if tables.is_empty() {
        return Err(ExtractError::NoTables);
    }
    Ok(tables)
}

fn parse_table(table: ElementRef<'_>) -> Option<Table> {
    let rows = collect_rows(table);
    if rows.is_empty() {
        return None;
    }

    let header_idx = rows
        .iter()
        .position(|r| r.in_thead)
        .or_else(|| rows.first().filter(|r| r.all_header_cells).map(|_| 0));

    let width = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    if width == 0 {
        return None;
    }

    let mut headers = match header_idx {
        Some(i) => rows[i].cells.clone(),
        None => (0..width).map(|i| i.to_string()).collect(),
    };
    headers.resize(width, String::new());

    let body: Vec<Vec<String>> = rows
        .into_iter()
        .enumerate()
        // extra thead rows are dropped
        .filter(|(i, r)| Some(*i) != header_idx && !r.in_thead)
        .map(|(_, r)| {
            let mut cells = r.cells;
            cells.resize(width, String::new());
            cells
        })
        .collect();

    Some(Table {
        headers,
        rows: body,
    })
}

/// Rows that belong to this table, skipping rows of nested tables.
fn collect_rows(table: ElementRef<'_>) -> Vec<RawRow> {
    let mut rows = Vec::new();

    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(parse_row(child, false)),
            section @ ("thead" | "tbody" | "tfoot") => {
                let in_thead = section == "thead";
                for tr in child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr")
                {
                    rows.push(parse_row(tr, in_thead));
                }
            }
            _ => {}
        }
    }

    rows.retain(|r| !r.cells.is_empty());
    rows
}

fn parse_row(tr: ElementRef<'_>, in_thead: bool) -> RawRow {
    let mut cells = Vec::new();
    let mut all_header_cells = true;

    for cell in tr.children().filter_map(ElementRef::wrap) {
        let name = cell.value().name();
        if name != "td" && name != "th" {
            continue;
        }
        all_header_cells &= name == "th";

        let text = collapse_whitespace(&cell.text().collect::<String>());
        let span = cell
            .value()
            .attr("colspan")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .clamp(1, MAX_COLSPAN);

        cells.extend(std::iter::repeat_n(text, span));
    }

    RawRow {
        all_header_cells: all_header_cells && !cells.is_empty(),
        cells,
        in_thead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables_of(html: &str) -> Result<Vec<Table>, ExtractError> {
        extract_tables(&Html::parse_document(html))
    }

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn no_tables_is_reported() {
        assert_eq!(tables_of("<p>nothing here</p>"), Err(ExtractError::NoTables));
    }

    #[test]
    fn empty_tables_are_skipped() {
        assert_eq!(tables_of("<table></table>"), Err(ExtractError::NoTables));
    }

    #[test]
    fn header_row_of_th_cells_names_columns() {
        let tables = tables_of(
            "<table>
               <tr><th>Company</th><th>Country</th></tr>
               <tr><td>Alfreds</td><td>Germany</td></tr>
               <tr><td>Centro</td><td>Mexico</td></tr>
             </table>",
        )
        .unwrap();

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].headers, strings(&["Company", "Country"]));
        assert_eq!(
            tables[0].rows,
            vec![strings(&["Alfreds", "Germany"]), strings(&["Centro", "Mexico"])]
        );
    }

    #[test]
    fn thead_row_wins_over_th_detection() {
        let tables = tables_of(
            "<table>
               <thead><tr><td>A</td><td>B</td></tr></thead>
               <tbody><tr><td>1</td><td>2</td></tr></tbody>
             </table>",
        )
        .unwrap();

        assert_eq!(tables[0].headers, strings(&["A", "B"]));
        assert_eq!(tables[0].rows, vec![strings(&["1", "2"])]);
    }

    #[test]
    fn tables_without_headers_get_numbered_columns() {
        let tables = tables_of("<table><tr><td>x</td><td>y</td></tr></table>").unwrap();
        assert_eq!(tables[0].headers, strings(&["0", "1"]));
        assert_eq!(tables[0].rows, vec![strings(&["x", "y"])]);
    }

    #[test]
    fn colspan_repeats_and_short_rows_are_padded() {
        let tables = tables_of(
            "<table>
               <tr><th>a</th><th>b</th><th>c</th></tr>
               <tr><td colspan=\"2\">wide</td><td>z</td></tr>
               <tr><td>only</td></tr>
             </table>",
        )
        .unwrap();

        assert_eq!(
            tables[0].rows,
            vec![strings(&["wide", "wide", "z"]), strings(&["only", "", ""])]
        );
    }

    #[test]
    fn nested_tables_are_extracted_separately() {
        let tables = tables_of(
            "<table>
               <tr><td>outer<table><tr><td>inner</td></tr></table></td></tr>
             </table>",
        )
        .unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[1].rows, vec![strings(&["inner"])]);
    }

    #[test]
    fn cell_text_whitespace_is_collapsed() {
        let tables = tables_of("<table><tr><td>  a \n  b </td></tr></table>").unwrap();
        assert_eq!(tables[0].rows, vec![strings(&["a b"])]);
    }
}
