//! End-to-end pipeline tests over the date-picker shape: a text input
//! owning a grid of rows and gridcells.

use axt_dom::{DomTree, ElementDecl, Snapshot};
use axt_roles::Role;
use axt_tree::{FindingCode, ValidationConfig, evaluate};

fn el(id: &str, tag: &str) -> ElementDecl {
    ElementDecl::new(id, tag)
}

/// The canonical date-picker markup: an input owning a table (grid)
/// whose tr/td carry row/gridcell roles.
fn date_picker() -> Snapshot {
    let mut root = el("root", "div");
    root.children = Some(vec!["field".into(), "cal".into()]);

    let mut field = el("field", "input");
    field.attrs.insert("aria-owns".into(), "cal".into());
    field.attrs.insert("aria-label".into(), "Date".into());

    let mut cal = el("cal", "table");
    cal.role = Some("grid".into());
    cal.children = Some(vec!["week1".into(), "week2".into()]);

    let mut elements = vec![root, field, cal];
    for week in ["week1", "week2"] {
        let mut row = el(week, "tr");
        row.role = Some("row".into());
        let day_ids: Vec<String> = (0..3).map(|d| format!("{week}-day{d}")).collect();
        row.children = Some(day_ids.clone());
        elements.push(row);
        for day in day_ids {
            let mut cell = el(&day, "td");
            cell.role = Some("gridcell".into());
            elements.push(cell);
        }
    }
    Snapshot { elements }
}

#[test]
fn test_date_picker_tree_shape() {
    let dom = DomTree::build(&date_picker()).unwrap();
    let eval = evaluate(&dom, &ValidationConfig::default());

    // the wrapping div is transparent, so the input is the root
    assert_eq!(eval.tree.roots.len(), 1);
    let input = &eval.tree.roots[0];
    assert_eq!(input.id, "field");
    assert_eq!(input.role, Role::TextBox);
    assert_eq!(input.name.as_deref(), Some("Date"));

    // the owned calendar is the input's single child, not the div's
    assert_eq!(input.children.len(), 1);
    let grid = &input.children[0];
    assert_eq!(grid.id, "cal");
    assert_eq!(grid.role, Role::Grid);

    assert_eq!(grid.children.len(), 2);
    for row in &grid.children {
        assert_eq!(row.role, Role::Row);
        assert_eq!(row.children.len(), 3);
        for cell in &row.children {
            assert_eq!(cell.role, Role::GridCell);
        }
    }
}

#[test]
fn test_date_picker_validates_clean() {
    let dom = DomTree::build(&date_picker()).unwrap();
    let eval = evaluate(&dom, &ValidationConfig::default());
    assert!(
        eval.findings
            .iter()
            .all(|f| f.code != FindingCode::MissingRequiredDescendant),
        "unexpected findings: {:?}",
        eval.findings
    );
    assert!(!eval.has_errors());
}

#[test]
fn test_grid_missing_row_level() {
    // replace the tr rows with generic wrappers: gridcells remain but
    // the required row level is gone
    let mut snapshot = date_picker();
    for element in &mut snapshot.elements {
        if element.tag == "tr" {
            element.tag = "div".into();
            element.role = None;
        }
    }
    let dom = DomTree::build(&snapshot).unwrap();
    let eval = evaluate(&dom, &ValidationConfig::default());

    let missing: Vec<_> = eval
        .findings
        .iter()
        .filter(|f| f.code == FindingCode::MissingRequiredDescendant)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].nodes, ["cal"]);

    // the generic wrappers splice their cells straight into the grid
    let grid = eval.tree.find("cal").unwrap();
    assert_eq!(grid.children.len(), 6);
    assert!(grid.children.iter().all(|c| c.role == Role::GridCell));
}

#[test]
fn test_every_node_appears_exactly_once() {
    let snapshot = date_picker();
    let dom = DomTree::build(&snapshot).unwrap();
    let eval = evaluate(&dom, &ValidationConfig::default());

    let mut seen: Vec<&str> = eval.tree.iter().map(|n| n.id.as_str()).collect();
    seen.extend(eval.tree.elided.keys().map(String::as_str));
    seen.sort_unstable();
    let mut expected: Vec<&str> = snapshot.elements.iter().map(|e| e.id.as_str()).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn test_pipeline_is_idempotent() {
    let dom = DomTree::build(&date_picker()).unwrap();
    let first = serde_json::to_string(&evaluate(&dom, &ValidationConfig::default())).unwrap();
    let second = serde_json::to_string(&evaluate(&dom, &ValidationConfig::default())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_html_ingest_matches_snapshot() {
    // same widget as date_picker(), written as markup; the parser wraps
    // it in html/head/body and inserts a tbody, which is neutralized
    // with an explicit presentation role
    let mut rows = String::new();
    for week in ["week1", "week2"] {
        rows.push_str(&format!("<tr id=\"{week}\" role=\"row\">"));
        for d in 0..3 {
            rows.push_str(&format!("<td id=\"{week}-day{d}\" role=\"gridcell\"></td>"));
        }
        rows.push_str("</tr>");
    }
    let html = format!(
        r#"<div id="root">
            <input id="field" aria-owns="cal" aria-label="Date">
            <table id="cal" role="grid"><tbody role="presentation">{rows}</tbody></table>
        </div>"#
    );

    let from_html = axt_html::parse_snapshot(&html).unwrap();
    let html_eval = evaluate(
        &DomTree::build(&from_html).unwrap(),
        &ValidationConfig::default(),
    );
    let json_eval = evaluate(
        &DomTree::build(&date_picker()).unwrap(),
        &ValidationConfig::default(),
    );

    // the html element exposes a document root; below it the trees match
    assert_eq!(html_eval.tree.roots.len(), 1);
    assert_eq!(html_eval.tree.roots[0].role, Role::Document);
    assert_eq!(
        serde_json::to_value(&html_eval.tree.roots[0].children).unwrap(),
        serde_json::to_value(&json_eval.tree.roots).unwrap()
    );
}

#[test]
fn test_selection_convention() {
    let mut snapshot = date_picker();
    for element in &mut snapshot.elements {
        if element.id.starts_with("week1-") {
            element.attrs.insert("aria-selected".into(), "true".into());
        }
    }
    let dom = DomTree::build(&snapshot).unwrap();
    let eval = evaluate(&dom, &ValidationConfig::default());
    let multi: Vec<_> = eval
        .findings
        .iter()
        .filter(|f| f.code == FindingCode::MultipleSelected)
        .collect();
    assert_eq!(multi.len(), 1);
    assert_eq!(multi[0].nodes[0], "week1");
}
