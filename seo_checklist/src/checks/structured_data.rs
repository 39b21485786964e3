use super::{CheckContext, CheckKind};
use crate::error::CheckResult;
use crate::page::Page;
use crate::report::{Cell, Verdict};
use indexmap::IndexSet;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use serde_json::Value;

lazy_static! {
    static ref JSON_LD: Selector = Selector::parse(r#"script[type="application/ld+json" i]"#)
        .expect("json-ld selector");
    static ref MICRODATA: Selector = Selector::parse("[itemtype]").expect("itemtype selector");
    static ref RDFA: Selector = Selector::parse("[typeof]").expect("typeof selector");
}

/// Push the `@type` of a JSON-LD object. Array valued types add every entry.
fn push_json_ld_type(item: &Value, types: &mut IndexSet<String>) {
    match item.get("@type") {
        Some(Value::String(t)) => {
            types.insert(t.clone());
        }
        Some(Value::Array(list)) => {
            types.extend(list.iter().filter_map(|t| t.as_str()).map(String::from));
        }
        _ => (),
    }
}

/// Types declared in one JSON-LD block. Malformed blocks declare nothing.
pub fn json_ld_types(block: &str, types: &mut IndexSet<String>) {
    match serde_json::from_str::<Value>(block) {
        Ok(Value::Array(items)) => {
            for item in &items {
                push_json_ld_type(item, types);
            }
        }
        Ok(item) => push_json_ld_type(&item, types),
        Err(e) => log::debug!("skipping malformed JSON-LD block: {e}"),
    }
}

/// Every schema type declared through JSON-LD, Microdata and RDFa, in discovery order without duplicates.
pub fn schema_types(html: &Html) -> IndexSet<String> {
    let mut types = IndexSet::new();

    for script in html.select(&JSON_LD) {
        let block: String = script.text().collect();
        json_ld_types(&block, &mut types);
    }

    for element in html.select(&MICRODATA) {
        if let Some(t) = element.value().attr("itemtype") {
            types.insert(t.to_string());
        }
    }

    for element in html.select(&RDFA) {
        if let Some(t) = element.value().attr("typeof") {
            types.insert(t.to_string());
        }
    }

    types
}

/// The verdict for the discovered types.
pub fn evaluate(url: &str, types: &IndexSet<String>) -> Cell {
    let column = CheckKind::StructuredData.column();

    if types.is_empty() {
        Cell::new(
            column,
            Verdict::Fail,
            format!(
                "The URL {url} does not have any identifiable schema.org structures {}",
                Verdict::Fail.glyph()
            ),
        )
    } else {
        let listed = types.iter().map(String::as_str).collect::<Vec<_>>().join(", ");

        Cell::new(
            column,
            Verdict::Pass,
            format!(
                "The URL {url} has schema.org structure(s): {listed} {}",
                Verdict::Pass.glyph()
            ),
        )
    }
}

/// The verdict for a page that did not answer with 200.
pub fn evaluate_status(url: &str, status: StatusCode) -> Cell {
    Cell::new(
        CheckKind::StructuredData.column(),
        Verdict::Fail,
        format!(
            "The URL {url} could not be accessed. The page has a status code of {} {}",
            status.as_u16(),
            Verdict::Fail.glyph()
        ),
    )
}

/// Fetch the page and collect its structured data types.
pub async fn run(ctx: &CheckContext<'_>) -> CheckResult<Vec<Cell>> {
    let page = Page::new(ctx.url, ctx.client).await?;

    let cell = if page.is_ok() {
        evaluate(ctx.url, &schema_types(&page.parse_html()))
    } else {
        evaluate_status(ctx.url, page.status_code)
    };

    Ok(vec![cell])
}
