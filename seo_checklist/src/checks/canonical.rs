use super::{CheckContext, CheckKind};
use crate::error::CheckResult;
use crate::page::Page;
use crate::report::{Cell, Verdict};
use reqwest::StatusCode;
use scraper::{Html, Selector};

lazy_static! {
    static ref CANONICAL: Selector =
        Selector::parse(r#"link[rel~="canonical" i]"#).expect("canonical selector");
}

/// The href of the first canonical link element.
pub fn canonical_href(html: &Html) -> Option<String> {
    html.select(&CANONICAL)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(|href| href.to_string())
}

/// The verdict for a canonical href. Urls are compared as exact strings.
pub fn evaluate(url: &str, canonical: Option<&str>) -> Cell {
    let column = CheckKind::Canonical.column();

    match canonical {
        Some(canonical) if canonical == url => Cell::new(
            column,
            Verdict::Pass,
            format!(
                "The URL {url} is indexable. The url is self canonicalized. {url} = {canonical} {}",
                Verdict::Pass.glyph()
            ),
        ),
        Some(canonical) => Cell::new(
            column,
            Verdict::Warn,
            format!(
                "The URL {url} is not indexable. The canonical url ( {canonical} ) is different than the page url. {url} ≠ {canonical} {}",
                Verdict::Warn.glyph()
            ),
        ),
        None => Cell::new(
            column,
            Verdict::Fail,
            format!(
                "The URL {url} does not declare a canonical url {}",
                Verdict::Fail.glyph()
            ),
        ),
    }
}

/// The verdict for a page that did not answer with 200.
pub fn evaluate_status(url: &str, status: StatusCode) -> Cell {
    Cell::new(
        CheckKind::Canonical.column(),
        Verdict::Fail,
        format!(
            "The URL {url} is not indexable. The page has a status code of {} {}",
            status.as_u16(),
            Verdict::Fail.glyph()
        ),
    )
}

/// Fetch the page and compare its canonical url with the requested one.
pub async fn run(ctx: &CheckContext<'_>) -> CheckResult<Vec<Cell>> {
    let page = Page::new(ctx.url, ctx.client).await?;

    let cell = if page.is_ok() {
        evaluate(ctx.url, canonical_href(&page.parse_html()).as_deref())
    } else {
        evaluate_status(ctx.url, page.status_code)
    };

    Ok(vec![cell])
}
