use super::{CheckContext, CheckKind};
use crate::error::CheckResult;
use crate::page::Page;
use crate::report::{Cell, Verdict};
use scraper::{Html, Selector};

lazy_static! {
    static ref ROBOTS: Selector =
        Selector::parse(r#"meta[name="robots" i]"#).expect("robots selector");
}

/// The content of the first robots meta tag.
pub fn robots_content(html: &Html) -> Option<String> {
    html.select(&ROBOTS)
        .next()
        .map(|m| m.value().attr("content").unwrap_or_default().to_string())
}

/// The verdict for a parsed document.
pub fn evaluate(url: &str, html: &Html) -> Cell {
    let column = CheckKind::RobotsMeta.column();
    let noindex = robots_content(html)
        .map(|content| content.to_ascii_lowercase().contains("noindex"))
        .unwrap_or_default();

    if noindex {
        Cell::new(
            column,
            Verdict::Fail,
            format!(
                "The URL {url} is not indexable as it contains the <meta name='robots' content='noindex'> tag in the header. {}",
                Verdict::Fail.glyph()
            ),
        )
    } else {
        Cell::new(
            column,
            Verdict::Pass,
            format!(
                "The URL {url} does not contain the <meta name='robots' content='noindex'> tag in the header. {}",
                Verdict::Pass.glyph()
            ),
        )
    }
}

/// Fetch the page and inspect its robots meta tag.
pub async fn run(ctx: &CheckContext<'_>) -> CheckResult<Vec<Cell>> {
    let page = Page::new(ctx.url, ctx.client).await?;

    Ok(vec![evaluate(ctx.url, &page.parse_html())])
}
