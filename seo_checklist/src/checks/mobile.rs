use super::{CheckContext, CheckKind};
use crate::error::CheckResult;
use crate::page::Page;
use crate::report::{Cell, Verdict};
use scraper::{Html, Selector};

lazy_static! {
    static ref VIEWPORT: Selector =
        Selector::parse(r#"meta[name="viewport" i]"#).expect("viewport selector");
}

/// The page declares a viewport meta tag.
pub fn has_viewport(html: &Html) -> bool {
    html.select(&VIEWPORT).next().is_some()
}

/// The verdict for a parsed document.
pub fn evaluate(url: &str, html: &Html) -> Cell {
    let column = CheckKind::MobileFriendly.column();

    if has_viewport(html) {
        Cell::new(
            column,
            Verdict::Pass,
            format!("{url} is mobile-friendly {}", Verdict::Pass.glyph()),
        )
    } else {
        Cell::new(
            column,
            Verdict::Fail,
            format!("{url} is not mobile-friendly {}", Verdict::Fail.glyph()),
        )
    }
}

/// Fetch the page and look for the viewport meta tag.
pub async fn run(ctx: &CheckContext<'_>) -> CheckResult<Vec<Cell>> {
    let page = Page::new(ctx.url, ctx.client).await?;

    Ok(vec![evaluate(ctx.url, &page.parse_html())])
}
