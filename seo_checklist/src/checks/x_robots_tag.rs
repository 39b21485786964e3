use super::{CheckContext, CheckKind};
use crate::error::CheckResult;
use crate::page::Page;
use crate::report::{Cell, Verdict};

/// The response header carrying crawler directives.
pub const X_ROBOTS_TAG: &str = "x-robots-tag";

/// The header value forbids indexing.
pub fn is_noindex(value: Option<&str>) -> bool {
    match value {
        Some(v) => {
            let v = v.to_ascii_lowercase();
            v.contains("noindex") || v.contains("none")
        }
        None => false,
    }
}

/// The verdict for the header value.
pub fn evaluate(url: &str, value: Option<&str>) -> Cell {
    let column = CheckKind::XRobotsTag.column();

    if is_noindex(value) {
        Cell::new(
            column,
            Verdict::Fail,
            format!(
                "The URL {url} is not indexable. It contains the HTTP response header: X-Robots-Tag: noindex {}",
                Verdict::Fail.glyph()
            ),
        )
    } else {
        Cell::new(
            column,
            Verdict::Pass,
            format!(
                "The URL {url} is indexable. It does not contain the HTTP response header X-Robots-Tag: noindex {}",
                Verdict::Pass.glyph()
            ),
        )
    }
}

/// Fetch the page and inspect the `X-Robots-Tag` header.
pub async fn run(ctx: &CheckContext<'_>) -> CheckResult<Vec<Cell>> {
    let page = Page::new(ctx.url, ctx.client).await?;

    Ok(vec![evaluate(ctx.url, page.header(X_ROBOTS_TAG).as_deref())])
}
