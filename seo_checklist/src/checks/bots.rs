use super::CheckContext;
use crate::error::CheckResult;
use crate::page::Page;
use crate::report::{Cell, Verdict};
use reqwest::StatusCode;

/// The crawlers checked, as (column label, user agent).
pub const CRAWLERS: [(&str, &str); 7] = [
    (
        "GoogleBot",
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    ),
    (
        "Bingbot",
        "Mozilla/5.0 (compatible; Bingbot/2.0; +http://www.bing.com/bingbot.htm)",
    ),
    (
        "Yahoo Slurp",
        "Mozilla/5.0 (compatible; Yahoo! Slurp; http://help.yahoo.com/help/us/ysearch/slurp)",
    ),
    (
        "DuckDuckGo",
        "DuckDuckBot/1.0; (+http://duckduckgo.com/duckduckbot.html)",
    ),
    (
        "Baidu",
        "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)",
    ),
    (
        "Yandex",
        "Mozilla/5.0 (compatible; YandexBot/3.0; +http://yandex.com/bots)",
    ),
    (
        "Applebot",
        "Mozilla/5.0 (Device; OS_version) AppleWebKit/WebKit_version (KHTML, like Gecko)",
    ),
];

/// The verdict for the status a crawler received.
pub fn evaluate(url: &str, crawler: &str, status: StatusCode) -> Cell {
    let code = status.as_u16();

    if status == StatusCode::OK {
        Cell::new(
            crawler,
            Verdict::Pass,
            format!(
                "Response {code}. {url} is accessible for {crawler} {}",
                Verdict::Pass.glyph()
            ),
        )
    } else {
        Cell::new(
            crawler,
            Verdict::Fail,
            format!(
                "Response {code}. {url} is not accessible for {crawler} {}",
                Verdict::Fail.glyph()
            ),
        )
    }
}

/// Request the page once per crawler user agent. Transport failures are recorded on the crawler's own column.
pub async fn run(ctx: &CheckContext<'_>) -> CheckResult<Vec<Cell>> {
    let mut cells = Vec::with_capacity(CRAWLERS.len());

    for (crawler, user_agent) in CRAWLERS {
        let cell = match Page::new_with_user_agent(ctx.url, ctx.client, user_agent).await {
            Ok(page) => evaluate(ctx.url, crawler, page.status_code),
            Err(e) => {
                log::warn!("{crawler} request to {} failed: {e}", ctx.url);
                Cell::error(
                    crawler,
                    format!("Bot Accessibility failed for {crawler} with error: {e} 🚫"),
                )
            }
        };

        cells.push(cell);
    }

    Ok(cells)
}
