use super::{CheckContext, CheckKind};
use crate::error::{CheckError, CheckResult};
use crate::report::{Cell, Verdict};

/// The verdict for an indexation lookup.
pub fn evaluate(url: &str, indexed: bool) -> Cell {
    let column = CheckKind::Indexation.column();

    if indexed {
        Cell::new(
            column,
            Verdict::Pass,
            format!("{url} is indexed in Google. {}", Verdict::Pass.glyph()),
        )
    } else {
        Cell::new(
            column,
            Verdict::Fail,
            format!("{url} is not indexed in Google. {}", Verdict::Fail.glyph()),
        )
    }
}

/// Ask the configured provider whether the url is indexed.
pub async fn run(ctx: &CheckContext<'_>) -> CheckResult<Vec<Cell>> {
    let provider = ctx
        .indexation
        .ok_or(CheckError::NotConfigured("indexation provider"))?;

    log::debug!("indexation lookup through {}", provider.provider_name());

    let indexed = provider.is_indexed(ctx.client, ctx.url).await?;

    Ok(vec![evaluate(ctx.url, indexed)])
}
