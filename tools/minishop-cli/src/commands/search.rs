//! Catalog name search.

use anyhow::Result;
use minishop_sdk::Notice;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let notice = search(&args.query, ctx)?;

    if !no_hits(&notice) || ctx.output.is_json() {
        ctx.output.notice(&notice);
    } else {
        ctx.output.info(&format!("No products match \"{}\"", args.query));
    }
    Ok(())
}

fn search(query: &str, ctx: &Context) -> Result<Notice> {
    let catalog = ctx.config.build_catalog()?;
    Ok(Notice::search(query, &catalog.search_by_name(query)))
}

fn no_hits(notice: &Notice) -> bool {
    matches!(notice, Notice::SearchResults { hits, .. } if hits.is_empty())
}
