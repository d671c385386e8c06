//! Fetch-parse-save pipeline for one run.
//!
//! Shops are processed one at a time in directory order. A failed fetch
//! aborts the whole run before anything is written, so the output file is
//! either fully replaced or left untouched.

use std::io::Write;
use std::path::Path;

use leaflets_core::LeafletRecord;
use leaflets_scraper::LeafletClient;

use crate::output::save_leaflets;

/// Discovers every shop and appends its current leaflets to `leaflets`,
/// writing one progress line per shop to `console`.
///
/// Returns the number of shops visited. On error, `leaflets` holds whatever
/// was collected before the failing shop.
pub(crate) async fn collect_leaflets(
    client: &LeafletClient,
    leaflets: &mut Vec<LeafletRecord>,
    console: &mut impl Write,
) -> anyhow::Result<usize> {
    let shops = client.fetch_shops().await?;

    for (name, path) in shops.iter() {
        writeln!(console, "Fetching leaflets for {name}...")?;
        let shop_leaflets = client.fetch_shop_leaflets(name, path).await?;
        leaflets.extend(shop_leaflets);
    }

    Ok(shops.len())
}

/// Runs the full pipeline, writes the result to `output`, and reports
/// progress and the final count on `console`.
///
/// Returns the number of leaflets saved.
pub(crate) async fn run(
    client: &LeafletClient,
    output: &Path,
    console: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut leaflets = Vec::new();
    let shop_count = collect_leaflets(client, &mut leaflets, console).await?;
    tracing::info!(
        shops = shop_count,
        leaflets = leaflets.len(),
        "collection finished"
    );

    save_leaflets(&leaflets, output)?;
    writeln!(
        console,
        "Successfully saved {} leaflets to JSON file.",
        leaflets.len()
    )?;
    Ok(leaflets.len())
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
