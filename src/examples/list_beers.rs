//! List Beers Example
//!
//! Lists the first page of beers from the remote API, then fetches the
//! first one by id with inventory detail.
//!
//! Run with: cargo run --example list_beers

use beerworks_rs::{BeerApi, BeerClient, BeerListParams};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("beerworks_rs=debug")),
        )
        .init();

    let client = BeerClient::new();

    let params = BeerListParams {
        page_number: Some(0),
        page_size: Some(10),
        ..BeerListParams::default()
    };
    let page = client.list_beers(&params).await?;

    println!(
        "Page {} of {} ({} beers total)",
        page.number + 1,
        page.total_pages,
        page.total_elements
    );
    for beer in page.iter() {
        println!("  {} [{}]", beer.beer_name, beer.beer_style);
    }

    // Fetch the first beer again, this time with inventory on hand
    if let Some(id) = page.first().and_then(|beer| beer.id) {
        let beer = client.get_beer_by_id(id, Some(true)).await?;
        println!(
            "\n{}: {} on hand",
            beer.beer_name,
            beer.quantity_on_hand
                .map_or_else(|| "unknown".to_string(), |q| q.to_string())
        );
    }

    Ok(())
}
