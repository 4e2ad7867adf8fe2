//! Probes every catalog service endpoint once and reports whether the
//! remote answered or the local substitute stood in. Handy for checking
//! a deployment without starting the full TUI.

use color_eyre::Result;
use xenodex_tui::config;
use xenodex_tui::data::catalog;
use xenodex_tui::data::client::ApiClient;
use xenodex_tui::domain::{ClusterAlgorithm, Feature, Metric, ReduceMethod};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let api_url = config::init_app_config();
    println!("Probing catalog service at {api_url}");

    let client = ApiClient::new(api_url);
    let bundled = catalog::catalog().len();

    match client.list_aliens().await {
        Ok(aliens) if aliens.len() == bundled && aliens == catalog::catalog() => {
            println!("GET /aliens           -> {} subjects (bundled fallback)", aliens.len());
        }
        Ok(aliens) => {
            println!("GET /aliens           -> {} subjects", aliens.len());
        }
        Err(e) => println!("GET /aliens           -> error: {e}"),
    }

    match client.alien_detail("1").await {
        Ok(detail) => println!(
            "GET /aliens/1         -> {} ({} powers)",
            detail.name,
            detail.super_powers.len()
        ),
        Err(e) => println!("GET /aliens/1         -> error: {e}"),
    }

    match client.similarity("1", Metric::Cosine).await {
        Ok(data) => println!(
            "GET /similarity/1     -> {} similar, opposite: {}",
            data.similar.len(),
            data.opposite
                .map_or_else(|| "(none)".to_string(), |result| result.alien.name)
        ),
        Err(e) => println!("GET /similarity/1     -> error: {e}"),
    }

    match client.cluster(ClusterAlgorithm::KMeans, 3, &Feature::ALL).await {
        Ok(groups) => {
            let sizes: Vec<usize> = groups.iter().map(|group| group.aliens.len()).collect();
            println!("POST /cluster (k=3)   -> group sizes {sizes:?}");
        }
        Err(e) => println!("POST /cluster (k=3)   -> error: {e}"),
    }

    match client.reduce(ReduceMethod::Pca, &Feature::ALL).await {
        Ok(points) => println!("POST /reduce (pca)    -> {} points", points.len()),
        Err(e) => println!("POST /reduce (pca)    -> error: {e}"),
    }

    Ok(())
}
