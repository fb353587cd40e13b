//! Public camera discovery demo.
//!
//! Lists publicly discoverable cameras whose id starts with a given prefix.
//! Credentials come from `EVERCAM_API_ID` / `EVERCAM_API_KEY`.

// Demo-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use std::env;

use evercam::{Api, PublicCameraFilter};

#[tokio::main]
async fn main() -> evercam::Result<()> {
    // The subscriber is the log sink: without this line every pipeline
    // event is discarded.
    tracing_subscriber::fmt::init();

    let (Ok(api_id), Ok(api_key)) = (env::var("EVERCAM_API_ID"), env::var("EVERCAM_API_KEY"))
    else {
        println!("Set EVERCAM_API_ID and EVERCAM_API_KEY to run this demo.");
        println!();
        println!("    EVERCAM_API_ID=... EVERCAM_API_KEY=... cargo run -p public-cameras-demo dublin");
        return Ok(());
    };

    let prefix = env::args().nth(1).unwrap_or_else(|| "dublin".to_owned());

    let api = Api::builder().api_id(api_id).api_key(api_key).build()?;

    let filter = PublicCameraFilter {
        id_starts_with: Some(prefix.clone()),
        limit: Some(10),
        ..PublicCameraFilter::default()
    };
    let page = api.get_public_cameras(filter, false).await?;

    let cameras = page["cameras"].as_array().cloned().unwrap_or_default();
    println!("{} public cameras starting with '{prefix}':", cameras.len());
    for camera in &cameras {
        println!(
            "  {} - {}",
            camera["id"].as_str().unwrap_or("?"),
            camera["name"].as_str().unwrap_or("unnamed")
        );
    }
    println!("pages: {}", page["pages"]);

    Ok(())
}
