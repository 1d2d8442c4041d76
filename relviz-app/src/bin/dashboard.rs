//! relviz dashboard runner
//!
//! Replays a scripted sequence of dashboard interactions and writes every
//! returned frame as a PNG. Each step goes through the same session store a
//! live dashboard would use.
//!
//! Usage: `relviz-dashboard script.json [out_dir]`

use log::{info, warn};
use relviz::dashboard::{DashboardResponse, DashboardScript, SessionStore};
use relviz::raster::save_png;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let script_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        eprintln!("Usage: relviz-dashboard <script.json> [out_dir]");
        eprintln!("No script specified, using dashboard.json.");
        PathBuf::from("dashboard.json")
    };
    let out_dir = args.get(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("frames"));

    let script = match DashboardScript::load(&script_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load script from {:?}: {}", script_path, e);
            return Err(e.into());
        }
    };
    fs::create_dir_all(&out_dir)?;

    let mut store = SessionStore::new(script.orbit.clone());
    let mut written = 0usize;

    for (index, step) in script.steps.iter().enumerate() {
        let response = store.handle(step.session, &step.request);
        match &response {
            DashboardResponse::Frame(frame) | DashboardResponse::Cleared(frame) => {
                let path = out_dir.join(format!("s{}_{:04}.png", step.session.0, index));
                save_png(frame, &path)?;
                written += 1;
            }
            DashboardResponse::Idle => {
                warn!("step {}: session {} is stopped, press Start", index, step.session.0);
            }
        }

        if step.end {
            store.end(step.session);
        }
    }

    info!("{} steps, {} frames written to {}", script.steps.len(), written, out_dir.display());
    println!("Wrote {} frames to {}", written, out_dir.display());
    Ok(())
}
