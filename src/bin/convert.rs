//! Converts a Structured Text file through a running st2py server.
//!
//! Usage: `st2py-convert [FILE]`. Reads stdin when no file is given and
//! prints whatever the page's output field holds once the request settles.

use std::io::Read;

use st2py::client::{InputSurface, OutputSurface, Page};
use st2py::config::ClientConfig;
use st2py::errors::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ClientConfig::from_env()?;

    let st_code = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let page = Page::load(reqwest::Client::new(), &config);
    page.st_code.set_value(st_code);

    for task in page.convert_btn.click() {
        if let Err(e) = task.await {
            log::error!("Conversion task failed: {}", e);
        }
    }

    print!("{}", page.converted_code.value());
    Ok(())
}
