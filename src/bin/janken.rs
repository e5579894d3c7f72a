//! Janken Server Binary
//!
//! Serves rock-paper-scissors matches over HTTP.

use clap::Parser;
use janken::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    server::run(Config::parse()).await
}
