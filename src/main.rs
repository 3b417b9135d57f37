mod base;
mod core;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use base::{NODE_COUNT, SERVER_COUNT};
use chrono::Local;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // where the peer map is written
    #[arg(short, long, default_value = base::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logger();

    let file_name = args.output.display().to_string();
    println!(
        "Generating {} for {} nodes on {} servers.",
        file_name, NODE_COUNT, SERVER_COUNT
    );

    let stdin = std::io::stdin();
    let addresses = core::Prompter::new(stdin.lock(), std::io::stdout()).read_addresses()?;

    let config = core::generate_peers(&addresses);
    config.save(&args.output)?;
    info!("wrote {} peers to {}", config.peers.len(), file_name);

    let mut stdout = std::io::stdout().lock();
    core::write_summary(&mut stdout, &file_name, &config, &addresses)
        .context("print summary")?;

    Ok(())
}

// diagnostics go to stderr so they never mix with the prompts
fn setup_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}
