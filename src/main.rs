use anyhow::{Context, Result};
use std::{
    env,
    io::{self, Write},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wikitable::{
    cli::{Args, USAGE},
    config::Config,
    page::{self, Page},
    session::{prompt, Session},
};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // ─── 2) arguments & config ───────────────────────────────────────
    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        eprintln!("{}", USAGE);
        return Ok(());
    }
    let config = Config::from_env();
    info!(out_root = %config.out_root.display(), "startup");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    // ─── 3) fetch the page ───────────────────────────────────────────
    let url = match args.url {
        Some(url) => url,
        None => prompt(&mut input, &mut out, "Enter a wikipedia page url: ")?
            .context("no page url given")?,
    };
    let client = page::client()?;
    let page = Page::fetch(&client, &url)?;

    // ─── 4) export tables ────────────────────────────────────────────
    let session = Session::open(&page, &config)?;
    if args.tables.is_empty() {
        session.interactive(&mut input, &mut out)?;
    } else {
        session.batch(&args.tables, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
