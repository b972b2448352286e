//! Command-line front end: run one or all engines over a base/pattern pair
//! and print the rendered results side by side.

use std::io::Read;

use clap::Parser;
use color_eyre::eyre::Result;

use subfind::prelude::*;
use subfind::render::render;

/// Which engine(s) to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
#[clap(rename_all = "kebab-case")]
enum Algo {
    /// Brute-force window scan
    Naive,
    /// Rolling-hash search (unverified unless --verify)
    RabinKarp,
    /// Prefix-function (KMP) search
    Prefix,
    /// Bad-character-shift (Boyer-Moore) search
    BoyerMoore,
    /// Run every engine over the same input
    #[default]
    All,
}

/// subfind - exact substring search, four algorithms side by side
#[derive(Debug, Parser)]
#[command(name = "subfind", version, about)]
struct Cli {
    /// The pattern to search for
    pattern: String,

    /// The base sequence to search in; read from stdin when omitted
    base: Option<String>,

    /// Engine selection
    #[arg(long, value_enum, default_value_t = Algo::All)]
    algo: Algo,

    /// Confirm rolling-hash hits symbol by symbol (discards hash collisions)
    #[arg(long)]
    verify: bool,

    /// Keep hits in discovery order instead of sorting by accuracy
    #[arg(long)]
    no_sort: bool,

    /// Context symbols shown on each side of a hit
    #[arg(long, default_value_t = 5)]
    indent: usize,
}

fn engines(cli: &Cli, options: &SearchOptions) -> Vec<(&'static str, Box<dyn SearchEngine>)> {
    let mut engines: Vec<(&'static str, Box<dyn SearchEngine>)> = Vec::new();
    if matches!(cli.algo, Algo::Naive | Algo::All) {
        engines.push(("Naive", Box::new(NaiveEngine::with_options(options.clone()))));
    }
    if matches!(cli.algo, Algo::RabinKarp | Algo::All) {
        engines.push((
            "Rabin-Karp",
            Box::new(RabinKarpEngine::with_options(options.clone()).verify(cli.verify)),
        ));
    }
    if matches!(cli.algo, Algo::Prefix | Algo::All) {
        engines.push((
            "Knuth-Morris-Pratt",
            Box::new(PrefixEngine::with_options(options.clone())),
        ));
    }
    if matches!(cli.algo, Algo::BoyerMoore | Algo::All) {
        engines.push((
            "Boyer-Moore",
            Box::new(BoyerMooreEngine::with_options(options.clone())),
        ));
    }
    engines
}

fn main() -> Result<()> {
    env_logger::builder().format_timestamp_nanos().init();
    color_eyre::install()?;

    let cli = Cli::parse();

    let base = match &cli.base {
        Some(base) => base.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            // A trailing newline from the shell would shift context windows.
            buf.truncate(buf.trim_end_matches('\n').len());
            buf
        }
    };

    let options = SearchOptionsBuilder::default()
        .sort_by_accuracy(!cli.no_sort)
        .indent(cli.indent)
        .build()?;

    for (name, engine) in engines(&cli, &options) {
        log::debug!("running {engine}");
        let result = engine.search(&base, &cli.pattern)?;
        println!("{name}:\n{}", render(&result));
    }

    Ok(())
}
