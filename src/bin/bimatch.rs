//! Command line front end: reads an instance file, computes a maximum matching and prints it.

use std::{
    io::{BufWriter, stdout},
    path::PathBuf,
};

use anyhow::Context;
use bimatch::{
    algo::{Dinic, LevelEdges, ResidualNetwork},
    instance::BipartiteInstance,
    io::{InstanceReader, MatchingWriter},
};
use clap::{ArgAction, Parser};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "bimatch")]
#[command(about = "Computes a maximum bipartite matching with Dinic's algorithm")]
struct Args {
    /// Instance file
    #[arg(default_value = "program3data.txt")]
    input: PathBuf,

    /// Write the matching to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Level graph policy: tree, layered
    #[arg(long, default_value = "tree")]
    level_edges: LevelEdges,

    /// Reject inputs with fewer edges than announced
    #[arg(long)]
    strict: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let instance: BipartiteInstance = InstanceReader::new()
        .lenient_edges(!args.strict)
        .try_read_instance_file(&args.input)
        .with_context(|| format!("failed to read instance {}", args.input.display()))?;
    info!(
        "read {} items and {} edges from {}",
        instance.number_of_items(),
        instance.number_of_edges(),
        args.input.display()
    );

    let mut dinic =
        Dinic::new(ResidualNetwork::from_instance(&instance)).level_edges(args.level_edges);
    let augmentations = dinic.num_augmentations();
    info!(
        "{augmentations} augmenting paths in {} phases ({} dead ends)",
        dinic.phases(),
        dinic.dead_ends()
    );
    let network = dinic.into_network();

    let writer = MatchingWriter::new();
    match &args.output {
        Some(path) => writer
            .try_write_matching_file(&network, path)
            .with_context(|| format!("failed to write matching to {}", path.display()))?,
        None => writer
            .try_write_matching(&network, BufWriter::new(stdout().lock()))
            .context("failed to write matching")?,
    }

    Ok(())
}
