//! Orthology and paralogy queries from the command line.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use orthodex::{Error, GeneTree};

#[derive(Parser)]
#[command(
    name = "orthodex",
    version,
    about = "Orthology and paralogy queries over phyloXML gene trees"
)]
struct Cli {
    /// PhyloXML gene tree file.
    tree: PathBuf,

    /// Print the gene tree.
    #[arg(short = 'p', long)]
    print: bool,

    /// List all genes in the gene tree.
    #[arg(short = 'l', long)]
    list: bool,

    /// Build the interval index and save it to this path.
    #[arg(short = 's', long, value_name = "PATH")]
    save_index: Option<PathBuf>,

    /// Load a previously saved interval index.
    #[arg(short = 'i', long, value_name = "PATH")]
    load_index: Option<PathBuf>,

    /// List all orthologs of a gene.
    #[arg(short = 'O', long, value_name = "GENE")]
    orthologs: Option<String>,

    /// List all paralogs of a gene.
    #[arg(short = 'P', long, value_name = "GENE")]
    paralogs: Option<String>,
}

fn main() {
    env_logger::init();
    // clap exits with 2 on usage errors by default; the contract is 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut tree = GeneTree::from_file(&cli.tree)?;

    if cli.print {
        print!("{}", tree.format());
    }
    if cli.list {
        for gene in tree.genes() {
            println!("{gene}");
        }
    }
    if let Some(path) = &cli.save_index {
        tree.write_index(path)?;
    }

    // Queries need an index: load the given one, or build in memory.
    if cli.orthologs.is_some() || cli.paralogs.is_some() {
        match &cli.load_index {
            Some(path) => tree.load_index(path)?,
            None => tree.build_index(),
        }
    } else if let Some(path) = &cli.load_index {
        tree.load_index(path)?;
    }

    if let Some(gene) = &cli.orthologs {
        let start = Instant::now();
        let hits = tree.orthologs(gene);
        for hit in &hits {
            println!("{} ({})", hit.ortholog_name, hit.kind);
        }
        println!(
            "Found {} orthologs in {:.6} seconds",
            hits.len(),
            start.elapsed().as_secs_f64()
        );
    }
    if let Some(gene) = &cli.paralogs {
        let start = Instant::now();
        let hits = tree.paralogs(gene);
        for hit in &hits {
            println!("{} ({})", hit.paralog_name, hit.kind);
        }
        println!(
            "Found {} paralogs in {:.6} seconds",
            hits.len(),
            start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
