mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{CorpusKind, SplitKind};

// ============ CLI ============
#[derive(Parser)]
#[command(name = "lmcorpora")]
#[command(version = "0.1.0")]
#[command(about = "Corpus loaders for language-modeling pipelines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Downloads and prepares a corpus
    Fetch {
        #[arg(short, long, value_enum)]
        corpus: CorpusKind,
        #[arg(long, default_value = ".data")]
        root: PathBuf,
    },

    /// Shows split and sample counts
    Info {
        #[arg(short, long, value_enum)]
        corpus: CorpusKind,
        #[arg(long, default_value = ".data")]
        root: PathBuf,
    },

    /// Prints the first samples of a split
    Head {
        #[arg(short, long, value_enum)]
        corpus: CorpusKind,
        #[arg(short, long, value_enum, default_value = "train")]
        split: SplitKind,
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
        #[arg(long, default_value = ".data")]
        root: PathBuf,
    },

    /// Exports samples to a text file, one per line
    Export {
        #[arg(short, long, value_enum)]
        corpus: CorpusKind,
        #[arg(short, long, value_enum)]
        split: Option<SplitKind>,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value = ".data")]
        root: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch { corpus, root } => commands::fetch::execute(corpus, &root),
        Commands::Info { corpus, root } => commands::info::execute(corpus, &root),
        Commands::Head {
            corpus,
            split,
            count,
            root,
        } => commands::head::execute(corpus, split, count, &root),
        Commands::Export {
            corpus,
            split,
            output,
            root,
        } => commands::export::execute(corpus, split, &output, &root),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
