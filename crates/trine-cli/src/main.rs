//! Trine CLI - dictionary encoding for RDF dumps.
//!
//! Runs the pipeline stages one at a time against files on disk. Sorting the
//! mapped rows into the `.spo`, `.pos` and `.osp` projections is done with an
//! external sort between `map` and `stats`.

mod commands;
mod output;
mod progress;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trine_common::types::KeyMode;
use trine_core::{Grammar, MapperConfig, RoleSelection, VocabularyConfig};

/// RDF dictionary encoding pipeline.
///
/// Builds per-role vocabularies from a statement dump, encodes the dump as
/// integer triples, and computes cardinality statistics over the sorted
/// triples.
#[derive(Parser)]
#[command(name = "trine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Statement grammar options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum GrammarArg {
    /// N-Quads style lines, single-space separated
    #[default]
    Quad,
    /// N-Triples style lines
    Triple,
}

impl From<GrammarArg> for Grammar {
    fn from(g: GrammarArg) -> Self {
        match g {
            GrammarArg::Quad => Grammar::Quad,
            GrammarArg::Triple => Grammar::Triple,
        }
    }
}

/// Key options shared by every stage that reads statements.
#[derive(Args, Clone, Copy)]
struct KeyArgs {
    /// Store 64-bit term hashes instead of raw terms
    #[arg(long)]
    hash: bool,

    /// Statement grammar of the input
    #[arg(long, value_enum, default_value = "quad")]
    grammar: GrammarArg,
}

impl KeyArgs {
    fn key_mode(self) -> KeyMode {
        if self.hash {
            KeyMode::Hashed
        } else {
            KeyMode::Raw
        }
    }

    fn mapper_config(self) -> MapperConfig {
        MapperConfig::default()
            .with_key_mode(self.key_mode())
            .with_grammar(self.grammar.into())
    }
}

/// Options of the `vocab` command.
#[derive(Args)]
struct VocabArgs {
    /// Statement file, plain or gzip
    input: PathBuf,

    /// Build the subject vocabulary
    #[arg(short = 'S', long)]
    subjects: bool,

    /// Build the predicate vocabulary
    #[arg(short = 'P', long)]
    predicates: bool,

    /// Build the object vocabulary
    #[arg(short = 'O', long)]
    objects: bool,

    /// Do not split objects into numbers, dates and strings
    #[arg(long)]
    no_classify: bool,

    /// Count shards in parallel (uncompressed input only)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    #[command(flatten)]
    keys: KeyArgs,
}

impl VocabArgs {
    /// Roles selected on the command line; none selected means all.
    fn roles(&self) -> RoleSelection {
        let roles = RoleSelection {
            subjects: self.subjects,
            predicates: self.predicates,
            objects: self.objects,
        };
        if roles.is_empty() {
            RoleSelection::ALL
        } else {
            roles
        }
    }

    fn config(&self) -> VocabularyConfig {
        VocabularyConfig::default()
            .with_roles(self.roles())
            .with_key_mode(self.keys.key_mode())
            .with_grammar(self.keys.grammar.into())
            .with_object_classification(!self.no_classify)
    }
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Build frequency-ranked vocabularies from a statement file
    Vocab(VocabArgs),

    /// Encode a statement file as id triples (.mapped.unsorted)
    Map {
        /// Statement file, plain or gzip
        input: PathBuf,

        #[command(flatten)]
        keys: KeyArgs,
    },

    /// Compute statistics from the sorted .spo, .pos and .osp files
    Stats {
        /// Dataset basename
        basename: PathBuf,
    },

    /// Build all vocabularies, then map the statement file
    Run {
        /// Statement file, plain or gzip
        input: PathBuf,

        /// Count shards in parallel (uncompressed input only)
        #[arg(long, default_value_t = 1)]
        threads: usize,

        #[command(flatten)]
        keys: KeyArgs,
    },

    /// Show the pipeline files of a dataset and its statistics
    Info {
        /// Dataset basename or input file
        basename: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Vocab(args) => commands::vocab::run(
            &args.input,
            args.config(),
            args.threads,
            cli.format,
            cli.quiet,
        ),
        Commands::Map { input, keys } => {
            commands::map::run(&input, keys.mapper_config(), cli.format, cli.quiet)
        }
        Commands::Stats { basename } => commands::stats::run(&basename, cli.format, cli.quiet),
        Commands::Run {
            input,
            threads,
            keys,
        } => {
            let vocab = VocabularyConfig::default()
                .with_key_mode(keys.key_mode())
                .with_grammar(keys.grammar.into());
            commands::run::run(
                &input,
                vocab,
                keys.mapper_config(),
                threads,
                cli.format,
                cli.quiet,
            )
        }
        Commands::Info { basename } => commands::info::run(&basename, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
