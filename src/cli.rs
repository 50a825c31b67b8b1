use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "docsift",
    about = "Classify, extract, and semantically search a folder of documents"
)]
pub struct Cli {
    /// Override the embedding model ID or local model path
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify documents and extract structured fields into a JSON artifact
    Process(ProcessArgs),
    /// Semantic search over the documents in a directory
    Search(SearchArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Process --

#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Directory containing the input documents (.pdf, .txt)
    pub input_dir: PathBuf,

    /// Where to write the extraction artifact
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Print the artifact to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Directory containing the documents to index
    pub input_dir: PathBuf,

    /// The search query
    pub query: String,

    /// Number of results to return
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "docsift",
            &mut std::io::stdout(),
        );
    }
}
