use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsift::{
    cli::{Cli, Command, ProcessArgs, SearchArgs},
    corpus, error,
    model_manager::ModelManager,
    pipeline, retrieval,
    retrieval::RetrievalIndex,
};

fn init_tracing(verbose: u8) {
    let filter = if let Ok(env) = std::env::var("DOCSIFT_LOG") {
        EnvFilter::new(env)
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Process(args) => cmd_process(&args),
        Command::Search(args) => cmd_search(&args, cli.model),
        Command::Completions(args) => {
            args.generate();
            Ok(())
        }
    }
}

fn cmd_process(args: &ProcessArgs) -> error::Result<()> {
    let docs = corpus::build_corpus(&args.input_dir)?;

    if docs.is_empty() {
        eprintln!(
            "Processed 0 files. Check '{}' for .pdf/.txt documents.",
            args.input_dir.display()
        );
        return Ok(());
    }

    let results = pipeline::process_documents(&docs);

    if args.stdout {
        println!(
            "{}",
            serde_json::to_string_pretty(&pipeline::to_artifact(&results))?
        );
    } else {
        pipeline::write_artifact(&results, &args.output)?;
        eprintln!(
            "Processing complete. Results saved to {}",
            args.output.display()
        );
    }
    eprintln!("Processed {} files.", results.len());

    Ok(())
}

fn cmd_search(
    args: &SearchArgs,
    model_override: Option<String>,
) -> error::Result<()> {
    let docs = corpus::build_corpus(&args.input_dir)?;

    let mut model = match model_override {
        Some(id) => ModelManager::with_model_id(id),
        None => ModelManager::new(),
    };

    eprintln!("Building semantic index over {} documents...", docs.len());
    let index = RetrievalIndex::build(&docs, &mut model)?;

    let hits = index.search(&args.query, args.count, &mut model)?;

    if args.json {
        retrieval::format_json(&hits, &args.query)?;
    } else {
        retrieval::format_human(&hits);
    }

    Ok(())
}
