use clap::Parser;
use randsent::{Grammar, Sampler, format};
use std::path::PathBuf;

/// Generate random sentences from a probabilistic context-free grammar
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the grammar file
    #[arg(short = 'g', long = "grammar")]
    grammar: PathBuf,

    /// Start symbol of the grammar
    #[arg(short = 's', long = "start_symbol", default_value = "ROOT")]
    start_symbol: String,

    /// Number of sentences to generate
    #[arg(short = 'n', long = "num_sentences", default_value_t = 1)]
    num_sentences: u32,

    /// Max number of nonterminals to expand per sentence
    #[arg(short = 'M', long = "max_expansions", default_value_t = 450)]
    max_expansions: u32,

    /// Print the derivation tree for each generated sentence
    #[arg(short = 't', long = "tree")]
    tree: bool,

    /// Seed for the random number generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let grammar = Grammar::from_file(&cli.grammar)?;
    let mut sampler = match cli.seed {
        Some(seed) => Sampler::seeded(&grammar, seed),
        None => Sampler::new(&grammar),
    };

    for _ in 0..cli.num_sentences {
        let sentence = sampler.sample(&cli.start_symbol, cli.max_expansions, cli.tree)?;
        if cli.tree {
            println!("{}", format::pretty(&sentence));
        } else {
            println!("{sentence}");
        }
    }

    Ok(())
}
