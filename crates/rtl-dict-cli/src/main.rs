use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use rtl_dict::{DICTIONARY_FILE_NAME, Dictionary, DictionarySource, Section, messages};

const PREFIX_HELP: &str = "Supply the prefix whose meaning you want to know. For example,

    check-rtl-meaning --prefix pq_
";

const SUFFIX_HELP: &str = "Supply the suffix whose meaning you want to know. For example,

    check-rtl-meaning --suffix _req
";

const LIST_ALL_HELP: &str = "See all of the prefixes and suffixes used in the RTL, \
as well as their explanations.";

const PATH_TO_DICT_HELP: &str =
    "Directory in which to look for the RTL dictionary JSON file (defaults to the \
current working directory).";

#[derive(Parser)]
#[command(name = "check-rtl-meaning")]
#[command(about = "Look up the meaning of RTL signal-naming prefixes and suffixes")]
struct Cli {
    #[arg(long, value_name = "PREFIX", long_help = PREFIX_HELP)]
    prefix: Option<String>,

    #[arg(long, value_name = "SUFFIX", long_help = SUFFIX_HELP)]
    suffix: Option<String>,

    #[arg(long = "list_all", long_help = LIST_ALL_HELP)]
    list_all: bool,

    #[arg(long = "path_to_dict", value_name = "DIR", long_help = PATH_TO_DICT_HELP)]
    path_to_dict: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // The switches are combinable: a prefix lookup, a suffix lookup, and a
    // full listing may all run in one invocation, against the same loaded
    // dictionary. With no operation requested there is nothing to load.
    if cli.prefix.is_none() && cli.suffix.is_none() && !cli.list_all {
        println!("{}", messages::no_args());
        return Ok(());
    }

    let path = rtl_dict::dictionary_path(cli.path_to_dict.as_deref());
    println!("{}", messages::read_attempt(&path));

    let loaded = rtl_dict::load(&path)
        .with_context(|| format!("Failed to read dictionary at {}", path.display()))?;
    if loaded.source == DictionarySource::BuiltinFallback {
        println!("{}", messages::file_empty(&path));
    }
    let dictionary = loaded.dictionary;

    if let Some(prefix) = &cli.prefix {
        report_lookup(&dictionary, Section::Prefix, prefix);
    }
    if let Some(suffix) = &cli.suffix {
        report_lookup(&dictionary, Section::Suffix, suffix);
    }
    if cli.list_all {
        println!("{}", dictionary.render_listing());
    }

    Ok(())
}

fn report_lookup(dictionary: &Dictionary, section: Section, value: &str) {
    match dictionary.lookup(section, value) {
        Some(explanation) => println!("{}", messages::explanation(value, explanation)),
        None => println!(
            "{}",
            messages::not_found(section, value, DICTIONARY_FILE_NAME)
        ),
    }
}
