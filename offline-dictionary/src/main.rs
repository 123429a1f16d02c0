use std::path::Path;

use commands::{Command, HELP};
use lexicon::{validate_dataset, Lexicon, WordMeaning, WordsetLexicon};
use log::{debug, info};
use utilities::input;

mod args;
mod commands;
mod utilities;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = args::load();
    let data_dir = args.resolve_data_dir();
    info!("using dataset at {}", data_dir.display());

    let dict = WordsetLexicon::new(data_dir);
    if !args.words.is_empty() {
        for word in &args.words {
            define_word(&dict, word)?;
        }
        return Ok(());
    }

    println!("Type a word to define it, or `help` for commands.");
    while let Some(line) = input(">> ")? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        debug!("command: {command:?}");
        let result = match command {
            Command::Exit => break,
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Define(word) => define_word(&dict, &word),
            Command::Random(count) => random_words(&dict, count),
            Command::Validate => validate(dict.data_dir()),
            Command::Unknown(line) => {
                println!("Unknown command {line}.");
                Ok(())
            }
        };
        if let Err(error) = result {
            eprintln!("Encountered an error: {error:#}");
        }
    }
    Ok(())
}

fn define_word(dict: &dyn Lexicon, word: &str) -> anyhow::Result<()> {
    match dict.define(word)? {
        Some(meanings) => print_definition(word, &meanings),
        None => println!("Couldn't find the word you were looking for."),
    }
    Ok(())
}

fn random_words(dict: &WordsetLexicon, count: usize) -> anyhow::Result<()> {
    let words = dict.random_words(&mut rand::thread_rng(), count, None)?;
    if words.is_empty() {
        println!("No words found.");
    }
    for word in words {
        println!("    {word}");
    }
    Ok(())
}

fn validate(data_dir: &Path) -> anyhow::Result<()> {
    let report = validate_dataset(data_dir)?;
    println!("{report}");
    Ok(())
}

fn print_definition(word: &str, meanings: &[WordMeaning]) {
    println!("Showing definition for '{word}':");
    for meaning in meanings {
        match &meaning.part_of_speech {
            Some(part_of_speech) => println!("    ({part_of_speech}) {}", meaning.definition),
            None => println!("    {}", meaning.definition),
        }
        if let Some(sentence) = &meaning.sentence {
            println!("          example: {sentence}");
        }
        if let Some(synonyms) = meaning.synonyms.as_ref().filter(|s| !s.is_empty()) {
            println!("          synonyms: {}", synonyms.join(", "));
        }
    }
}
