use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use transcript_analyzer::analyzer::analyzer::TranscriptAnalyzer;
use transcript_analyzer::classifier::classifier::Category;
use transcript_analyzer::corpus::corpus::{ConversationSet, generate_transcript_files};
use transcript_analyzer::report::report::run_batch;

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Config {
    store_path: String,
    transcript_dir: String,
    report_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: "data/tokens.json".to_string(),
            transcript_dir: "demos".to_string(),
            report_path: "report.txt".to_string(),
        }
    }
}

fn load_config(path: &str) -> Config {
    if Path::new(path).exists() {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    println!("✓ Loaded configuration from {}", path);
                    return config;
                }
                Err(e) => {
                    eprintln!("⚠ Error parsing config.json: {}", e);
                    eprintln!("  Using default configuration");
                }
            },
            Err(e) => {
                eprintln!("⚠ Error reading config.json: {}", e);
                eprintln!("  Using default configuration");
            }
        }
    } else {
        println!("ℹ config.json not found, using default configuration");
    }

    Config::default()
}

fn print_evaluation(file_path: &str, analyzer: &TranscriptAnalyzer) {
    match fs::read_to_string(file_path) {
        Ok(text) => {
            let result = analyzer.evaluate(&text);
            println!("Undefined words:   {}", result.undefined_words);
            println!("Positive words:    {}", result.positive_words);
            println!("Negative words:    {}", result.negative_words);
            println!("Neutral words:     {}", result.neutral_words);
            println!("Experience score:  {}", result.experience_score);
            println!("Performance score: {}", result.performance_score);
        }
        Err(e) => println!("Could not read {}: {}", file_path, e),
    }
}

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rl = DefaultEditor::new().unwrap();

    let config_path = "config.json";
    let config = load_config(config_path);

    println!("\nCurrent Configuration:");
    println!("  Word Store:           {}", config.store_path);
    println!("  Transcript Directory: {}", config.transcript_dir);
    println!("  Report File:          {}", config.report_path);

    let mut analyzer = match TranscriptAnalyzer::new(&config.store_path) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Could not load the word store: {}", e);
            return;
        }
    };

    println!("\nWelcome to the transcript analyzer! Type 'help' for commands or 'exit' to quit.\n");
    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let parts: Vec<&str> = line.split_whitespace().collect();
                let command = parts[0];

                match command {
                    "help" => {
                        println!("The valid commands are->");
                        println!("eval [file]: Evaluates the transcript in the given file");
                        println!(
                            "undefined [file]: Lists the words in the file that have no classification yet"
                        );
                        println!(
                            "add [word] [positive|negative|neutral]: Classifies a word and saves the store"
                        );
                        println!("words: Shows the current word lists");
                        println!(
                            "report [dir]: Evaluates every .txt transcript in a directory and writes the report"
                        );
                        println!(
                            "seed [json] [dir]: Generates transcript files from a conversation set"
                        );
                        println!("reload: Re-reads the word store from disk");
                    }
                    "eval" => {
                        if parts.len() < 2 {
                            println!("Usage: eval [file]");
                            continue;
                        }
                        print_evaluation(parts[1], &analyzer);
                    }
                    "undefined" => {
                        if parts.len() < 2 {
                            println!("Usage: undefined [file]");
                            continue;
                        }
                        match fs::read_to_string(parts[1]) {
                            Ok(text) => {
                                let undefined = analyzer.undefined_words(&text);
                                if undefined.is_empty() {
                                    println!("Every word in the file is classified");
                                } else {
                                    for token in undefined {
                                        println!("{} ({})", token.canonical, token.surface);
                                    }
                                }
                            }
                            Err(e) => println!("Could not read {}: {}", parts[1], e),
                        }
                    }
                    "add" => {
                        if parts.len() < 3 {
                            println!("Usage: add [word] [positive|negative|neutral]");
                            continue;
                        }
                        let Some(category) = Category::parse(parts[2]) else {
                            println!("Unknown category '{}'", parts[2]);
                            continue;
                        };
                        match analyzer.add_word(parts[1], category) {
                            Ok(()) => println!("The word has been added and the store saved"),
                            Err(e) => println!("Could not add the word: {}", e),
                        }
                    }
                    "words" => {
                        for category in [Category::Positive, Category::Negative, Category::Neutral]
                        {
                            let words = analyzer.classifier().words(category);
                            println!("{} ({} words):", category.as_str(), words.len());
                            for word in words {
                                println!("  {}", word);
                            }
                        }
                    }
                    "report" => {
                        let dir = if parts.len() > 1 {
                            parts[1]
                        } else {
                            config.transcript_dir.as_str()
                        };
                        match run_batch(&analyzer, dir) {
                            Ok(report) => {
                                print!("{}", report.render());
                                match report.write_to(&config.report_path) {
                                    Ok(()) => println!(
                                        "The report has been written to {}",
                                        config.report_path
                                    ),
                                    Err(e) => println!("Could not write the report: {}", e),
                                }
                            }
                            Err(e) => println!("Could not evaluate the directory: {}", e),
                        }
                    }
                    "seed" => {
                        if parts.len() < 3 {
                            println!("Usage: seed [json] [dir]");
                            continue;
                        }
                        match ConversationSet::load(parts[1])
                            .and_then(|set| generate_transcript_files(&set, parts[2]))
                        {
                            Ok(written) => {
                                println!("{} transcript files have been generated", written.len())
                            }
                            Err(e) => println!("Could not generate the transcripts: {}", e),
                        }
                    }
                    "reload" => match analyzer.reload() {
                        Ok(()) => println!("The word store has been reloaded"),
                        Err(e) => println!("Could not reload the word store: {}", e),
                    },
                    "quit" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {
                        println!(
                            "Invalid command. Type help if you want to see the valid commands"
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}
