// wordcheck-suggest: spell check words and print suggestions.
//
// Reads words from the command line or stdin (one per line), runs each one
// through a spell check session backed by a word-list dictionary, and
// prints the verdict with any replacement suggestions.
//
// Usage:
//   wordcheck-suggest -d DICT_DIR [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-dir DIR       Directory containing <locale>.dic word lists
//   -l, --locale LOCALE      Session locale (default: en)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 5)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use wordcheck_session::{SessionConfig, SpellCheckerService, SpellCheckerSession};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_dir, args) = wordcheck_cli::parse_dict_dir(&args);

    if wordcheck_cli::wants_help(&args) {
        println!("wordcheck-suggest: spell check words and print suggestions.");
        println!();
        println!("Usage: wordcheck-suggest -d DICT_DIR [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-dir DIR       Directory containing <locale>.dic word lists");
        println!("  -l, --locale LOCALE      Session locale (default: en)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut locale = "en".to_owned();
    let mut max_suggestions: usize = 5;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| wordcheck_cli::fatal("invalid number for --max-suggestions"));
                skip_next = true;
            } else {
                wordcheck_cli::fatal("--max-suggestions requires a value");
            }
        } else if arg == "-l" || arg == "--locale" {
            if i + 1 < args.len() {
                locale = args[i + 1].clone();
                skip_next = true;
            } else {
                wordcheck_cli::fatal("--locale requires a value");
            }
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let dict_dir =
        dict_dir.unwrap_or_else(|| wordcheck_cli::fatal("--dict-dir is required"));
    let factory = Arc::new(wordcheck_cli::WordListFactory::new(dict_dir));
    let service = SpellCheckerService::new(factory, SessionConfig::default());
    let session = service
        .new_session(&locale)
        .unwrap_or_else(|e| wordcheck_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let check_word = |word: &str,
                      session: &SpellCheckerSession,
                      out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let result = session.get_suggestions(word, max_suggestions);
        if result.is_in_dictionary() {
            let _ = writeln!(out, "{word} (correct)");
        } else if result.suggestions.is_empty() {
            if result.looks_like_typo() {
                let _ = writeln!(out, "{word}: (no suggestions)");
            } else {
                let _ = writeln!(out, "{word} (not checked)");
            }
        } else {
            let marker = if result.has_recommended_suggestions() {
                " (recommended)"
            } else {
                ""
            };
            let _ = writeln!(out, "{word}:{marker}");
            for s in &result.suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            check_word(word, &session, &mut out);
        }
    } else {
        for word in &words {
            check_word(word, &session, &mut out);
        }
    }
}
