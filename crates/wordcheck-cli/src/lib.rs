// wordcheck-cli: a word-list-backed dictionary and shared helpers for the
// command-line tools.
//
// The session core only speaks to dictionaries through their traits; this
// crate supplies the simplest useful implementation, a plain word list with
// string-similarity scoring, so the pipeline can be driven from a shell.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use wordcheck_session::{
    ComposedWord, Dictionary, DictionaryError, DictionaryFactory, DictionaryResource,
    PreviousWords, SuggestionCandidate,
};

/// Scores are similarity in [0, 1] stretched onto this scale, so the
/// session's default thresholds are meaningful against them.
const SCORE_SCALE: f64 = 250.0;

/// Candidates below this similarity score are not worth offering at all.
const MIN_CANDIDATE_SCORE: i32 = 150;

/// A dictionary backed by a flat word list.
///
/// Membership is an exact set lookup; suggestions are produced by scoring
/// every listed word against the query with Jaro-Winkler similarity. Linear
/// scan is plenty for the word-list sizes a demo tool loads.
pub struct WordListDictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordListDictionary {
    pub fn new(words: Vec<String>) -> Self {
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// Load a word list: one word per line, `#` starts a comment.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        Ok(Self::new(words))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    fn get_suggestions(
        &self,
        word: &ComposedWord,
        _prev_words: Option<&PreviousWords>,
        _block_offensive: bool,
    ) -> Vec<SuggestionCandidate> {
        let query = word.text().to_lowercase();
        let mut candidates = Vec::new();
        for entry in &self.words {
            let entry_lower = entry.to_lowercase();
            if entry_lower == query {
                continue;
            }
            let score = (strsim::jaro_winkler(&query, &entry_lower) * SCORE_SCALE) as i32;
            if score >= MIN_CANDIDATE_SCORE {
                candidates.push(SuggestionCandidate::new(entry.clone(), score));
            }
        }
        candidates
    }
}

/// Factory that loads `<locale>.dic` (falling back to the bare language,
/// `en_US` -> `en.dic`) from a directory of word lists.
pub struct WordListFactory {
    dict_dir: PathBuf,
}

impl WordListFactory {
    pub fn new(dict_dir: impl Into<PathBuf>) -> Self {
        Self {
            dict_dir: dict_dir.into(),
        }
    }

    fn candidate_paths(&self, locale: &str) -> Vec<PathBuf> {
        let mut paths = vec![self.dict_dir.join(format!("{locale}.dic"))];
        if let Some(language) = locale.split(['_', '-']).next() {
            if language != locale {
                paths.push(self.dict_dir.join(format!("{language}.dic")));
            }
        }
        paths
    }
}

impl DictionaryFactory for WordListFactory {
    fn create(&self, locale: &str) -> Result<DictionaryResource, DictionaryError> {
        for path in self.candidate_paths(locale) {
            if path.is_file() {
                let dictionary = WordListDictionary::from_file(&path).map_err(|e| {
                    DictionaryError::Unavailable {
                        locale: locale.to_owned(),
                        reason: format!("{}: {e}", path.display()),
                    }
                })?;
                return Ok(DictionaryResource::new(Arc::new(dictionary)));
            }
        }
        Err(DictionaryError::Unavailable {
            locale: locale.to_owned(),
            reason: format!("no word list found under {}", self.dict_dir.display()),
        })
    }
}

/// Parse a `--dict-dir=DIR` or `-d DIR` argument from command line args.
///
/// Returns `(dict_dir, remaining_args)`.
pub fn parse_dict_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_dir = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-dir=") {
            dict_dir = Some(val.to_string());
        } else if arg == "--dict-dir" || arg == "-d" {
            if i + 1 < args.len() {
                dict_dir = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_dir, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
