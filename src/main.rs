use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::info;
use serde_json::{json, Value};
use structopt::StructOpt;

use word_pairs::cache::get_or_compute;
use word_pairs::dictionary::{dictionary_words, read_entries, DictionaryEntry, KeywordClassifier};
use word_pairs::titles::{read_titles, titles_of_length};
use word_pairs::{FileFormat, SearchConfig, TitlePairs, Trie, Wordlist};

/// Find titles whose letters split into two dictionary words.
#[derive(StructOpt, Debug)]
#[structopt(name = "word-pairs")]
struct Cli {
    /// Plain word list, one word per line
    #[structopt(long, parse(from_os_str))]
    dict: Option<PathBuf>,
    /// Also insert plurals of the words in --dict
    #[structopt(long)]
    pluralize: bool,
    /// Webster dictionary text, used for words and for classification
    #[structopt(long, parse(from_os_str))]
    webster: Option<PathBuf>,
    /// Longest dictionary headword to keep
    #[structopt(long, default_value = "12")]
    max_word_len: usize,
    /// CSV file of books to take titles from
    #[structopt(long, parse(from_os_str))]
    titles: Option<PathBuf>,
    #[structopt(long, default_value = "original_title")]
    column: String,
    /// Only search titles with this many letters
    #[structopt(long, default_value = "13")]
    length: usize,
    /// Keep only pairs with a word whose definition mentions a keyword, that word first
    #[structopt(long)]
    classify: bool,
    /// Classification keyword; repeat to give several. Defaults to the built-in list
    #[structopt(long = "keyword")]
    keywords: Vec<String>,
    /// Directory for cached tries and results
    #[structopt(long, parse(from_os_str))]
    cache_dir: Option<PathBuf>,
    #[structopt(long, default_value = "64")]
    max_letters: usize,
    #[structopt(long, default_value = "1")]
    min_word_len: usize,
    /// Inputs to search in addition to --titles
    inputs: Vec<String>,
}

fn cached<T, F>(cache_dir: Option<&Path>, name: &str, key: &Value, getter: F) -> word_pairs::Result<T>
    where T: serde::Serialize + serde::de::DeserializeOwned, F: FnOnce() -> word_pairs::Result<T> {
    match cache_dir {
        Some(dir) => get_or_compute(dir, name, key, getter),
        None => getter(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::from_args();
    let cache_dir = args.cache_dir.as_deref();

    let entries: Option<Vec<DictionaryEntry>> = match &args.webster {
        Some(path) => Some(read_entries(path)
            .with_context(|| format!("reading dictionary {:?}", path))?),
        None => None,
    };

    let words_key = json!({
        "dict": args.dict.as_ref().map(|p| p.to_string_lossy()),
        "pluralize": args.pluralize,
        "webster": args.webster.as_ref().map(|p| p.to_string_lossy()),
        "max_word_len": args.max_word_len,
    });
    let trie = match (&args.dict, &entries) {
        (Some(path), _) => {
            let format = FileFormat::builder().pluralize(args.pluralize).build();
            cached(cache_dir, "all_words", &words_key, || Ok(Wordlist::from_file(path, format)?.into_trie()))
                .with_context(|| format!("reading word list {:?}", path))?
        }
        (None, Some(entries)) => cached(cache_dir, "all_words", &words_key,
                                        || Ok(Trie::build(dictionary_words(entries, args.max_word_len))))?,
        (None, None) => bail!("one of --dict or --webster is required"),
    };

    let mut inputs = args.inputs.clone();
    if let Some(path) = &args.titles {
        let titles = read_titles(path, &args.column)
            .with_context(|| format!("reading titles {:?}", path))?;
        inputs.extend(titles_of_length(titles, args.length));
    }
    info!("Searching {} inputs", inputs.len());

    let config = SearchConfig { max_letters: args.max_letters, min_word_len: args.min_word_len };
    let results_key = json!({
        "words": words_key,
        "inputs": inputs,
        "max_letters": config.max_letters,
        "min_word_len": config.min_word_len,
    });
    let mut results: Vec<TitlePairs> = cached(cache_dir, "titles_with_word_pairs", &results_key,
                                              || Ok(trie.find_word_pairs_many(&inputs, &config)))?;

    if args.classify {
        let entries = match &entries {
            Some(entries) => entries,
            None => bail!("--classify needs --webster for definitions"),
        };
        let classifier = if args.keywords.is_empty() {
            KeywordClassifier::default()
        } else {
            KeywordClassifier::new(&args.keywords)
        };
        let matching = classifier.filter_entries(entries);
        info!("{} dictionary entries match {:?}", matching.len(), classifier.keywords());
        let classified = Trie::build(dictionary_words(matching, args.max_word_len));
        results = results.into_iter()
            .filter_map(|title| title.classify(|word| classified.contains(word)))
            .collect();
    }

    for TitlePairs { title, word_pairs } in results {
        println!("{}", title);
        word_pairs.iter().for_each(|(first, second)| println!("  {},{}", first, second));
    }
    Ok(())
}
