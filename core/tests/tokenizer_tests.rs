use vsm::tokenizer::{tokenize, Tokenizer, TokenizerConfig};

fn words(config: TokenizerConfig, text: &str) -> Vec<String> {
    Tokenizer::new(config).terms(text)
}

#[test]
fn it_normalizes_and_stems() {
    let cfg = TokenizerConfig { stem: true, ..Default::default() };
    let words = words(cfg, "Running Runners RUN! The café's menu.");
    // Stemming to "run" should appear
    assert!(words.contains(&"run".to_string()));
    // Unicode normalization folds the ligature
    let t: Vec<String> = tokenize("ﬁnal").into_iter().map(|(w, _)| w).collect();
    assert_eq!(t, vec!["final"]);
}

#[test]
fn it_filters_stopwords_only_when_asked() {
    let text = "The quick brown fox and the lazy dog";
    let kept = words(TokenizerConfig::default(), text);
    assert!(kept.contains(&"the".to_string()));

    let cfg = TokenizerConfig { remove_stopwords: true, ..Default::default() };
    let filtered = words(cfg, text);
    assert!(!filtered.contains(&"the".to_string()));
    assert!(!filtered.contains(&"and".to_string()));
    assert!(filtered.contains(&"fox".to_string()));
}

#[test]
fn it_splits_on_punctuation_and_lowercases() {
    let toks = tokenize("Ranks of starving-poets, SWELL.");
    let words: Vec<&str> = toks.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["ranks", "of", "starving", "poets", "swell"]);
}

#[test]
fn stopword_check_ignores_case_when_not_lowercasing() {
    let cfg = TokenizerConfig { lowercase: false, remove_stopwords: true, ..Default::default() };
    assert_eq!(words(cfg, "The Gap"), vec!["Gap"]);
}
