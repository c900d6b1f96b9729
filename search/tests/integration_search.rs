use search::{load_config, load_documents, render_table, search, vocabulary, Overrides};
use std::fs;
use tempfile::tempdir;
use vsm::{PipelineConfig, Weighting};

fn write_corpus(dir: &std::path::Path) {
    fs::write(
        dir.join("news.json"),
        r#"[
            { "id": "poets", "text": "Ranks of starving poets swell", "title": "Poets" },
            { "id": "gap", "body": "Rich poor gap grows" }
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("sports.jsonl"),
        "{\"id\": \"salaries\", \"text\": \"Record baseball salaries in 2010\"}\n\n",
    )
    .unwrap();
    fs::write(dir.join("ignored.md"), "rich poor").unwrap();
}

#[test]
fn loads_directory_in_file_name_order() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let docs = load_documents(dir.path()).unwrap();
    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["poets", "gap", "salaries"]);
    assert_eq!(docs[1].text, "Rich poor gap grows");
}

#[test]
fn search_returns_ranked_results() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let docs = load_documents(dir.path()).unwrap();

    let resp = search(&docs, "rich poor", PipelineConfig::default(), Some(2)).unwrap();
    assert_eq!(resp.num_docs, 3);
    assert_eq!(resp.total_hits, 1);
    assert_eq!(resp.results.len(), 2);
    assert_eq!(resp.results[0].id, "gap");
    assert!((resp.results[0].score - 0.7071).abs() < 1e-4);
    assert_eq!(resp.results[1].id, "poets");
    assert_eq!(resp.results[1].title.as_deref(), Some("Poets"));

    let json: serde_json::Value = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
    assert_eq!(json["query"], "rich poor");

    let table = render_table(&resp);
    assert!(table.contains("gap"));
    assert!(table.contains("1 of 3 documents matched"));
}

#[test]
fn text_files_are_one_document_per_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("headlines.txt");
    fs::write(&path, "Rich poor gap grows\n\nRecord baseball salaries in 2010\n").unwrap();
    let docs = load_documents(&path).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, "headlines.txt:1");
    assert_eq!(docs[1].id, "headlines.txt:3");
}

#[test]
fn missing_input_is_error() {
    let dir = tempdir().unwrap();
    assert!(load_documents(dir.path().join("nope.json")).is_err());
}

#[test]
fn empty_corpus_surfaces_error() {
    let dir = tempdir().unwrap();
    let docs = load_documents(dir.path()).unwrap();
    let err = search(&docs, "rich", PipelineConfig::default(), None).unwrap_err();
    assert_eq!(err.downcast_ref::<vsm::Error>(), Some(&vsm::Error::EmptyCorpus));
}

#[test]
fn overrides_layer_over_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vsm.json");
    fs::write(&path, r#"{ "tokenizer": { "remove_stopwords": true } }"#).unwrap();
    let overrides = Overrides { smoothed_idf: true, case_sensitive: true, ..Default::default() };
    let cfg = load_config(Some(path.as_path()), &overrides).unwrap();
    assert!(cfg.tokenizer.remove_stopwords);
    assert!(!cfg.tokenizer.lowercase);
    assert_eq!(cfg.weighting, Weighting::TfIdf { smoothed_idf: true });
}

#[test]
fn vocabulary_excludes_query() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let docs = load_documents(dir.path()).unwrap();
    let vocab = vocabulary(&docs, PipelineConfig::default()).unwrap();
    assert_eq!(vocab.len(), 14);
    assert_eq!(vocab.terms()[0], "ranks");
    assert_eq!(vocab.get("tax"), None);
}
