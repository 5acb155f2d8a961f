//! Site generation tests.
//!
//! End-to-end tests that read a glossary file, generate the HTML pages, and
//! inspect what lands on disk.

use std::fs;

use glossgen::{
    Error, Fragment, Glossary, PageAssembler, SeparatorSet, SiteConfig, SiteExporter,
    generate_site, next_token, parse_glossary, render, sort_terms,
};
use tempfile::TempDir;

const GLOSSARY: &str = "\
meaning
something that one wishes to convey, especially by language

term
a word whose definition is in a glossary

word
a string of characters in a language, which has at least one character

definition
a sentence that explains the meaning of a term

glossary
a list of difficult or specialized terms, with their definitions,
usually near the end of a book

language
a system of communication using words
";

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("terms.txt");
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Core Scenarios
// ============================================================================

#[test]
fn test_tokenizer_scenarios() {
    let seps = SeparatorSet::build(" \t,");
    assert_eq!(next_token("a    cd", 0, &seps).unwrap(), "a");
    assert_eq!(next_token(" a,nn    cd", 0, &seps).unwrap(), " ");
    assert_eq!(next_token("a,nn    ,cd", 4, &seps).unwrap(), "    ,");
    assert!(matches!(
        next_token("a", 1, &seps),
        Err(Error::InvalidOffset { .. })
    ));
}

#[test]
fn test_sort_scenario() {
    assert_eq!(
        sort_terms(vec!["ha", "d", "paper", "app"]),
        vec!["app", "d", "ha", "paper"]
    );
}

#[test]
fn test_render_scenarios() {
    let seps = SeparatorSet::build(" \t,");
    let mut known = Glossary::new();
    known.insert("bag", "school").unwrap();
    known.insert("book", "school").unwrap();

    let fragments = render("bag has book", &seps, &known);
    assert_eq!(
        fragments,
        vec![
            Fragment::Link { term: "bag", text: "bag" },
            Fragment::Plain(" has "),
            Fragment::Link { term: "book", text: "book" },
        ]
    );

    let mut only_bag = Glossary::new();
    only_bag.insert("bag", "school").unwrap();
    assert_eq!(render("book", &seps, &only_bag), vec![Fragment::Plain("book")]);
}

// ============================================================================
// End-to-end Generation
// ============================================================================

#[test]
fn test_generate_site_writes_all_pages() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, GLOSSARY);
    let out = dir.path().join("site");

    let written = generate_site(&input, &out, &SiteConfig::default()).unwrap();
    assert_eq!(written.len(), 7);
    assert_eq!(written.last().unwrap(), &out.join("index.html"));

    for term in ["meaning", "term", "word", "definition", "glossary", "language"] {
        assert!(out.join(format!("{term}.html")).is_file(), "missing page for {term}");
    }
}

#[test]
fn test_index_is_alphabetical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, GLOSSARY);
    let out = dir.path().join("site");
    generate_site(&input, &out, &SiteConfig::default()).unwrap();

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    let positions: Vec<usize> = ["definition", "glossary", "language", "meaning", "term", "word"]
        .iter()
        .map(|t| {
            index
                .find(&format!("<li><a href=\"{t}.html\">{t}</a></li>"))
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_term_page_cross_links() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, GLOSSARY);
    let out = dir.path().join("site");
    generate_site(&input, &out, &SiteConfig::default()).unwrap();

    let definition = fs::read_to_string(out.join("definition.html")).unwrap();
    assert!(definition.contains(
        "<blockquote>a sentence that explains the <a href=\"meaning.html\">meaning</a> \
         of a <a href=\"term.html\">term</a></blockquote>"
    ));
    assert!(definition.contains("<a href=\"index.html\">index</a>"));

    // multi-line definitions are joined, "terms" and "definitions," are not exact matches
    let glossary = fs::read_to_string(out.join("glossary.html")).unwrap();
    assert!(glossary.contains(
        "<blockquote>a list of difficult or specialized terms, with their definitions, \
         usually near the end of a book</blockquote>"
    ));
}

#[test]
fn test_custom_separators_from_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "cat\nan animal;see dog\n\ndog\nan animal\n");
    let config_path = dir.path().join("glossary.json");
    fs::write(&config_path, r#"{ "separators": " ;", "title": "Animals" }"#).unwrap();

    let config = SiteConfig::from_json_file(&config_path).unwrap();
    let out = dir.path().join("site");
    generate_site(&input, &out, &config).unwrap();

    let cat = fs::read_to_string(out.join("cat.html")).unwrap();
    assert!(cat.contains("an animal;see <a href=\"dog.html\">dog</a>"));
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<h1>Animals</h1>"));
}

#[test]
fn test_duplicate_term_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bag\none\n\nbag\ntwo\n");
    let out = dir.path().join("site");

    let err = generate_site(&input, &out, &SiteConfig::default()).unwrap_err();
    assert!(matches!(err, Error::DuplicateTerm(_)));
    assert!(!out.exists());
}

#[test]
fn test_term_named_index_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "index\nan ordered list of terms\n\nbook\nsee index\n");
    let out = dir.path().join("site");

    let err = generate_site(&input, &out, &SiteConfig::default()).unwrap_err();
    assert!(matches!(err, Error::ReservedTerm(ref t) if t == "index"));
    assert!(!out.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = generate_site(dir.path().join("nope.txt"), dir.path(), &SiteConfig::default())
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_assemble_then_export() {
    let glossary = parse_glossary("bag\nholds a book\n\nbook\npages\n").unwrap();
    let site = PageAssembler::new().assemble(&glossary).unwrap();

    let dir = TempDir::new().unwrap();
    let written = SiteExporter::new().export(&site, dir.path()).unwrap();
    assert_eq!(written.len(), 3);

    let bag = fs::read_to_string(dir.path().join("bag.html")).unwrap();
    assert_eq!(bag, site.page("bag.html").unwrap().contents);
    assert!(bag.contains("holds a <a href=\"book.html\">book</a>"));
}
