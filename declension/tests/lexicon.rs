#![allow(missing_docs)]

use std::{fs, path::PathBuf};

use declension::{AdjectiveForms, Lexicon, NounForms, errors::LexiconError};
use tempfile::TempDir;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/ru.toml")
}

/// Write `content` to `name` in a fresh directory, removed when the
/// returned guard drops.
fn scratch_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn sample_loads() {
    let lexicon = Lexicon::load(sample_path()).unwrap();
    assert_eq!(lexicon.name(), "ru");
    assert_eq!(lexicon.len(), 6);
    assert!(!lexicon.is_empty());

    let letter = lexicon.noun("letter").unwrap();
    assert_eq!(letter.with_count(5), "5 писем");
    assert_eq!(letter.with_count(-22), "-22 письма");

    let file = lexicon.noun("file").unwrap();
    assert_eq!(file.many(), None);
    assert_eq!(file.decline(11), "files");

    let fresh = lexicon.adjective("fresh").unwrap();
    assert_eq!(fresh.with_count(31), "31 свежее");
}

#[test]
fn iterates_in_key_order() {
    let lexicon = Lexicon::load(sample_path()).unwrap();
    let nouns: Vec<_> =
        lexicon.nouns().map(|(word, _)| word.as_str()).collect();
    assert_eq!(nouns, ["file", "letter", "minute", "watermelon"]);
    let adjectives: Vec<_> =
        lexicon.adjectives().map(|(word, _)| word.as_str()).collect();
    assert_eq!(adjectives, ["fresh", "new"]);
}

#[test]
fn decline_prefers_nouns() {
    let mut lexicon = Lexicon::new("mixed");
    lexicon.insert_noun(
        "new",
        NounForms::new("новинка", "новинки", Some("новинок")),
    );
    lexicon.insert_adjective("new", AdjectiveForms::new("новый", "новых"));
    assert_eq!(lexicon.decline("new", 5), Some("новинок"));
    assert_eq!(lexicon.decline("old", 5), None);
}

#[test]
fn missing_file() {
    let path = sample_path().with_file_name("does-not-exist.toml");
    let err = Lexicon::load(&path).unwrap_err();
    assert!(matches!(err, LexiconError::FailedToRead(ref p, _) if *p == path));
}

#[test]
fn unknown_form_rejected() {
    let (_dir, path) = scratch_file(
        "unknown-form.toml",
        "[nouns.letter]\n\
         one = \"письмо\"\n\
         few = \"письма\"\n\
         five = \"писем\"\n",
    );
    let err = Lexicon::load(&path).unwrap_err();
    assert!(matches!(err, LexiconError::Parse(ref p, _) if *p == path));
}

#[test]
fn missing_required_form_rejected() {
    let err = Lexicon::from_toml_str(
        "inline",
        "[adjectives.fresh]\none = \"свежее\"\n",
    )
    .unwrap_err();
    assert!(matches!(err, LexiconError::Parse(..)));
}

#[test]
fn empty_form_rejected() {
    let err = Lexicon::from_toml_str(
        "inline",
        "[nouns.letter]\none = \"\"\nfew = \"письма\"\n",
    )
    .unwrap_err();
    let LexiconError::EmptyForm { word, form, .. } = &err else {
        panic!("expected an empty form, got {err:?}");
    };
    assert_eq!(word, "letter");
    assert_eq!(*form, "one");
    assert_eq!(
        err.to_string(),
        "letter has an empty \"one\" form in lexicon inline",
    );
}

#[test]
fn loads_from_disk_with_file_stem_name() {
    let (_dir, path) = scratch_file(
        "extra.toml",
        "[nouns.day]\none = \"день\"\nfew = \"дня\"\nmany = \"дней\"\n",
    );
    let lexicon = Lexicon::load(&path).unwrap();
    assert_eq!(lexicon.name(), "extra");
    assert_eq!(lexicon.decline("day", 12), Some("дней"));
}

#[test]
fn empty_lexicon() {
    let lexicon = Lexicon::from_toml_str("empty", "").unwrap();
    assert!(lexicon.is_empty());
    assert_eq!(lexicon.len(), 0);
}
