use std::fs;
use std::path::Path;

use lexicon::{
    lexicon_at, lexicon_from, Lexicon, LexiconError, LexiconSource, WordMeaning, WordsetLexicon,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tempfile::TempDir;

fn dataset(shards: &[(&str, serde_json::Value)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (stem, contents) in shards {
        write_shard(dir.path(), stem, &contents.to_string());
    }
    dir
}

fn write_shard(dir: &Path, stem: &str, contents: &str) {
    fs::write(dir.join(format!("{stem}.json")), contents).unwrap();
}

#[test]
fn defines_a_synthetic_entry() {
    let dir = dataset(&[(
        "t",
        json!({"tree": {"word": "tree", "meanings": [{"def": "a plant", "speech_part": "noun"}]}}),
    )]);
    let lexicon = lexicon_at(LexiconSource::Wordset, dir.path());

    let meanings = lexicon.define("tree").unwrap();

    assert_eq!(
        meanings,
        Some(vec![WordMeaning {
            word: "tree".into(),
            definition: "a plant".into(),
            part_of_speech: Some("noun".into()),
            sentence: None,
            synonyms: None,
        }])
    );
}

#[test]
fn every_meaning_is_returned_in_order() {
    let dir = dataset(&[(
        "b",
        json!({"bank": {"word": "bank", "meanings": [
            {"id": "1", "def": "sloping land beside a body of water", "speech_part": "noun",
             "example": "they pulled the canoe up on the bank"},
            {"id": "2", "def": "a financial institution", "speech_part": "noun",
             "synonyms": ["depository financial institution", "banking company"]},
            {"id": "3", "def": "tip laterally", "speech_part": "verb",
             "labels": [{"name": "aviation"}]}
        ]}}),
    )]);
    let lexicon = WordsetLexicon::new(dir.path());

    let meanings = lexicon.define("bank").unwrap().unwrap();

    assert_eq!(meanings.len(), 3);
    assert!(meanings.iter().all(|meaning| meaning.word == "bank"));
    let definitions: Vec<&str> = meanings.iter().map(|m| m.definition.as_str()).collect();
    assert_eq!(
        definitions,
        [
            "sloping land beside a body of water",
            "a financial institution",
            "tip laterally"
        ]
    );
    assert_eq!(
        meanings[0].sentence.as_deref(),
        Some("they pulled the canoe up on the bank")
    );
    assert_eq!(
        meanings[1].synonyms,
        Some(vec![
            "depository financial institution".to_owned(),
            "banking company".to_owned()
        ])
    );
    assert_eq!(meanings[2].part_of_speech.as_deref(), Some("verb"));
}

#[test]
fn unknown_word_is_none() {
    let dir = dataset(&[(
        "t",
        json!({"tree": {"word": "tree", "meanings": [{"def": "a plant"}]}}),
    )]);
    let lexicon = WordsetLexicon::new(dir.path());

    assert_eq!(lexicon.define("trie").unwrap(), None);
}

#[test]
fn lookup_is_case_sensitive() {
    let dir = dataset(&[(
        "t",
        json!({"Tree": {"word": "Tree", "meanings": [{"def": "a plant"}]}}),
    )]);
    let lexicon = WordsetLexicon::new(dir.path());

    assert_eq!(lexicon.define("tree").unwrap(), None);
    let meanings = lexicon.define("Tree").unwrap().unwrap();
    assert_eq!(meanings, vec![WordMeaning::new("Tree", "a plant")]);
}

#[test]
fn capitalized_words_are_looked_up_in_their_letter_shard() {
    let dir = dataset(&[
        (
            "z",
            json!({"Zeus": {"word": "Zeus", "meanings": [{"def": "the supreme god"}]}}),
        ),
        ("misc", json!({})),
    ]);
    let lexicon = WordsetLexicon::new(dir.path());

    assert!(lexicon.define("Zeus").unwrap().is_some());
}

#[test]
fn non_letters_are_looked_up_in_misc() {
    let dir = dataset(&[(
        "misc",
        json!({
            "10-4": {"word": "10-4", "meanings": [{"def": "message received"}]},
            "élan": {"word": "élan", "meanings": [{"def": "enthusiastic energy"}]}
        }),
    )]);
    let lexicon = WordsetLexicon::new(dir.path());

    assert!(lexicon.define("10-4").unwrap().is_some());
    assert!(lexicon.define("élan").unwrap().is_some());
}

#[test]
fn missing_shard_is_an_io_error() {
    let dir = dataset(&[(
        "t",
        json!({"tree": {"word": "tree", "meanings": [{"def": "a plant"}]}}),
    )]);
    let lexicon = WordsetLexicon::new(dir.path());

    match lexicon.define("quokka") {
        Err(LexiconError::DatasetIo { path, .. }) => assert_eq!(path, dir.path().join("q.json")),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn malformed_shard_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_shard(dir.path(), "t", r#"{"tree": {"word": "tree", "meanings": [}"#);
    let lexicon = WordsetLexicon::new(dir.path());

    let err = lexicon.define("tree").unwrap_err();
    assert!(matches!(err, LexiconError::Parse { .. }), "{err}");
    assert!(err.to_string().contains("t.json"), "{err}");
}

#[test]
fn load_shard_returns_raw_entries() {
    let dir = dataset(&[(
        "misc",
        json!({"'tis": {"word": "'tis", "wordset_id": "x", "meanings": [{"def": "it is"}]}}),
    )]);
    let lexicon = WordsetLexicon::new(dir.path());

    let shard = lexicon.load_shard("'").unwrap();
    assert_eq!(shard.len(), 1);
    assert_eq!(shard["'tis"]["meanings"][0]["def"], "it is");
}

#[test]
fn malformed_sibling_does_not_break_lookups() {
    let dir = dataset(&[(
        "t",
        json!({
            "tree": {"word": "tree", "meanings": [{"def": "a plant", "speech_part": "noun"}]},
            "trie": {"word": null, "meanings": [{"def": "a prefix tree", "synonyms": "prefix tree"}]}
        }),
    )]);
    let lexicon = WordsetLexicon::new(dir.path());

    assert_eq!(
        lexicon.define("tree").unwrap(),
        Some(vec![WordMeaning::new("tree", "a plant").with_part_of_speech("noun")])
    );
    assert_eq!(lexicon.define("trip").unwrap(), None);
    match lexicon.define("trie") {
        Err(LexiconError::MalformedEntry { path, word, .. }) => {
            assert_eq!(path, dir.path().join("t.json"));
            assert_eq!(word, "trie");
        }
        other => panic!("expected a malformed entry error, got {other:?}"),
    }
}

#[test]
fn multi_char_lowercase_start_is_looked_up_in_misc() {
    let dir = dataset(&[
        (
            "misc",
            json!({"İstanbul": {"word": "İstanbul", "meanings": [{"def": "the largest city in Turkey"}]}}),
        ),
        ("i", json!({})),
    ]);
    let lexicon = WordsetLexicon::new(dir.path());

    let meanings = lexicon.define("İstanbul").unwrap().unwrap();
    assert_eq!(meanings, vec![WordMeaning::new("İstanbul", "the largest city in Turkey")]);
}

#[test]
fn random_words_come_from_one_shard() {
    let dir = tempfile::tempdir().unwrap();
    for stem in ('a'..='z').map(String::from).chain(["misc".to_owned()]) {
        let words: serde_json::Map<String, serde_json::Value> = ["one", "three", "fives"]
            .iter()
            .map(|suffix| {
                let word = format!("{stem}{suffix}");
                (word.clone(), json!({"word": word, "meanings": [{"def": "test"}]}))
            })
            .collect();
        write_shard(dir.path(), &stem, &serde_json::Value::Object(words).to_string());
    }
    let lexicon = WordsetLexicon::new(dir.path());
    let mut rng = StdRng::seed_from_u64(7);

    let words = lexicon.random_words(&mut rng, 2, None).unwrap();
    assert_eq!(words.len(), 2);
    assert_ne!(words[0], words[1]);
    assert_eq!(words[0].chars().next(), words[1].chars().next());

    let all = lexicon.random_words(&mut rng, 10, None).unwrap();
    assert_eq!(all.len(), 3);

    for _ in 0..10 {
        for word in lexicon.random_words(&mut rng, 10, Some(4)).unwrap() {
            assert!(word.ends_with("one") && word.chars().count() == 4, "{word}");
        }
    }
}

#[test]
fn bundled_dataset_defines_known_words() {
    let lexicon = lexicon_from(LexiconSource::Wordset);

    let tree = lexicon.define("tree").unwrap().unwrap();
    assert_eq!(tree.len(), 2);
    assert!(tree.iter().all(|meaning| meaning.word == "tree"));

    assert!(lexicon.define("Thames").unwrap().is_some());
    assert!(lexicon.define("10-4").unwrap().is_some());
    assert_eq!(lexicon.define("quux").unwrap(), None);
}
