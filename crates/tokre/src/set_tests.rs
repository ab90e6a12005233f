use indoc::indoc;

use super::*;

fn sample() -> PatternSet {
    let mut set = PatternSet::new();
    set.compile("article", "^(el|la|los|las)$").unwrap();
    set.compile("plural", "s$").unwrap();
    set.compile("diminutive", "(ito|ita)s?$").unwrap();
    set
}

#[test]
fn keeps_insertion_order() {
    let set = sample();
    assert_eq!(set.len(), 3);
    assert_eq!(
        set.names().collect::<Vec<_>>(),
        ["article", "plural", "diminutive"]
    );
}

#[test]
fn roundtrip_preserves_names_and_behavior() {
    let set = sample();
    let bytes = set.to_bytes().unwrap();
    let reloaded = PatternSet::from_bytes(&bytes).unwrap();

    assert_eq!(
        reloaded.names().collect::<Vec<_>>(),
        set.names().collect::<Vec<_>>()
    );
    for word in ["LAS", "perritos", "casa", "el"] {
        for (name, store) in set.iter() {
            let other = reloaded.get(name).unwrap();
            assert_eq!(store.locate(word).unwrap(), other.locate(word).unwrap());
        }
    }
    assert_eq!(reloaded.to_bytes().unwrap(), bytes);
}

#[test]
fn rule_file_workflow() {
    let rules = indoc! {"
        # name<TAB>pattern
        article\t^(el|la)$
        plural\ts$
    "};

    let mut set = PatternSet::new();
    for line in rules.lines().filter(|l| !l.starts_with('#')) {
        let (name, pattern) = line.split_once('\t').unwrap();
        set.compile(name, pattern).unwrap();
    }

    let mut file = tempfile::NamedTempFile::new().unwrap();
    set.write_to(&mut file).unwrap();

    let reloaded = PatternSet::read_from(std::fs::File::open(file.path()).unwrap()).unwrap();
    let mut word = String::from("gatos");
    assert!(reloaded
        .get("plural")
        .unwrap()
        .substitute_first(&mut word, "")
        .unwrap());
    assert_eq!(word, "gato");
    assert!(reloaded.get("article").unwrap().find("La").unwrap().is_some());
}

#[test]
fn replace_and_remove() {
    let mut set = sample();
    set.compile("plural", "es$").unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.get("plural").unwrap().find("gatos").unwrap(), None);

    assert!(set.remove("article").is_some());
    assert!(set.remove("article").is_none());
    assert_eq!(set.names().collect::<Vec<_>>(), ["plural", "diminutive"]);
}

#[test]
fn empty_store_cannot_be_written() {
    let mut set = sample();
    assert!(set.insert("todo", PatternStore::new()).is_none());
    assert!(matches!(set.to_bytes(), Err(Error::EmptyPattern)));
}

#[test]
fn empty_set_roundtrips() {
    let bytes = PatternSet::new().to_bytes().unwrap();
    let set = PatternSet::from_bytes(&bytes).unwrap();
    assert!(set.is_empty());
}

#[test]
fn corrupted_body_fails_checksum() {
    let mut bytes = sample().to_bytes().unwrap();
    let mid = tokre_format::HEADER_SIZE + (bytes.len() - tokre_format::HEADER_SIZE) / 2;
    bytes[mid] ^= 0x55;
    let err = PatternSet::from_bytes(&bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::CorruptData(FormatError::ChecksumMismatch { .. })
    ));
}

#[test]
fn truncated_file_is_corrupt() {
    let bytes = sample().to_bytes().unwrap();
    let err = PatternSet::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(err.is_corrupt());
}

#[test]
fn foreign_tag_is_rejected() {
    let payload = PatternStore::from_pattern("x").unwrap().to_bytes().unwrap();
    let (payload, _) = tokre_format::split_blob(&payload).unwrap();
    let bytes = tokre_format::encode_set(
        "regex-automata-0.3-be",
        [tokre_format::RawEntry { name: "x", payload }],
    )
    .unwrap();

    let err = PatternSet::from_bytes(&bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::CorruptData(FormatError::TagMismatch { .. })
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let payload = PatternStore::from_pattern("x").unwrap().to_bytes().unwrap();
    let (payload, _) = tokre_format::split_blob(&payload).unwrap();
    let entry = tokre_format::RawEntry { name: "x", payload };
    let bytes = tokre_format::encode_set(version_tag(), [entry, entry]).unwrap();

    let err = PatternSet::from_bytes(&bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::CorruptData(FormatError::DuplicateName(name)) if name == "x"
    ));
}

#[test]
fn loaded_stores_use_set_config() {
    let bytes = sample().to_bytes().unwrap();
    let config = Config::new().match_limit(Some(3));
    let set = PatternSet::from_bytes_with_config(&bytes, config).unwrap();
    let err = set.get("plural").unwrap().locate("gatos").unwrap_err();
    assert_eq!(err.engine_code(), Some(EngineCode::HaystackTooLong));
}
