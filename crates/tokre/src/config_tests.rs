use super::*;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.get_match_limit(), Some(DEFAULT_MATCH_LIMIT));
    assert_eq!(config.get_dfa_size_limit(), Some(DEFAULT_DFA_SIZE_LIMIT));
    assert_eq!(config.get_determinize_size_limit(), None);
    assert_eq!(Config::new(), config);
}

#[test]
fn builder_overrides() {
    let config = Config::new()
        .match_limit(None)
        .dfa_size_limit(Some(1024))
        .determinize_size_limit(Some(2048));
    assert_eq!(config.get_match_limit(), None);
    assert_eq!(config.get_dfa_size_limit(), Some(1024));
    assert_eq!(config.get_determinize_size_limit(), Some(2048));
}

#[test]
fn store_keeps_its_config() {
    let config = Config::new().match_limit(Some(8));
    let store = PatternStore::with_config(config);
    assert_eq!(store.config(), &config);
}
