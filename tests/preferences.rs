//! 偏好存储集成测试
//!
//! 验证语言偏好写入后在"新会话"（重新打开存储）中依然可读。

use pagevox::core::{resolve_target_language, PagevoxError};
use pagevox::preferences::Preferences;

#[test]
fn preference_survives_a_fresh_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.redb");

    {
        let preferences = Preferences::open(&path).expect("open store");
        assert_eq!(preferences.preferred_language().unwrap(), None);

        preferences.set_preferred_language("fr").expect("save");
        assert_eq!(
            preferences.preferred_language().unwrap().as_deref(),
            Some("fr")
        );
    }

    // 模拟新的会话：重新打开同一路径
    let preferences = Preferences::open(&path).expect("reopen store");
    assert_eq!(
        preferences.preferred_language().unwrap().as_deref(),
        Some("fr"),
        "Saved language must survive without re-selection"
    );
}

#[test]
fn explicit_selection_is_persisted_and_used() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.redb");
    let preferences = Preferences::open(&path).expect("open store");

    let resolved = resolve_target_language(Some("fr".to_string()), Some(&preferences)).unwrap();

    assert_eq!(resolved, "fr");
    assert_eq!(
        preferences.preferred_language().unwrap().as_deref(),
        Some("fr"),
        "Selecting a language must save it"
    );
}

#[test]
fn stored_preference_is_replayed_without_reselection() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.redb");

    {
        let preferences = Preferences::open(&path).expect("open store");
        resolve_target_language(Some("fr".to_string()), Some(&preferences)).unwrap();
    }

    // 新会话：不再显式选择语言
    let preferences = Preferences::open(&path).expect("reopen store");
    let resolved = resolve_target_language(None, Some(&preferences)).unwrap();

    assert_eq!(resolved, "fr", "The saved language drives the next run");
}

#[test]
fn no_selection_and_no_preference_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let preferences = Preferences::open(dir.path().join("preferences.redb")).expect("open store");

    assert!(matches!(
        resolve_target_language(None, Some(&preferences)),
        Err(PagevoxError::NoTargetLanguage)
    ));
    assert!(matches!(
        resolve_target_language(None, None),
        Err(PagevoxError::NoTargetLanguage)
    ));
}

#[test]
fn latest_selection_wins() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.redb");

    let preferences = Preferences::open(&path).expect("open store");
    preferences.set_preferred_language("fr").unwrap();
    preferences.set_preferred_language("es").unwrap();

    assert_eq!(
        preferences.preferred_language().unwrap().as_deref(),
        Some("es")
    );
}
