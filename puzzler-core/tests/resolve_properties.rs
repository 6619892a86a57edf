//! Property tests for the cache -> gate -> credential -> fetch policy

use chrono::NaiveDate;
use proptest::prelude::*;
use puzzler_core::{
    FileCache, FixedClock, InputFetcher, PuzzleInputResolver, PuzzleKey, ResolveError, Session,
    SessionFile,
};
use puzzler_http::AocError;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Fetcher that counts calls and answers from a script
struct ScriptedFetcher {
    calls: Cell<usize>,
    sessions: RefCell<Vec<String>>,
    reply: Box<dyn Fn(PuzzleKey) -> Result<String, AocError>>,
}

impl ScriptedFetcher {
    fn new(reply: impl Fn(PuzzleKey) -> Result<String, AocError> + 'static) -> Self {
        Self {
            calls: Cell::new(0),
            sessions: RefCell::new(Vec::new()),
            reply: Box::new(reply),
        }
    }

    fn body(body: &'static str) -> Self {
        Self::new(move |_| Ok(body.to_string()))
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl InputFetcher for ScriptedFetcher {
    fn fetch_input(&self, key: PuzzleKey, session: &str) -> Result<String, AocError> {
        self.calls.set(self.calls.get() + 1);
        self.sessions.borrow_mut().push(session.to_string());
        (self.reply)(key)
    }
}

/// 2024-12-10: window is day 10 of 2024
fn december_tenth() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2024, 12, 10).unwrap())
}

fn session() -> Option<Session> {
    Session::new("cafebabe")
}

fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_cached_input_returned_verbatim_without_fetch(
        year in 2015u16..2100u16,
        day in 1u8..=24u8,
        content in "[ -~\n]{0,200}",
    ) {
        let temp = TempDir::new().unwrap();
        let cache = FileCache::new(temp.path());
        let key = PuzzleKey::new(year, day);
        fs::write(cache.cache_path(key), &content).unwrap();

        let fetcher = ScriptedFetcher::body("should not be fetched");
        let resolver = PuzzleInputResolver::new(cache, session(), december_tenth(), &fetcher);

        prop_assert_eq!(resolver.resolve(key).unwrap(), content);
        prop_assert_eq!(fetcher.calls(), 0);
        prop_assert_eq!(file_count(temp.path()), 1);
    }

    #[test]
    fn prop_future_day_is_unreleased_without_fetch(
        year in 2015u16..=2024u16,
        day in 11u8..=24u8,
    ) {
        let temp = TempDir::new().unwrap();
        let fetcher = ScriptedFetcher::body("input");
        let resolver = PuzzleInputResolver::new(
            FileCache::new(temp.path()),
            session(),
            december_tenth(),
            &fetcher,
        );

        let result = resolver.resolve(PuzzleKey::new(year, day));
        let is_unreleased = matches!(result, Err(ResolveError::UnreleasedPuzzle { .. }));
        prop_assert!(is_unreleased, "expected UnreleasedPuzzle, got {:?}", result);
        prop_assert_eq!(fetcher.calls(), 0);
        prop_assert_eq!(file_count(temp.path()), 0);
    }

    #[test]
    fn prop_future_year_is_unreleased_without_fetch(
        year in 2025u16..2100u16,
        day in 1u8..=10u8,
    ) {
        let temp = TempDir::new().unwrap();
        let fetcher = ScriptedFetcher::body("input");
        let resolver = PuzzleInputResolver::new(
            FileCache::new(temp.path()),
            session(),
            december_tenth(),
            &fetcher,
        );

        let result = resolver.resolve(PuzzleKey::new(year, day));
        let is_unreleased = matches!(result, Err(ResolveError::UnreleasedPuzzle { .. }));
        prop_assert!(is_unreleased, "expected UnreleasedPuzzle, got {:?}", result);
        prop_assert_eq!(fetcher.calls(), 0);
    }

    #[test]
    fn prop_released_key_without_credential_is_missing(
        year in 2015u16..=2024u16,
        day in 1u8..=10u8,
    ) {
        let temp = TempDir::new().unwrap();
        let fetcher = ScriptedFetcher::body("input");
        let resolver = PuzzleInputResolver::new(
            FileCache::new(temp.path()),
            None::<Session>,
            december_tenth(),
            &fetcher,
        );

        let result = resolver.resolve(PuzzleKey::new(year, day));
        let is_missing = matches!(result, Err(ResolveError::CredentialMissing { .. }));
        prop_assert!(is_missing, "expected CredentialMissing, got {:?}", result);
        prop_assert_eq!(fetcher.calls(), 0);
        prop_assert_eq!(file_count(temp.path()), 0);
    }
}

#[test]
fn test_fetch_writes_once_then_serves_from_cache() {
    let temp = TempDir::new().unwrap();
    let fetcher = ScriptedFetcher::new(|key| Ok(format!("input for {}\n1 2 3\n", key)));
    let resolver =
        PuzzleInputResolver::new(FileCache::new(temp.path()), session(), december_tenth(), &fetcher);
    let key = PuzzleKey::new(2024, 4);

    let first = resolver.resolve(key).unwrap();
    assert_eq!(first, "input for 2024/day04\n1 2 3\n");
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(file_count(temp.path()), 1);
    assert_eq!(
        fs::read_to_string(temp.path().join("2024-day-4-puzzle-input.txt")).unwrap(),
        first
    );

    let second = resolver.resolve(key).unwrap();
    assert_eq!(second, first);
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_session_token_is_passed_to_fetcher() {
    let temp = TempDir::new().unwrap();
    let fetcher = ScriptedFetcher::body("42\n");
    let resolver =
        PuzzleInputResolver::new(FileCache::new(temp.path()), session(), december_tenth(), &fetcher);

    resolver.resolve(PuzzleKey::new(2023, 1)).unwrap();
    assert_eq!(*fetcher.sessions.borrow(), vec!["cafebabe".to_string()]);
}

#[test]
fn test_rejection_body_is_not_yet_available_and_not_cached() {
    let temp = TempDir::new().unwrap();
    let fetcher =
        ScriptedFetcher::body("Please don't repeatedly request this endpoint before it unlocks!");
    let resolver =
        PuzzleInputResolver::new(FileCache::new(temp.path()), session(), december_tenth(), &fetcher);

    let result = resolver.resolve(PuzzleKey::new(2024, 10));
    assert!(matches!(result, Err(ResolveError::NotYetAvailable { .. })));
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(file_count(temp.path()), 0);
}

#[test]
fn test_server_side_not_released_maps_to_not_yet_available() {
    let temp = TempDir::new().unwrap();
    let fetcher = ScriptedFetcher::new(|_| Err(AocError::NotReleased));
    let resolver =
        PuzzleInputResolver::new(FileCache::new(temp.path()), session(), december_tenth(), &fetcher);

    let result = resolver.resolve(PuzzleKey::new(2024, 10));
    assert!(matches!(result, Err(ResolveError::NotYetAvailable { .. })));
    assert_eq!(file_count(temp.path()), 0);
}

#[test]
fn test_transport_failure_surfaces_and_is_not_retried() {
    let temp = TempDir::new().unwrap();
    let fetcher = ScriptedFetcher::new(|_| Err(AocError::Encoding));
    let resolver =
        PuzzleInputResolver::new(FileCache::new(temp.path()), session(), december_tenth(), &fetcher);
    let key = PuzzleKey::new(2022, 3);

    match resolver.resolve(key) {
        Err(ResolveError::NetworkFailure { key: failed, source }) => {
            assert_eq!(failed, key);
            assert!(matches!(source, AocError::Encoding));
        }
        other => panic!("expected NetworkFailure, got {:?}", other),
    }
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(file_count(temp.path()), 0);
}

#[test]
fn test_day_one_fetchable_outside_event_season() {
    let temp = TempDir::new().unwrap();
    let fetcher = ScriptedFetcher::body("abc\n");
    // Day 27 clamps to day 1
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 27).unwrap());
    let resolver = PuzzleInputResolver::new(FileCache::new(temp.path()), session(), clock, &fetcher);

    assert_eq!(resolver.resolve(PuzzleKey::new(2024, 1)).unwrap(), "abc\n");
    assert!(matches!(
        resolver.resolve(PuzzleKey::new(2024, 2)),
        Err(ResolveError::UnreleasedPuzzle { .. })
    ));
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn test_end_to_end_with_http_client() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2023/day/5/input")
        .match_header("cookie", "session=cafebabe")
        .with_status(200)
        .with_body("seeds: 79 14 55 13\n")
        .expect(1)
        .create();

    let client = puzzler_http::AocClient::builder()
        .base_url(server.url())
        .unwrap()
        .build()
        .unwrap();
    let temp = TempDir::new().unwrap();
    let resolver =
        PuzzleInputResolver::new(FileCache::new(temp.path()), session(), december_tenth(), client);
    let key = PuzzleKey::new(2023, 5);

    assert_eq!(resolver.resolve(key).unwrap(), "seeds: 79 14 55 13\n");
    assert_eq!(resolver.resolve(key).unwrap(), "seeds: 79 14 55 13\n");
    assert!(resolver.cache().contains(key));

    mock.assert();
}

#[test]
fn test_end_to_end_not_found_rejection() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2024/day/9/input")
        .with_status(404)
        .with_body("Please don't repeatedly request this endpoint before it unlocks!")
        .expect(1)
        .create();

    let client = puzzler_http::AocClient::builder()
        .base_url(server.url())
        .unwrap()
        .build()
        .unwrap();
    let temp = TempDir::new().unwrap();
    let resolver =
        PuzzleInputResolver::new(FileCache::new(temp.path()), session(), december_tenth(), client);

    assert!(matches!(
        resolver.resolve(PuzzleKey::new(2024, 9)),
        Err(ResolveError::NotYetAvailable { .. })
    ));
    assert_eq!(file_count(temp.path()), 0);

    mock.assert();
}

#[test]
fn test_unreadable_session_file_only_matters_when_fetching() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("inputs");
    let session_path = temp.path().join(SessionFile::DEFAULT_FILE_NAME);
    fs::write(&session_path, [0xff, 0xfe, 0x00]).unwrap();

    let cache = FileCache::new(&cache_dir);
    let cached = PuzzleKey::new(2020, 1);
    cache.put(cached, "1721\n979\n").unwrap();

    let fetcher = ScriptedFetcher::body("input");
    let resolver = PuzzleInputResolver::new(
        cache,
        SessionFile::load_or_disabled(&session_path),
        december_tenth(),
        &fetcher,
    );

    assert_eq!(resolver.resolve(cached).unwrap(), "1721\n979\n");
    assert!(matches!(
        resolver.resolve(PuzzleKey::new(2020, 2)),
        Err(ResolveError::CredentialMissing { .. })
    ));
    assert_eq!(fetcher.calls(), 0);
}
