//! End-to-end tests for the match-and-rank engine.
//!
//! These exercise the full public surface: descriptor in, provider fan-out,
//! ranked stream list out.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use streamrank_core::{
    load_config_from_str, EngineConfig, RawHit, SearchError, SearchProvider, ShowDescriptor,
    StreamRanker,
};

/// Provider backed by a canned query -> hits map, recording every query.
struct CannedProvider {
    hits_by_query: HashMap<String, Vec<RawHit>>,
    recorded_queries: Mutex<Vec<String>>,
}

impl CannedProvider {
    fn new(entries: Vec<(&str, Vec<RawHit>)>) -> Self {
        Self {
            hits_by_query: entries
                .into_iter()
                .map(|(q, hits)| (q.to_string(), hits))
                .collect(),
            recorded_queries: Mutex::new(Vec::new()),
        }
    }

    async fn recorded(&self) -> Vec<String> {
        self.recorded_queries.lock().await.clone()
    }
}

#[async_trait]
impl SearchProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn search(&self, query: &str) -> Result<Vec<RawHit>, SearchError> {
        self.recorded_queries.lock().await.push(query.to_string());
        Ok(self.hits_by_query.get(query).cloned().unwrap_or_default())
    }
}

fn hit(ident: &str, name: &str, language: Option<&str>, pos_votes: u32, size_bytes: u64) -> RawHit {
    RawHit {
        ident: ident.to_string(),
        name: name.to_string(),
        language: language.map(str::to_string),
        pos_votes,
        size_bytes,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_movie_search_ranks_matching_year_first() {
    let show = ShowDescriptor::movie("Soul", Some(2020));
    let provider = CannedProvider::new(vec![
        (
            "Soul",
            vec![
                hit("wrong-year", "Soul.2015.DVDRip.x264.mkv", None, 90, 700 << 20),
                hit("plain", "Soul.2020.720p.WEB.mkv", None, 3, 2 << 30),
            ],
        ),
        (
            "Soul 2020",
            vec![hit("hd", "Soul.2020.1080p.WEB-DL.mkv", None, 12, 4 << 30)],
        ),
    ]);

    let ranker = StreamRanker::new(EngineConfig::default());
    let streams = ranker.search_and_rank(&show, &provider).await.unwrap();

    // The 2015 release is a different film and must be filtered out.
    let idents: Vec<_> = streams.iter().map(|s| s.ident.as_str()).collect();
    assert_eq!(idents, vec!["hd", "plain"]);

    // Both queries were dispatched.
    let queries = provider.recorded().await;
    assert!(queries.contains(&"Soul".to_string()));
    assert!(queries.contains(&"Soul 2020".to_string()));
}

#[tokio::test]
async fn test_series_search_uses_both_episode_notations() {
    let show = ShowDescriptor::series("Dark", 2, 5);
    let provider = CannedProvider::new(vec![
        (
            "Dark S02E05",
            vec![hit("sxxexx", "Dark.S02E05.1080p.WEB.mkv", None, 5, 2 << 30)],
        ),
        (
            "Dark 02x05",
            vec![hit("nxn", "Dark.2x05.720p.HDTV.mkv", None, 2, 1 << 30)],
        ),
    ]);

    let ranker = StreamRanker::new(EngineConfig::default());
    let streams = ranker.search_and_rank(&show, &provider).await.unwrap();

    let mut idents: Vec<_> = streams.iter().map(|s| s.ident.as_str()).collect();
    idents.sort_unstable();
    assert_eq!(idents, vec!["nxn", "sxxexx"]);

    let queries = provider.recorded().await;
    assert_eq!(queries.len(), 2);
}

#[tokio::test]
async fn test_multiple_name_variants_expand_and_dedupe() {
    let mut show = ShowDescriptor::movie("Soul", Some(2020));
    show.local_name = Some("Duse".to_string());

    let shared = hit("same", "Soul.2020.1080p.WEB.mkv", None, 4, 3 << 30);
    let provider = CannedProvider::new(vec![
        ("Soul", vec![shared.clone()]),
        ("Duse", vec![shared.clone()]),
        ("Soul 2020", vec![shared.clone()]),
        ("Duse 2020", vec![shared]),
    ]);

    let ranker = StreamRanker::new(EngineConfig::default());
    let streams = ranker.search_and_rank(&show, &provider).await.unwrap();

    // Same file found by all four queries collapses to one stream.
    assert_eq!(streams.len(), 1);
    assert_eq!(provider.recorded().await.len(), 4);
}

#[tokio::test]
async fn test_preferred_language_ranks_first_despite_lower_score() {
    let config = load_config_from_str(
        r#"
[ranking]
preferred_languages = ["cs", "sk"]
"#,
    )
    .unwrap();

    let show = ShowDescriptor::movie("Soul", Some(2020));
    let provider = CannedProvider::new(vec![(
        "Soul 2020",
        vec![
            hit("en", "Soul.2020.2160p.WEB.mkv", Some("en"), 50, 12 << 30),
            hit("cs", "Soul.2020.720p.WEB.mkv", Some("cs"), 1, 1 << 30),
        ],
    )]);

    let ranker = StreamRanker::new(config);
    let streams = ranker.search_and_rank(&show, &provider).await.unwrap();

    let idents: Vec<_> = streams.iter().map(|s| s.ident.as_str()).collect();
    assert_eq!(idents, vec!["cs", "en"]);
}

#[tokio::test]
async fn test_configured_provider_shapes_output() {
    let config = load_config_from_str(
        r#"
[provider]
label = "Acme Streams"
stream_url_base = "https://cdn.acme.test/file/"
"#,
    )
    .unwrap();

    let show = ShowDescriptor::movie("Soul", Some(2020));
    let provider = CannedProvider::new(vec![(
        "Soul 2020",
        vec![hit("xyz", "Soul.2020.1080p.WEB.mkv", Some("en"), 7, 2 << 30)],
    )]);

    let ranker = StreamRanker::new(config);
    let streams = ranker.search_and_rank(&show, &provider).await.unwrap();

    let stream = &streams[0];
    assert_eq!(stream.url, "https://cdn.acme.test/file/xyz");
    assert_eq!(stream.name, "Acme Streams 1080p");
    assert!(stream.binge_group.starts_with("Acme Streams|en|1080p|"));
}
