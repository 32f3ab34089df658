//! Release-name parsing.
//!
//! Extracts structured metadata (title fragment, resolution, source tag,
//! year, season/episode) from free-text file names such as
//! `Some.Movie.2020.1080p.WEB-DL.x264.mkv`.

mod parser;

pub use parser::{parse, ParsedTitle, SeasonEpisode};
