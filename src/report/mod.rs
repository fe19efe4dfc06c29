//! Reporting: the ranked list and the generated lookup script

pub mod ranking;
pub mod script;

pub use ranking::{
    build_ranking, round_rating, write_ranking, write_ranking_json, Medal, RankingEntry,
};
pub use script::{write_script, write_script_file, ScriptStyle};
