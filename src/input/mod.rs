//! Line-oriented text inputs: the roster and the match results

pub mod matches;
pub mod roster;

pub use matches::{load_matches, parse_match_line, parse_matches};
pub use roster::{build_table, load_roster, parse_roster};
