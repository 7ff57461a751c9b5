mod common;
mod dataset;
pub(crate) mod de;
mod record;
mod view;

pub use common::*;
pub use dataset::*;
pub use record::{
    format_match_time, parse_match_time, MatchRecord, TeamEntry, MATCH_TIME_DISPLAY_FORMAT,
    MATCH_TIME_ZONE,
};
pub use view::*;
