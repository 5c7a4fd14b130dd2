//! Game catalog support for the gdash dashboard
//!
//! The catalog is an ordered list of [`Game`] records supplied by external
//! data files. This crate owns the read-only view the dashboard consumes:
//! loading, the SCORM-data merge pass, and the grade/ALL-tab filtering rules.

pub mod error;
pub mod filter;
pub mod games;
pub mod scorm;

pub use error::{CatalogError, CatalogResult};
pub use filter::{filter_by_grade, unique_by_game_name, visible_games, HIDDEN_GAME_ID};
pub use games::{load_catalog, load_scorm_data, Game, GameMechanic, ScormDataEntry};
pub use scorm::{game_from_scorm, merge_scorm_data, parse_base_url};
