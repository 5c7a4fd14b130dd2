//! gdash dashboard application
//!
//! Wires the i18n core, the game catalog and the configuration layer into
//! the dashboard state machine, and keeps that state bidirectionally in sync
//! with the address URL: user actions push new URLs, back/forward navigation
//! reads the URL back into dashboard and store state.

pub mod card;
pub mod dashboard;
pub mod history;
pub mod url_state;

pub use card::{mechanic_options, render_card, GameCard, MechanicOption};
pub use dashboard::Dashboard;
pub use history::Navigator;
pub use url_state::{
    read_state, validate_grade, write_state, QueryState, StateUpdate, ALL_TAB, DEFAULT_GRADE,
    GRADES,
};
