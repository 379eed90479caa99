//! Parsing, categorization and generation of FRESCO namelist input decks.

pub mod categorize;
pub mod domain;
pub mod generator;
pub mod namelist;
pub mod partition;
pub mod potential;
pub mod registry;
pub mod session;

pub use domain::{FrescoError, FrescoErrorCategory, FrescoResult, InputProfile, ReactionType};
pub use generator::generate_namelist_section;
pub use namelist::{NamelistDocument, NamelistValue, ParsedInput, parse};
pub use session::{FrescoSession, LoadSummary, SessionConfig, SessionOptions};
