//! Keyword-based model routing.
//!
//! Everything here is a pure function of the query string.
//!
//! # Architecture
//!
//! ```text
//!       Query
//!         │
//!    ┌────┴─────┐
//!    ▼          ▼
//! ┌────────┐ ┌────────┐
//! │Analyzer│ │ Scorer │  ← rule table + floor + argmax
//! └───┬────┘ └───┬────┘
//!     └────┬─────┘
//!          ▼
//!   ┌──────────────┐
//!   │ Orchestrator │  ← merges both views
//!   └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use synergai::routing::{ModelId, select_model};
//!
//! let selection = select_model("write me a python function");
//! assert_eq!(selection.selected, ModelId::ChatGpt);
//! assert_eq!(selection.confidence, 1.0);
//! ```

mod analyzer;
mod catalog;
mod orchestrator;
mod scorer;

pub use analyzer::{Analysis, MAX_COMPLEXITY, TaskType, analyze};
pub use catalog::{CATALOG, ModelId, ModelInfo};
pub use orchestrator::{Orchestration, orchestrate};
pub use scorer::{
    FLOOR_SCORE, RULE_INCREMENT, RULES, ScoreVector, ScoringRule, Selection, score_models,
    select_model,
};
