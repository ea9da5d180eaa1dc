//! JSON-over-HTTP surface for the routing engine.
//!
//! | Method | Path            | Body           | Response        |
//! |--------|-----------------|----------------|-----------------|
//! | GET    | `/health`       |                | status, version |
//! | GET    | `/models`       |                | catalog         |
//! | POST   | `/select-model` | `QueryRequest` | `Selection`     |
//! | POST   | `/analyze`      | `QueryRequest` | `Analysis`      |
//! | POST   | `/orchestrate`  | `QueryRequest` | `Orchestration` |

pub mod handlers;
pub mod server;
pub mod types;

pub use server::{ServerHandle, build_router, serve_until, shutdown_signal, start_server};
pub use types::{ErrorResponse, QueryRequest};
