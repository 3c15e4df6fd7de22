//! # Backend crate: native service core for Formcraft
//!
//! Everything here runs on the server only: it is linked by the `web` binary, the
//! `seed-user` admin tool, and the server half of the `api` crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`settings`] | Layered configuration (`config` crate): defaults, `formcraft.toml`, environment |
//! | [`telemetry`] | `tracing-subscriber` bootstrap |
//! | [`database`] | PostgreSQL pool lifecycle: explicit connect / migrate / close, plus scoped use |
//! | [`pg`] | [`PgStore`], the PostgreSQL implementation of `store::FormStore` and `store::UserStore` |
//! | [`password`] | Argon2id hashing and verification |
//! | [`error`] | [`ApiError`], mapped to HTTP status codes and JSON bodies |
//! | [`forms`] | Form endpoints, including the publish toggle |
//! | [`app`] | The axum router for the JSON API |
//! | [`seed`] | Create-or-rotate user credentials |

pub mod app;
pub mod database;
pub mod error;
pub mod forms;
pub mod password;
pub mod pg;
pub mod seed;
pub mod settings;
mod state;
pub mod telemetry;

pub use database::Database;
pub use error::{ApiError, ApiResult};
pub use pg::PgStore;
pub use settings::Settings;
pub use state::AppState;
