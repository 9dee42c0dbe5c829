//! Service Layer
//!
//! Talks to the external prediction service and runs the request off the
//! owner's thread.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   ForecastController                      │
//! └──────────────────────────────────────────────────────────┘
//!        │ build()             │ predict()          │ spawn
//!        ▼                     ▼                    ▼
//! ┌────────────────┐  ┌──────────────────────┐  ┌───────────┐
//! │ request_builder│  │ HttpPredictionClient │  │  runtime  │
//! │  (validation)  │  │  (POST /predict)     │  │  (tokio)  │
//! └────────────────┘  └──────────────────────┘  └───────────┘
//! ```

pub mod prediction;
pub mod request_builder;
pub mod runtime;

pub use prediction::*;
pub use runtime::*;
