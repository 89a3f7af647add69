//! # Context Source
//!
//! The source-document data model for context pipelines.
//!
//! A [`Source`] is a reference document (web page, file, snippet) tracked by
//! an `id`, in one of two completeness states: **pending**, where only the
//! `id` is guaranteed and metadata may be partial, or **ready**, where the
//! content (`text`), its measured size (`token_count`), and its classifier
//! (`kind`) are fully populated. The two states are distinct record types
//! behind a sum type, so a value claiming readiness without its required
//! fields cannot be constructed; at the serde boundary the same claim is
//! rejected during deserialization.
//!
//! Loading, fetching, and caching are external concerns. This crate only
//! defines the shape that flows between a loader and its consumers, plus a
//! chars-per-token estimate for producers without a real tokenizer.
//!
//! ## Quick Start
//!
//! ```rust
//! use context_source::{PendingSource, Source};
//!
//! // Discovery knows the id (and maybe a title) before content arrives.
//! let pending = PendingSource::new("src-1")?.with_title("Example");
//!
//! // A fetch completing produces a new, fully populated value.
//! let ready = pending.into_ready("web", 42, "Hello world");
//! let source = Source::from(ready);
//! assert_eq!(source.text(), Some("Hello world"));
//! # Ok::<(), context_source::SourceError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`source`] | The `Source` model, construction, narrowing, promotion, and wire shape |
//! | [`tokens`] | Approximate token counting |
//! | [`error`] | Error taxonomy |

pub mod error;
pub mod source;
pub mod tokens;

pub use error::{Result, SourceError};
pub use source::{PendingSource, ReadySource, Source};
