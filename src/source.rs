//! The [`Source`] data model.
//!
//! A source is a reference document (web page, local file, pasted snippet)
//! tracked by a stable `id`. At any moment it is in one of two completeness
//! states:
//!
//! | State | Guaranteed fields | Content |
//! |-------|------------------|---------|
//! | Pending | `id` | Not yet retrieved; metadata may be partial |
//! | Ready | `id`, `kind`, `token_count`, `text` | Fully populated |
//!
//! The two states are separate record types behind the [`Source`] enum, so a
//! value claiming readiness without its content is unrepresentable. Consumers
//! narrow through [`Source::text`], [`Source::token_count`], and
//! [`Source::kind`], which answer `None` for pending values even when the
//! pending record happens to carry a partially fetched field: "not yet known"
//! is not the same as "known".
//!
//! Promotion from pending to ready produces a new value
//! ([`PendingSource::into_ready`]); nothing here mutates in place. Fetching,
//! retry, and caching policy belong to whatever loader produces these values.
//!
//! # Example
//!
//! ```rust
//! use context_source::source::{PendingSource, Source};
//!
//! let pending = PendingSource::new("src-1")?.with_title("Example");
//! let source = Source::from(pending);
//! assert!(!source.is_ready());
//! assert_eq!(source.text(), None);
//! assert_eq!(source.title(), Some("Example"));
//!
//! let ready = source
//!     .into_pending()
//!     .unwrap()
//!     .into_ready("web", 42, "Hello world");
//! assert_eq!(ready.token_count(), 42);
//! # Ok::<(), context_source::SourceError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SourceError};
use crate::tokens::approx_token_count;

/// A reference document in either completeness state.
///
/// Serializes as a flat string-keyed map with a `ready` boolean discriminant
/// and camelCase field names (`type`, `tokenCount`, `fileName`); absent
/// optional fields are omitted rather than written as `null`. Deserializing a
/// map that claims `ready: true` without `type`, `tokenCount`, or `text`
/// fails with [`SourceError::InvalidSourceState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SourceRepr", try_from = "SourceRepr")]
pub enum Source {
    /// Known only by `id` (plus whatever metadata has arrived so far).
    Pending(PendingSource),
    /// Content retrieved and measured; all required fields present.
    Ready(ReadySource),
}

/// A source whose content has not been retrieved yet.
///
/// Only the `id` is guaranteed. The remaining fields may fill in piecemeal
/// while an external loader works (a `title` from a link preview, a
/// `file_name` from a picker), and are exposed here as partial data. The
/// checked accessors on [`Source`] ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingSource {
    id: String,
    kind: Option<String>,
    token_count: Option<u64>,
    text: Option<String>,
    title: Option<String>,
    file_name: Option<String>,
    summary: Option<String>,
}

/// A fully resolved source.
///
/// `kind`, `token_count`, and `text` are always present; a consumer holding a
/// `ReadySource` needs no further checks before using them. `token_count` is
/// measured in units of whatever tokenizer the producer used; `0` alongside
/// non-empty `text` is valid (text that could not be tokenized).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadySource {
    id: String,
    kind: String,
    token_count: u64,
    text: String,
    title: Option<String>,
    file_name: Option<String>,
    summary: Option<String>,
}

impl Source {
    /// Construct a pending source known only by `id`.
    pub fn pending(id: impl Into<String>) -> Result<Self> {
        Ok(Self::Pending(PendingSource::new(id)?))
    }

    /// Construct a ready source with all required fields.
    pub fn ready(
        id: impl Into<String>,
        kind: impl Into<String>,
        token_count: u64,
        text: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::Ready(ReadySource::new(id, kind, token_count, text)?))
    }

    /// The stable identifier, present in both states.
    pub fn id(&self) -> &str {
        match self {
            Self::Pending(p) => &p.id,
            Self::Ready(r) => &r.id,
        }
    }

    /// Whether content and required metadata are fully populated.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The source classifier (e.g. `"web"`, `"file"`), if ready.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Ready(r) => Some(&r.kind),
            Self::Pending(_) => None,
        }
    }

    /// The measured size of `text` in tokens, if ready.
    pub fn token_count(&self) -> Option<u64> {
        match self {
            Self::Ready(r) => Some(r.token_count),
            Self::Pending(_) => None,
        }
    }

    /// The full textual content, if ready.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Ready(r) => Some(&r.text),
            Self::Pending(_) => None,
        }
    }

    /// Human-readable label, if known. Available in both states.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Pending(p) => p.title.as_deref(),
            Self::Ready(r) => r.title.as_deref(),
        }
    }

    /// Originating file name, if known. Available in both states.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Pending(p) => p.file_name.as_deref(),
            Self::Ready(r) => r.file_name.as_deref(),
        }
    }

    /// Condensed representation of the content, if known. Available in both states.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Pending(p) => p.summary.as_deref(),
            Self::Ready(r) => r.summary.as_deref(),
        }
    }

    /// Narrow to the ready record, or `None` if still pending.
    pub fn as_ready(&self) -> Option<&ReadySource> {
        match self {
            Self::Ready(r) => Some(r),
            Self::Pending(_) => None,
        }
    }

    /// Narrow to the pending record, or `None` if already ready.
    pub fn as_pending(&self) -> Option<&PendingSource> {
        match self {
            Self::Pending(p) => Some(p),
            Self::Ready(_) => None,
        }
    }

    /// Consume into the ready record, or `None` if still pending.
    pub fn into_ready_source(self) -> Option<ReadySource> {
        match self {
            Self::Ready(r) => Some(r),
            Self::Pending(_) => None,
        }
    }

    /// Consume into the pending record, or `None` if already ready.
    pub fn into_pending(self) -> Option<PendingSource> {
        match self {
            Self::Pending(p) => Some(p),
            Self::Ready(_) => None,
        }
    }
}

impl From<PendingSource> for Source {
    fn from(p: PendingSource) -> Self {
        Self::Pending(p)
    }
}

impl From<ReadySource> for Source {
    fn from(r: ReadySource) -> Self {
        Self::Ready(r)
    }
}

impl PendingSource {
    /// Construct a pending source. Fails with [`SourceError::EmptyId`] if
    /// `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(SourceError::EmptyId);
        }
        Ok(Self {
            id,
            ..Self::default()
        })
    }

    /// Pre-populate a classifier hint before content arrives.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Pre-populate a title before content arrives.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pre-populate a file name before content arrives.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Partially fetched classifier, if any has arrived.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Partially fetched token count, if any has arrived.
    pub fn token_count(&self) -> Option<u64> {
        self.token_count
    }

    /// Partially fetched text, if any has arrived. This is in-flight data;
    /// it must not be treated as the final content.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Promote to a ready source once content retrieval and token counting
    /// complete.
    ///
    /// Consumes the pending value and produces a new one; any partial
    /// `title`, `file_name`, or `summary` carries over. The given `kind`,
    /// `token_count`, and `text` replace whatever partial values were in
    /// flight.
    pub fn into_ready(
        self,
        kind: impl Into<String>,
        token_count: u64,
        text: impl Into<String>,
    ) -> ReadySource {
        ReadySource {
            id: self.id,
            kind: kind.into(),
            token_count,
            text: text.into(),
            title: self.title,
            file_name: self.file_name,
            summary: self.summary,
        }
    }
}

impl ReadySource {
    /// Construct a ready source. Fails with [`SourceError::EmptyId`] if `id`
    /// is empty.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        token_count: u64,
        text: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(SourceError::EmptyId);
        }
        Ok(Self {
            id,
            kind: kind.into(),
            token_count,
            text: text.into(),
            title: None,
            file_name: None,
            summary: None,
        })
    }

    /// Construct a ready source whose `token_count` comes from the
    /// chars-per-token heuristic in [`crate::tokens`]. Use [`Self::new`] when
    /// an exact count from a real tokenizer is available.
    pub fn with_estimated_tokens(
        id: impl Into<String>,
        kind: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self> {
        let text = text.into();
        let token_count = approx_token_count(&text);
        Self::new(id, kind, token_count, text)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

/// Flat wire shape shared by both states.
///
/// `ready` is always written; every other optional field is omitted when
/// absent. Validation back into [`Source`] happens in the `TryFrom` below, so
/// malformed maps are rejected during deserialization rather than surfacing
/// later as a half-formed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceRepr {
    id: String,
    ready: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

impl From<Source> for SourceRepr {
    fn from(source: Source) -> Self {
        match source {
            Source::Pending(p) => Self {
                id: p.id,
                ready: false,
                kind: p.kind,
                token_count: p.token_count,
                text: p.text,
                title: p.title,
                file_name: p.file_name,
                summary: p.summary,
            },
            Source::Ready(r) => Self {
                id: r.id,
                ready: true,
                kind: Some(r.kind),
                token_count: Some(r.token_count),
                text: Some(r.text),
                title: r.title,
                file_name: r.file_name,
                summary: r.summary,
            },
        }
    }
}

impl TryFrom<SourceRepr> for Source {
    type Error = SourceError;

    fn try_from(repr: SourceRepr) -> Result<Self> {
        if repr.id.is_empty() {
            return Err(SourceError::EmptyId);
        }
        if repr.ready {
            let missing = |field| SourceError::InvalidSourceState {
                id: repr.id.clone(),
                field,
            };
            let kind = repr.kind.ok_or_else(|| missing("type"))?;
            let token_count = repr.token_count.ok_or_else(|| missing("tokenCount"))?;
            let text = repr.text.ok_or_else(|| missing("text"))?;
            Ok(Self::Ready(ReadySource {
                id: repr.id,
                kind,
                token_count,
                text,
                title: repr.title,
                file_name: repr.file_name,
                summary: repr.summary,
            }))
        } else {
            Ok(Self::Pending(PendingSource {
                id: repr.id,
                kind: repr.kind,
                token_count: repr.token_count,
                text: repr.text,
                title: repr.title,
                file_name: repr.file_name,
                summary: repr.summary,
            }))
        }
    }
}
