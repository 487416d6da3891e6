//! Display formatting for models, collections and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and results get newtype wrappers so empty lists and headers are handled
//! in one place. Everything renders as markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Chat, Product) │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: product pages, chat list, category carousel, contacts
//! - [`conversation`]: the single-chat view
//! - [`results`]: records produced by wizards
//! - [`status`]: one-line success and failure messages
//! - [`navigation`]: tab bar and unread badge
//! - [`datetime`]: relative chat time labels
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use souk_core::display::{OperationStatus, UnreadBadge};
//!
//! assert_eq!(UnreadBadge(120).to_string(), "99+");
//!
//! let status = OperationStatus::success("Group created");
//! assert_eq!(status.to_string(), "Success: Group created\n");
//! ```

pub mod collections;
pub mod conversation;
pub mod datetime;
pub mod models;
pub mod navigation;
pub mod results;
pub mod status;

pub use collections::{Categories, ChatSummaries, Contacts, ProductPage};
pub use conversation::Conversation;
pub use datetime::{relative_label, RelativeTime};
pub use models::Price;
pub use navigation::{TabBar, UnreadBadge, BADGE_MAX};
pub use results::CreateResult;
pub use status::OperationStatus;
