//! Stateless per-table repositories.
//!
//! Every method takes `&Connection`; transactions are composed one
//! level up in [`crate::service::BoardService`]. Repositories do plain
//! CRUD — domain rules (membership checks, validation) do not live
//! here.

pub mod account;
pub mod group;
pub mod membership;
pub mod note;
pub mod summary;

pub use account::{AccountRepo, CreateAccountOptions};
pub use group::{CreateGroupOptions, GroupRepo};
pub use membership::{MembershipRepo, UpsertMembershipOutcome};
pub use note::{CreateNoteOptions, NoteRepo};
pub use summary::{CreateSummaryOptions, SummaryRepo};
