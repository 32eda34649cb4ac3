//! Note ingestion and retrieval.
//!
//! A note is the persisted body of one inbound email, scoped to a user, with
//! zero or more binary attachments. Notes are immutable once written.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/note/{id}` | Download a note's body as a text document |

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::NoteService;
