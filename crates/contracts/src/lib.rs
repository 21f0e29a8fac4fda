//! Wire contracts shared between the browser client and the backend.

pub mod chat;
