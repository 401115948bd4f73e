//! Messages exchanged with a chat model.

pub mod entities;
