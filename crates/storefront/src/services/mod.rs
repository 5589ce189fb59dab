//! External service clients.

pub mod recommend;
