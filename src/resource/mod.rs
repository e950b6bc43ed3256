//! File-backed resources
//!
//! GET and HEAD read files below the document root, POST creates or
//! truncates them. No locking is done: concurrent writers to the same path
//! race and the last one wins.

pub mod handler;
