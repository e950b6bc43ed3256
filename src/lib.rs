//! fileserve - HTTP/1.0 file server
//!
//! Serves GET and HEAD from the working directory and stores POST bodies
//! as files, one request per connection.

pub mod config;
pub mod http;
pub mod resource;
pub mod server;
