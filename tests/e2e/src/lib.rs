//! Browser-driven checks of the site against a locally spawned web server.

pub mod browser;
pub mod test_server;
