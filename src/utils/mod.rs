//! Input validation shared by the engine, the CLI, and the web server.

pub mod validation;
