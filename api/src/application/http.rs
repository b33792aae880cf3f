pub mod analysis;
pub mod functions;
pub mod health;
pub mod server;
