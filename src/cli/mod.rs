pub mod plans;
pub mod server;
pub mod week;
