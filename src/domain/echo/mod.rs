pub mod dto;
pub mod handler;
pub mod service;
pub mod validator;

pub use handler::echo_handler;
