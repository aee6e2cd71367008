pub mod deep_link;
pub mod dto;
pub mod handlers;
