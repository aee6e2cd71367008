#![allow(unused_imports)]

pub mod pkce;
pub mod share_token;

pub use pkce::PkcePair;
pub use share_token::ShareToken;
