#![allow(unused_imports)]

pub mod constants;
pub mod entities;
pub mod value_objects;

pub use constants::PAGE_SIZE;
pub use entities::{
    Art, ArtFile, Feedback, FeedbackStatus, Notification, Project, Session, SessionState,
    SharedLink, Task, UserProfile,
};
pub use value_objects::ShareToken;
