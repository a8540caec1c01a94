pub mod client;

pub use crate::domain::model::{User, UserId};
pub use crate::domain::ports::{ConfigProvider, UserSource};
pub use crate::utils::error::Result;
