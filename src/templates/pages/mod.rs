pub mod details;
pub mod error;
pub mod favorites;
pub mod home;
pub mod map;

pub use details::details_page;
pub use error::error_page;
pub use favorites::favorites_page;
pub use home::home_page;
pub use map::map_page;
