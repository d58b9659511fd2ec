pub mod center;
pub mod content;
pub mod section;

pub use center::Center;
pub use content::Content;
