pub mod access_error;
pub mod landing;
pub mod login;
