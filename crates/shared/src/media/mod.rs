mod cloudinary;

pub use self::cloudinary::{CloudinaryClient, sign_params};
