pub mod config;
pub mod dom;
pub mod effects;
pub mod error;
pub mod pages {
    pub mod landing;
}
