//! Pages module
//! Full-page views

pub mod landing;
