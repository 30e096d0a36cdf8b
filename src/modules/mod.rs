pub mod auth;
pub mod cv;
pub mod education;
pub mod message;
pub mod portfolio;
pub mod profile;
pub mod profile_image;
pub mod project;
pub mod skill;
