pub mod company;
pub mod editor;
pub mod gallery;
pub mod login;
pub mod partner;
