pub mod draft;
pub mod partner;
pub mod purchase;
pub mod template;
pub mod website;
pub mod wedding;
