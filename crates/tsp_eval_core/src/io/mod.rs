pub mod instance;
pub mod options;
pub mod tour;
