mod dir;
mod name;

pub use dir::ProjectDir;
pub use name::{NameError, ProjectName};
