mod ideas;
mod videos;

pub use ideas::IdeaCommands;
pub use videos::VideoCommands;
