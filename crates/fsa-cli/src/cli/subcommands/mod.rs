mod icon;
mod lab;
mod nav;
mod progress;

pub use icon::IconCommands;
pub use lab::LabCommands;
pub use nav::NavCommands;
pub use progress::ProgressCommands;
