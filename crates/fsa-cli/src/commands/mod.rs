pub mod dispatch;
pub mod icon;
pub mod lab;
pub mod nav;
pub mod progress;
pub mod prompts;
