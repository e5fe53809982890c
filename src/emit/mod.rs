mod json;

pub use json::JsonOutput;
