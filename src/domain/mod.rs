//! Domain - what a session is made of: the scene bundle and its tunables

pub mod scene;
pub mod settings;
