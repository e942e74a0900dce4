//! Systems - bodies and the resolvers that act on them each frame

pub mod rigid_body;
pub mod hit_test;
pub mod collision;
pub mod boundary;
