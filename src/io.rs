//! Loading meshes from files.
pub mod summit;
