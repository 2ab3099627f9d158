//! World 1-1: a single-level side-scrolling platformer core.
//!
//! Everything in this crate is presentation-free.  A renderer reads a
//! [`view::FrameView`] each frame and an input layer feeds
//! [`player::HeldKeys`] plus confirm presses into [`compute`].

pub mod camera;
pub mod compute;
pub mod config;
pub mod enemy;
pub mod entities;
pub mod input;
pub mod level;
pub mod physics;
pub mod player;
pub mod rect;
pub mod view;
