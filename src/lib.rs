//! Render capture-the-flag tournament results into browser view trees.
//!
//! Every component under [`view`] is a pure function from match data to a
//! [`Node`] tree; [`TourneyRenderer`] bundles them with a [`RenderConfig`].

pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod renderer;
pub mod view;

pub use config::RenderConfig;
pub use error::{Result, TourneyError};
pub use feed::{parse_matches, FeedEntry};
pub use model::*;
pub use renderer::TourneyRenderer;
pub use view::last_element;
