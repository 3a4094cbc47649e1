mod match_detail;
mod team;
mod view;

pub use match_detail::*;
pub use team::*;
pub use view::*;
