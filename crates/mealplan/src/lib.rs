mod catalog;
mod drag;
mod grid;
mod picker;
mod plan;
mod planner;
mod source;
mod week;

pub use catalog::*;
pub use drag::*;
pub use grid::*;
pub use picker::*;
pub use plan::*;
pub use planner::*;
pub use source::*;
pub use week::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod store;

        pub use store::*;
    }
}
