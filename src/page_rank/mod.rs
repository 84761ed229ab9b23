mod traits;
pub use self::traits::*;
mod table;
pub use self::table::RankTable;
pub mod transition;
pub use self::transition::{transition, TransitionModel};

pub mod iterated;
pub mod sampled;
