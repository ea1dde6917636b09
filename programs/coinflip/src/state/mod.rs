pub mod bet;
pub mod house;
pub mod player_state;

pub use bet::*;
pub use house::*;
pub use player_state::*;
