pub mod bet_accepted;
pub mod bet_settled;
pub mod config_updated;
pub mod funds_withdrawn;
pub mod house_funded;
pub mod house_initialized;
pub mod ownership_transferred;
pub mod program_paused;
pub mod program_unpaused;

pub use bet_accepted::*;
pub use bet_settled::*;
pub use config_updated::*;
pub use funds_withdrawn::*;
pub use house_funded::*;
pub use house_initialized::*;
pub use ownership_transferred::*;
pub use program_paused::*;
pub use program_unpaused::*;
