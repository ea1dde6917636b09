#![allow(ambiguous_glob_reexports)]

pub mod callback_flip;
pub mod flip_coin;
pub mod fund_house;
pub mod initialize;
pub mod pause_program;
pub mod transfer_ownership;
pub mod trigger_callback;
pub mod unpause_program;
pub mod update_config;
pub mod withdraw_funds;

pub use callback_flip::*;
pub use flip_coin::*;
pub use fund_house::*;
pub use initialize::*;
pub use pause_program::*;
pub use transfer_ownership::*;
pub use trigger_callback::*;
pub use unpause_program::*;
pub use update_config::*;
pub use withdraw_funds::*;
