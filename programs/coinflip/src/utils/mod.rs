pub mod ledger;
pub mod liquidity;
pub mod outcome;
pub mod payment;

pub use ledger::*;
pub use liquidity::*;
pub use outcome::*;
pub use payment::*;
