pub mod due;
pub mod ledger;
pub mod run;
