pub mod budget;
pub mod capital;
pub mod cash_flow;
pub mod cell;
pub mod financial;
pub mod operational;
pub mod project;
pub mod risk;
pub mod snapshot;
