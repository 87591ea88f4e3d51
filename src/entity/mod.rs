//! SeaORM entity definitions.

pub mod case_platform;
pub mod expectation;
pub mod platform;
pub mod precondition;
pub mod product;
pub mod related_case;
pub mod release;
pub mod run;
pub mod run_case;
pub mod step;
pub mod test_case;
