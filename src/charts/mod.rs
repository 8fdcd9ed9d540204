pub mod correlation;
pub mod figure;
pub mod histogram;
pub mod pie;
pub mod scatter;

pub use figure::ChartDescription;
