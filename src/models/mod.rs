pub mod dataset;
pub mod record;
pub mod report;
pub mod series;

pub use dataset::*;
pub use record::*;
pub use report::*;
pub use series::*;
