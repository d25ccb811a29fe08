pub mod report;
pub mod util;
