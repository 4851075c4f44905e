mod assessment;

pub use assessment::Assessment;
