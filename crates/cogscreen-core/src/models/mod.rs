pub mod answer;
pub mod domain;
pub mod report;
