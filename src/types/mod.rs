pub mod dimension;
pub mod evidence;
pub mod report;
pub mod scoring;
