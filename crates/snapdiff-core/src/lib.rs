pub mod config;
pub mod logging;

// Flow A: fetch and persist
pub mod download;
pub mod fetch;
pub mod naming;
pub mod persist;

// Flow B: visual diff report
pub mod pixel_diff;
pub mod report;
pub mod url_diff;
