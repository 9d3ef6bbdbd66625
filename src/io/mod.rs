/// Command-line parsing and session orchestration
pub mod cli;
/// Size limits and defaults
pub mod configuration;
/// Error taxonomy shared by every loader
pub mod error;
/// Interactive image entry
pub mod manual;
/// Plain PBM file loading
pub mod pbm;
/// Grid and code output
pub mod presenter;
/// Token readers for bitmap text and console input
pub mod tokens;
