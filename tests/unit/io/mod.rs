pub mod cli;
pub mod manual;
