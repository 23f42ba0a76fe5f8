extern crate clap;
extern crate dirlist;

pub mod cli;
pub mod error;
pub mod utils;
