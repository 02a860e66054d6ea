#![allow(dead_code)]

pub mod fakes;
pub mod memory_fs;
