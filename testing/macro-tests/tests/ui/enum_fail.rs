#![allow(dead_code)]

use trimmer::Trim;

#[derive(Trim)]
pub enum Choice {
    First(String),
    Second,
}

fn main() {}
