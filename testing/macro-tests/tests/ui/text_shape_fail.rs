#![allow(dead_code)]

use trimmer::Trim;

#[derive(Trim)]
#[trim(text)]
pub struct Name {
    value: String,
}

fn main() {}
