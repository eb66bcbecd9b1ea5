#![allow(dead_code)]

use trimmer::Trim;

#[derive(Trim)]
pub struct Tag {
    #[trim(lowercase)]
    name: String,
}

fn main() {}
