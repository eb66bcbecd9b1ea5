#![allow(dead_code)]

use trimmer::Trim;

#[derive(Trim)]
#[trim(opaque)]
pub struct Stamp {
    #[trim(skip)]
    raw: String,
}

fn main() {}
