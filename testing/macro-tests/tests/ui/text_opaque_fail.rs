#![allow(dead_code)]

use trimmer::Trim;

#[derive(Trim)]
#[trim(text, opaque)]
pub struct Code(String);

fn main() {}
