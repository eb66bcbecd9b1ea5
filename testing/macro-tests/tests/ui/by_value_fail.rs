#![allow(dead_code)]

use trimmer::Trim;

#[derive(Trim)]
pub struct Signup {
    pub name: String,
}

fn main() {
    let signup = Signup {
        name: " Ada ".to_string(),
    };

    let _ = trimmer::trim_strings(signup);
}
