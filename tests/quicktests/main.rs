#[path = "../../src/test/quick.rs"]
mod quick;

mod cursor;
mod tree;

pub(crate) use quick::Op;
