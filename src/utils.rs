pub mod string;
pub mod test;
