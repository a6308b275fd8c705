pub mod random_code;

pub use random_code::generate_passcode;
