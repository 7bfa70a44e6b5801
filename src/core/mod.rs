mod charset;
pub use charset::{Alphabet, Charset};

mod generate;
pub use generate::{
    bytes, bytes_with, hex, hex_with, must_bytes, must_hex, must_string, string, string_with,
};

mod source;
pub use source::{OsRandom, RandomSource};
