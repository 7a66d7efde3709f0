mod path;

pub use path::{can_reach, path_length, path_length_between, path_length_to};
