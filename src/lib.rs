mod dynarr;
mod errors;

pub use dynarr::{DynArr, IntoIter};
pub use errors::ArrayError;
