pub mod hashed;
pub mod linear;
pub mod persistent;
pub mod sorted;

pub use hashed::HashContainer;
pub use linear::LinearContainer;
pub use persistent::{PersistentBuilder, PersistentContainer};
pub use sorted::{SortedContainer, SortedVecMap};
