pub use access::*;
pub use filters::*;
pub use passwords::*;
pub use validation::*;

mod access;
mod filters;
mod passwords;
mod validation;
