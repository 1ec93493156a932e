mod bounded;
mod mersenne;
mod order;
mod sobol;


pub use bounded::bounded;
pub use mersenne::Mt19937;
pub use order::PixelOrder;
pub use sobol::{grid_index, Sobol2d};
