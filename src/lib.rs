pub mod divider;
pub mod io;
pub mod lessons;
pub mod lookup;
pub mod patterns;
pub mod shapes;
pub mod sim;

// Prelude
pub use lookup::{DefinitionMap, Lexicon, ParallelLists};
pub use shapes::Shape;
pub use sim::diffusion::{
    DiffusionError, DiffusionParams, DiffusionSnapshot, ExplicitStepper, advance_one_step, run,
};
