mod button;
pub use button::*;

mod input;
pub use input::*;

mod shared;

mod switch;
pub use switch::*;
