pub mod clock;
pub mod fakes;
pub mod logging;
