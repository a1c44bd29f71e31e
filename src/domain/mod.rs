pub mod color;
pub mod model;
pub mod zodiac;
