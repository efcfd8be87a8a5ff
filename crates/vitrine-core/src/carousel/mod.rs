mod rotator;
mod service;

pub use rotator::{position_for, CardPosition, CardSurface, RotationTick, Rotator};
pub use service::{CarouselCommand, CarouselEvent, CarouselService};
