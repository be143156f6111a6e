//! Distance and travel time computation.

mod matrix;
mod travel;

pub use matrix::DistanceMatrix;
pub use travel::TravelTimes;
