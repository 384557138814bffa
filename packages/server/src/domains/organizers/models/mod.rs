pub mod organizer;

pub use organizer::Organizer;
