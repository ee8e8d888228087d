mod card;
mod floating_turtles;
mod turtle_icon;

pub use card::Card;
pub use floating_turtles::FloatingTurtles;
pub use turtle_icon::TurtleIcon;
