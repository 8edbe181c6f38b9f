pub mod gamers;
pub mod scores;

pub use gamers::Entity as Gamers;
pub use gamers::Model as Gamer;
pub use scores::Entity as Scores;
pub use scores::Model as Score;
