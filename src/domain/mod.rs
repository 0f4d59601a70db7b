pub mod crime;
pub mod favorite;
pub mod selection;

pub use crime::{build_crime_chart, CrimeChart};
pub use favorite::{FavoriteHouse, SavedFavorite};
pub use selection::{PropertySelection, SelectionContext};
