mod favorite_controller;

pub use favorite_controller::{add_favorite, get_all_favorites, is_favorite, remove_favorite};
