//! Terminal UI: main menu, scoreboard, and the game view. A thin shell over
//! [`GameSession`](crate::game::GameSession) that owns all rendering and the
//! computer-move delay.

mod app;
mod game_view;
mod menu_view;

pub use app::{App, MenuItem, Screen, MENU_ITEMS};
