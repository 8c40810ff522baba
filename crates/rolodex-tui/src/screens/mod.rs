//! Screen implementations. Each screen is a top-level Component.

pub mod directory;
pub mod person;

use crate::component::Component;
use crate::screen::ScreenId;

/// Create one component per screen.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Directory,
            Box::new(directory::DirectoryScreen::new()),
        ),
        (ScreenId::Person, Box::new(person::PersonScreen::new())),
    ]
}
