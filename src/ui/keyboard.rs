/// Keyboard routing for the gallery viewer
///
/// The listener is an iced subscription. The grid only returns it while a
/// modal is mounted, and the runtime tears a subscription down as soon as
/// it stops being returned, so every way of closing the modal releases it.
use iced::keyboard::{self, key::Named, Key};
use iced::Subscription;

use super::gallery_modal::Message;

/// Escape closes, arrows navigate; every other key is ignored
pub fn map_key(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::Close),
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        _ => None,
    }
}

/// Window-wide key listener for the mounted modal
pub fn listener() -> Subscription<Message> {
    keyboard::on_key_press(|key, _modifiers| map_key(&key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_keys() {
        assert_eq!(map_key(&Key::Named(Named::Escape)), Some(Message::Close));
        assert_eq!(map_key(&Key::Named(Named::ArrowLeft)), Some(Message::Previous));
        assert_eq!(map_key(&Key::Named(Named::ArrowRight)), Some(Message::Next));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(map_key(&Key::Named(Named::Enter)), None);
        assert_eq!(map_key(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(map_key(&Key::Named(Named::Space)), None);
        assert_eq!(map_key(&Key::Character("x".into())), None);
    }
}
