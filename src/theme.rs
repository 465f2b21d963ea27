use std::convert::Infallible;

use codee::{Decoder, Encoder};
use serde::{Deserialize, Serialize};

/// Local storage key holding the dark mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Class put on the root element while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Persisted dark mode preference. Serializes as a bare `true`/`false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeFlag(bool);

impl ThemeFlag {
    pub fn new(dark: bool) -> Self {
        Self(dark)
    }

    pub fn is_dark(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn toggled(self) -> Self {
        Self(!self.0)
    }

    /// Reads a stored value, falling back to light mode when it is missing or
    /// not a boolean.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn to_stored(self) -> String {
        self.0.to_string()
    }

    pub fn root_class(self) -> Option<&'static str> {
        self.0.then_some(DARK_CLASS)
    }

    /// Picks between the dark and light variant of a class list.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        if self.0 {
            dark
        } else {
            light
        }
    }
}

/// Storage codec for [`ThemeFlag`]. Unreadable values decode to light mode
/// instead of failing.
pub struct ThemeFlagCodec;

impl Encoder<ThemeFlag> for ThemeFlagCodec {
    type Error = Infallible;
    type Encoded = String;

    fn encode(val: &ThemeFlag) -> Result<String, Self::Error> {
        Ok(val.to_stored())
    }
}

impl Decoder<ThemeFlag> for ThemeFlagCodec {
    type Error = Infallible;
    type Encoded = str;

    fn decode(val: &str) -> Result<ThemeFlag, Self::Error> {
        Ok(ThemeFlag::from_stored(Some(val)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl MemoryStorage {
        fn load(&self) -> ThemeFlag {
            match self.0.get(DARK_MODE_KEY) {
                Some(raw) => ThemeFlagCodec::decode(raw.as_str()).unwrap(),
                None => ThemeFlag::default(),
            }
        }

        fn save(&mut self, flag: ThemeFlag) {
            let raw = ThemeFlagCodec::encode(&flag).unwrap();
            self.0.insert(DARK_MODE_KEY.to_string(), raw);
        }
    }

    #[test]
    fn test_defaults_to_light() {
        assert!(!ThemeFlag::default().is_dark());
        assert_eq!(ThemeFlag::from_stored(None), ThemeFlag::new(false));
        assert_eq!(ThemeFlag::from_stored(Some("")), ThemeFlag::new(false));
        assert_eq!(ThemeFlag::from_stored(Some("yes")), ThemeFlag::new(false));
    }

    #[test]
    fn test_stored_form() {
        assert_eq!(ThemeFlag::new(true).to_stored(), "true");
        assert_eq!(ThemeFlag::new(false).to_stored(), "false");
        assert_eq!(serde_json::to_string(&ThemeFlag::new(true)).unwrap(), "true");
        assert_eq!(ThemeFlag::from_stored(Some("true")), ThemeFlag::new(true));
        assert_eq!(ThemeFlag::from_stored(Some("false")), ThemeFlag::new(false));
    }

    #[test]
    fn test_codec_matches_json() {
        for flag in [ThemeFlag::new(false), ThemeFlag::new(true)] {
            let encoded = ThemeFlagCodec::encode(&flag).unwrap();
            assert_eq!(encoded, serde_json::to_string(&flag).unwrap());
        }
        assert_eq!(ThemeFlagCodec::decode("garbage").unwrap(), ThemeFlag::default());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for start in [false, true] {
            let mut flag = ThemeFlag::new(start);
            flag.toggle();
            assert_ne!(flag.is_dark(), start);
            flag.toggle();
            assert_eq!(flag, ThemeFlag::new(start));
            assert_eq!(flag.toggled().toggled(), flag);
        }
    }

    #[test]
    fn test_double_toggle_persists_original_value() {
        let mut storage = MemoryStorage::default();
        let mut flag = storage.load();
        storage.save(flag);
        let untouched = storage.0.get(DARK_MODE_KEY).cloned();

        for _ in 0..2 {
            flag.toggle();
            storage.save(flag);
        }
        assert_eq!(storage.0.get(DARK_MODE_KEY).cloned(), untouched);
        assert_eq!(storage.load(), flag);
    }

    #[test]
    fn test_root_class() {
        assert_eq!(ThemeFlag::new(true).root_class(), Some("dark"));
        assert_eq!(ThemeFlag::new(false).root_class(), None);
        assert_eq!(ThemeFlag::new(true).pick("bg-gray-900", "bg-white"), "bg-gray-900");
        assert_eq!(ThemeFlag::new(false).pick("bg-gray-900", "bg-white"), "bg-white");
    }
}
