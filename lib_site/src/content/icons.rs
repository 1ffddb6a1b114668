use serde::{Deserialize, Serialize};

/// Glyph used whenever a key is not part of the known set.
pub const FALLBACK_GLYPH: &str = "Target";

/// Icon reference used by content records.
///
/// The CMS stores icons as free strings. Known keys map to a named glyph;
/// anything else is kept verbatim as `Unknown` and rendered with
/// [`FALLBACK_GLYPH`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconKey {
    Target,
    Lightbulb,
    Rocket,
    Globe,
    Code,
    Smartphone,
    Cpu,
    Brain,
    Code2,
    Wifi,
    Database,
    Shield,
    Cloud,
    Zap,
    Beaker,
    TrendingUp,
    Users,
    Award,
    BookOpen,
    Unknown(String),
}

impl IconKey {
    /// Every known key in declaration order.
    pub const KNOWN: [IconKey; 19] = [
        IconKey::Target,
        IconKey::Lightbulb,
        IconKey::Rocket,
        IconKey::Globe,
        IconKey::Code,
        IconKey::Smartphone,
        IconKey::Cpu,
        IconKey::Brain,
        IconKey::Code2,
        IconKey::Wifi,
        IconKey::Database,
        IconKey::Shield,
        IconKey::Cloud,
        IconKey::Zap,
        IconKey::Beaker,
        IconKey::TrendingUp,
        IconKey::Users,
        IconKey::Award,
        IconKey::BookOpen,
    ];

    /// The wire key, exactly as stored in the CMS.
    pub fn as_key(&self) -> &str {
        match self {
            IconKey::Target => "target",
            IconKey::Lightbulb => "lightbulb",
            IconKey::Rocket => "rocket",
            IconKey::Globe => "globe",
            IconKey::Code => "code",
            IconKey::Smartphone => "smartphone",
            IconKey::Cpu => "cpu",
            IconKey::Brain => "brain",
            IconKey::Code2 => "code2",
            IconKey::Wifi => "wifi",
            IconKey::Database => "database",
            IconKey::Shield => "shield",
            IconKey::Cloud => "cloud",
            IconKey::Zap => "zap",
            IconKey::Beaker => "beaker",
            IconKey::TrendingUp => "trendingUp",
            IconKey::Users => "users",
            IconKey::Award => "award",
            IconKey::BookOpen => "bookOpen",
            IconKey::Unknown(raw) => raw,
        }
    }

    /// Name of the glyph a renderer should draw.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKey::Target => "Target",
            IconKey::Lightbulb => "Lightbulb",
            IconKey::Rocket => "Rocket",
            IconKey::Globe => "Globe",
            IconKey::Code => "Code",
            IconKey::Smartphone => "Smartphone",
            IconKey::Cpu => "Cpu",
            IconKey::Brain => "Brain",
            IconKey::Code2 => "Code2",
            IconKey::Wifi => "Wifi",
            IconKey::Database => "Database",
            IconKey::Shield => "Shield",
            IconKey::Cloud => "Cloud",
            IconKey::Zap => "Zap",
            IconKey::Beaker => "Beaker",
            IconKey::TrendingUp => "TrendingUp",
            IconKey::Users => "Users",
            IconKey::Award => "Award",
            IconKey::BookOpen => "BookOpen",
            IconKey::Unknown(_) => FALLBACK_GLYPH,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, IconKey::Unknown(_))
    }
}

impl From<String> for IconKey {
    fn from(raw: String) -> Self {
        IconKey::KNOWN
            .iter()
            .find(|k| k.as_key() == raw)
            .cloned()
            .unwrap_or(IconKey::Unknown(raw))
    }
}

impl From<&str> for IconKey {
    fn from(raw: &str) -> Self {
        IconKey::from(raw.to_string())
    }
}

impl From<IconKey> for String {
    fn from(key: IconKey) -> Self {
        key.as_key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_round_trip_through_the_wire_name() {
        for key in IconKey::KNOWN.iter() {
            assert_eq!(&IconKey::from(key.as_key()), key);
            assert!(key.is_known());
        }
        assert_eq!(IconKey::from("trendingUp").glyph(), "TrendingUp");
    }

    #[test]
    fn unknown_key_is_kept_and_falls_back() {
        let icon: IconKey = serde_json::from_str(r#""hologram""#).unwrap();
        assert_eq!(icon, IconKey::Unknown("hologram".to_string()));
        assert_eq!(icon.glyph(), FALLBACK_GLYPH);
        assert_eq!(serde_json::to_string(&icon).unwrap(), r#""hologram""#);
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert!(!IconKey::from("TrendingUp").is_known());
    }
}
