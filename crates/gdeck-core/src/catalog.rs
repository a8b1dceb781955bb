//! Static effect and scene catalogs.
//!
//! Reference tables loaded once at startup and never mutated. Effect ids
//! match the firmware's effect table; scene commands are sent verbatim.

/// A lighting effect known to the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub id: u16,
    pub name: &'static str,
    pub description: &'static str,
}

/// A one-key scene preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub name: &'static str,
    pub command: &'static str,
    pub icon: &'static str,
}

/// All effects the firmware ships with, indexed by id.
pub const EFFECTS: &[Effect] = &[
    Effect {
        id: 0,
        name: "Static",
        description: "Solid color display",
    },
    Effect {
        id: 1,
        name: "Rainbow",
        description: "Smooth rainbow cycle",
    },
    Effect {
        id: 2,
        name: "Rainbow Chase",
        description: "Moving rainbow pattern",
    },
    Effect {
        id: 3,
        name: "Color Wipe",
        description: "Wipe effect with current color",
    },
    Effect {
        id: 4,
        name: "Theater Chase",
        description: "Theater marquee style chase",
    },
    Effect {
        id: 5,
        name: "Twinkle",
        description: "Random twinkling stars",
    },
    Effect {
        id: 6,
        name: "Fire",
        description: "Flickering fire effect",
    },
    Effect {
        id: 7,
        name: "Breathing",
        description: "Smooth breathing fade",
    },
    Effect {
        id: 8,
        name: "Strobe",
        description: "Fast strobe light",
    },
    Effect {
        id: 9,
        name: "Lightning",
        description: "Random lightning flashes",
    },
    Effect {
        id: 10,
        name: "Meteor",
        description: "Meteor rain effect",
    },
    Effect {
        id: 11,
        name: "Police",
        description: "Police siren lights",
    },
    Effect {
        id: 12,
        name: "Fade",
        description: "Smooth color fade",
    },
    Effect {
        id: 13,
        name: "Scan",
        description: "Scanner/Cylon effect",
    },
    Effect {
        id: 14,
        name: "Sparkle",
        description: "Random sparkles",
    },
];

/// Scene presets bound to the number row in the TUI.
pub const SCENES: &[Scene] = &[
    Scene {
        name: "Night",
        command: "scene night",
        icon: "🌙",
    },
    Scene {
        name: "Party",
        command: "scene party",
        icon: "🎉",
    },
    Scene {
        name: "Chill",
        command: "scene chill",
        icon: "😌",
    },
    Scene {
        name: "Focus",
        command: "scene focus",
        icon: "🎯",
    },
    Scene {
        name: "Relax",
        command: "scene relax",
        icon: "🧘",
    },
    Scene {
        name: "Custom",
        command: "scene custom",
        icon: "⭐",
    },
];

/// Look up an effect by firmware id.
pub fn effect_by_id(id: u16) -> Option<&'static Effect> {
    EFFECTS.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_ids_are_dense_and_ordered() {
        for (index, effect) in EFFECTS.iter().enumerate() {
            assert_eq!(effect.id as usize, index);
        }
    }

    #[test]
    fn test_effect_by_id() {
        assert_eq!(effect_by_id(1).unwrap().name, "Rainbow");
        assert_eq!(effect_by_id(6).unwrap().name, "Fire");
        assert!(effect_by_id(99).is_none());
    }

    #[test]
    fn test_scene_commands_are_lowercase_scene_prefixed() {
        for scene in SCENES {
            assert!(scene.command.starts_with("scene "));
            assert_eq!(scene.command, scene.command.to_lowercase());
            assert_eq!(
                scene.command.strip_prefix("scene ").unwrap(),
                scene.name.to_lowercase()
            );
        }
    }
}
