//! Read-only mock content. Nothing here has a lifecycle; widgets copy what
//! they need into their own state and never write back.

use crate::ai::ladder::LadderStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub quote: &'static str,
    pub source: &'static str,
}

pub const CODEX_QUOTES: &[Quote] = &[
    Quote {
        quote: "Do not be defeated by loss and become one who could not love again, \
                for that is when you have truly lost.",
        source: "Fire Keeper, Dark Souls 3",
    },
    Quote {
        quote: "Fear not the dark, my friend. And let the feast begin.",
        source: "Locust Preacher, Dark Souls 3",
    },
    Quote {
        quote: "Every adversity is an opportunity in disguise.",
        source: "Personal Affirmation",
    },
];

pub const KNIGHT_RANKS: &[&str] = &[
    "Squire",
    "Knight Errant",
    "Knight",
    "Knight Protector",
    "Knight Champion",
    "Knight Commander",
    "Paladin",
];

/// Rank advances every five levels, capping at the final title.
pub fn knight_rank(level: u32) -> &'static str {
    let idx = (level / 5) as usize;
    KNIGHT_RANKS[idx.min(KNIGHT_RANKS.len() - 1)]
}

#[derive(Debug, Clone, Copy)]
pub struct KnightProfile {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
}

pub const DEFAULT_KNIGHT: KnightProfile = KnightProfile {
    level: 2,
    xp: 75,
    xp_to_next: 100,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quest {
    pub name: &'static str,
    pub description: &'static str,
    pub progress: u32,
    pub total: u32,
    pub reward: &'static str,
}

pub const ACTIVE_QUESTS: &[Quest] = &[
    Quest {
        name: "Scribe's Path",
        description: "Complete 5 consecutive days of journaling",
        progress: 3,
        total: 5,
        reward: "+50 XP",
    },
    Quest {
        name: "Blacksmith's Forge",
        description: "Complete 3 Reframe Forge exercises",
        progress: 1,
        total: 3,
        reward: "+30 XP",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Document,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultFile {
    pub name: &'static str,
    pub kind: FileKind,
    pub size: &'static str,
    pub date: &'static str,
}

pub const VAULT_FILES: &[VaultFile] = &[
    VaultFile {
        name: "evo_ix_mods.pdf",
        kind: FileKind::Document,
        size: "2.4 MB",
        date: "2025-09-20",
    },
    VaultFile {
        name: "solaire_cosplay.jpg",
        kind: FileKind::Image,
        size: "3.8 MB",
        date: "2025-09-15",
    },
    VaultFile {
        name: "dark_souls_boss_guide.pdf",
        kind: FileKind::Document,
        size: "5.1 MB",
        date: "2025-09-10",
    },
    VaultFile {
        name: "elden_ring_map.jpg",
        kind: FileKind::Image,
        size: "7.2 MB",
        date: "2025-09-05",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTone {
    Blue,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultNote {
    pub title: &'static str,
    pub body: &'static str,
    pub date: &'static str,
    pub tone: NoteTone,
}

pub const VAULT_NOTES: &[VaultNote] = &[
    VaultNote {
        title: "Evo IX Tuning Notes",
        body: "Need to adjust the boost controller settings. Currently running at 20 psi \
               but might need to lower it for daily driving. Also check the air/fuel \
               ratios at higher RPMs.",
        date: "2025-09-22",
        tone: NoteTone::Blue,
    },
    VaultNote {
        title: "Malenia Strategy",
        body: "Phase 1: Stay aggressive but watch for the Waterfowl Dance. Phase 2: Use \
               Bloodhound Step to avoid the flower attack at the beginning. Frost weapons \
               seem effective.",
        date: "2025-09-18",
        tone: NoteTone::Red,
    },
    VaultNote {
        title: "Cosplay Ideas",
        body: "Solaire armor almost complete. Need to find better material for the sun \
               emblem. Consider adding LED lights for the \"Praise the Sun\" pose.",
        date: "2025-09-15",
        tone: NoteTone::Yellow,
    },
];

pub const MANTRA_SUGGESTIONS: &[&str] = &[
    "I am safe in this moment",
    "This feeling will pass",
    "I am grounded and centered",
    "I am in control of my thoughts",
    "I breathe in calm, I breathe out tension",
];

/// The 5-4-3-2-1 grounding exercise: label and how many entries to collect.
pub const SENSE_STEPS: &[(&str, usize)] = &[
    ("Things you can SEE", 5),
    ("Things you can FEEL", 4),
    ("Things you can HEAR", 3),
    ("Things you can SMELL", 2),
    ("Things you can TASTE", 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistortionPattern {
    pub name: &'static str,
    pub description: &'static str,
}

pub const DISTORTION_PATTERNS: &[DistortionPattern] = &[
    DistortionPattern {
        name: "All-or-Nothing Thinking",
        description: "Seeing things in black and white categories",
    },
    DistortionPattern {
        name: "Overgeneralization",
        description: "Viewing a negative event as a never-ending pattern",
    },
    DistortionPattern {
        name: "Mental Filter",
        description: "Focusing on a single negative detail",
    },
    DistortionPattern {
        name: "Discounting the Positive",
        description: "Rejecting positive experiences",
    },
    DistortionPattern {
        name: "Jumping to Conclusions",
        description: "Making negative interpretations without facts",
    },
    DistortionPattern {
        name: "Catastrophizing",
        description: "Expecting disaster; magnifying problems",
    },
];

pub fn mood_label(mood: u8) -> &'static str {
    match mood {
        0..=24 => "Terrible",
        25..=44 => "Bad",
        45..=54 => "Neutral",
        55..=74 => "Good",
        _ => "Great",
    }
}

/// Starter ladder shown before the user generates their own.
pub fn seed_ladder() -> Vec<LadderStep> {
    fn step(
        step: u32,
        title: &str,
        prep: &str,
        action: &str,
        duration_min: u32,
        suds_start: u8,
        suds_target: u8,
        success_criteria: &str,
    ) -> LadderStep {
        LadderStep {
            step,
            title: title.to_string(),
            prep: prep.to_string(),
            action: action.to_string(),
            duration_min,
            suds_start,
            suds_target,
            success_criteria: success_criteria.to_string(),
        }
    }

    vec![
        step(
            1,
            "Look at pictures of spiders",
            "Practice deep breathing for 1 minute before starting",
            "Browse through 5-10 images of small spiders online",
            5,
            3,
            2,
            "Can view all images without looking away",
        ),
        step(
            2,
            "Watch short spider videos",
            "Remind yourself that you're safe and can stop anytime",
            "Watch 2-3 short nature videos featuring spiders",
            10,
            4,
            3,
            "Complete watching without pausing or muting",
        ),
        step(
            3,
            "Visit spider exhibit webpage",
            "Practice 4-7-8 breathing technique",
            "Read information about spiders on a museum or zoo website",
            15,
            5,
            3,
            "Read complete information without avoidance",
        ),
        step(
            4,
            "View spider in enclosed container",
            "Use positive self-talk: 'I am safe, it cannot reach me'",
            "Look at a small spider in a sealed jar from 3 feet away",
            10,
            6,
            4,
            "Maintain position for full duration",
        ),
        step(
            5,
            "Be in same room as contained spider",
            "Remind yourself of progress made so far",
            "Sit in the same room with a contained spider for increasing periods",
            20,
            7,
            5,
            "Anxiety decreases to manageable level during session",
        ),
        step(
            6,
            "Observe spider from closer distance",
            "Practice mindfulness to stay present",
            "Approach container with spider to within 1 foot",
            15,
            8,
            6,
            "Can observe details of the spider without significant distress",
        ),
        step(
            7,
            "Be in room with free spider",
            "Remind yourself that most spiders are harmless and avoid humans",
            "Stay in a room where a small spider is visible but at a distance",
            30,
            9,
            7,
            "Remain in room without attempting to leave or kill spider",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_bands_match_the_gauge_labels() {
        assert_eq!(mood_label(0), "Terrible");
        assert_eq!(mood_label(24), "Terrible");
        assert_eq!(mood_label(25), "Bad");
        assert_eq!(mood_label(50), "Neutral");
        assert_eq!(mood_label(55), "Good");
        assert_eq!(mood_label(75), "Great");
        assert_eq!(mood_label(100), "Great");
    }

    #[test]
    fn rank_advances_every_five_levels_and_caps() {
        assert_eq!(knight_rank(0), "Squire");
        assert_eq!(knight_rank(4), "Squire");
        assert_eq!(knight_rank(5), "Knight Errant");
        assert_eq!(knight_rank(10), "Knight");
        assert_eq!(knight_rank(99), "Paladin");
    }

    #[test]
    fn seed_ladder_is_ordered_and_numbered() {
        let ladder = seed_ladder();
        assert_eq!(ladder.len(), 7);
        for (i, s) in ladder.iter().enumerate() {
            assert_eq!(s.step, i as u32 + 1);
            assert!(s.suds_target <= s.suds_start);
        }
    }
}
