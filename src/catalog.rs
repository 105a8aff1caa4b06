use serde::Serialize;

/// Static catalog entry for a milestone badge. Read-only reference data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub condition: &'static str,
    pub icon: &'static str,
}

pub const ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "streak7",
        name: "Novice Coder",
        condition: "streak >= 7",
        icon: "Award",
    },
    AchievementDef {
        id: "streak30",
        name: "Intermediate Coder",
        condition: "streak >= 30",
        icon: "Award",
    },
    AchievementDef {
        id: "streak100",
        name: "Expert Coder",
        condition: "streak >= 100",
        icon: "Award",
    },
    AchievementDef {
        id: "firstHabit",
        name: "Getting Started",
        condition: "first habit added",
        icon: "Star",
    },
    AchievementDef {
        id: "fiveHabits",
        name: "Habit Collector",
        condition: "5 habits added",
        icon: "Star",
    },
    AchievementDef {
        id: "categoryMaster",
        name: "Category Master",
        condition: "habits in all categories",
        icon: "Medal",
    },
    AchievementDef {
        id: "dailyCommit",
        name: "Daily Committer",
        condition: "commit every day for a week",
        icon: "Award",
    },
    AchievementDef {
        id: "weeklyWarrior",
        name: "Weekly Warrior",
        condition: "commit every day for a month",
        icon: "Award",
    },
    AchievementDef {
        id: "monthlyMarathon",
        name: "Monthly Marathon",
        condition: "commit every day for 3 months",
        icon: "Award",
    },
    AchievementDef {
        id: "reviewer",
        name: "Code Reviewer",
        condition: "review habit added",
        icon: "Medal",
    },
];

pub const CATEGORIES: &[&str] = &["Coding", "Learning", "Project", "Review", "General"];

/// Display name for an achievement id; unknown ids fall back to the raw id.
pub fn achievement_label(id: &str) -> &str {
    ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .map_or(id, |def| def.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_resolves_known_id() {
        assert_eq!(achievement_label("streak7"), "Novice Coder");
    }

    #[test]
    fn label_falls_back_to_raw_id() {
        assert_eq!(achievement_label("streak9000"), "streak9000");
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (index, def) in ACHIEVEMENTS.iter().enumerate() {
            assert!(
                ACHIEVEMENTS[index + 1..].iter().all(|other| other.id != def.id),
                "duplicate catalog id {}",
                def.id
            );
        }
    }
}
