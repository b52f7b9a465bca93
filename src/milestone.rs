/// Streak counts that trigger a milestone notification.
pub const MILESTONE_STEPS: [u32; 7] = [5, 10, 15, 20, 25, 30, 40];

/// Named tiers for consecutive-correct streaks, highest threshold wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum StreakTier {
    Unstoppable,
    Legend,
    Champion,
    #[strum(serialize = "Hot Streak")]
    HotStreak,
    Speedster,
    Pro,
    #[strum(serialize = "On a roll")]
    OnARoll,
    #[strum(serialize = "Keep going")]
    KeepGoing,
}

impl StreakTier {
    pub fn for_streak(count: u32) -> Self {
        match count {
            40.. => StreakTier::Unstoppable,
            30.. => StreakTier::Legend,
            25.. => StreakTier::Champion,
            20.. => StreakTier::HotStreak,
            15.. => StreakTier::Speedster,
            10.. => StreakTier::Pro,
            5.. => StreakTier::OnARoll,
            _ => StreakTier::KeepGoing,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            StreakTier::Unstoppable => "🚀",
            StreakTier::Legend => "🏆",
            StreakTier::Champion => "💥",
            StreakTier::HotStreak => "🔥",
            StreakTier::Speedster => "⚡",
            StreakTier::Pro => "⭐",
            StreakTier::OnARoll => "🎉",
            StreakTier::KeepGoing => "💪",
        }
    }
}

/// Side-channel notification emitted when a streak crosses a milestone.
/// Carries no state; the session is unaffected by whether anyone listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneEvent {
    pub streak: u32,
    pub tier: StreakTier,
}

impl MilestoneEvent {
    pub fn new(streak: u32) -> Self {
        Self {
            streak,
            tier: StreakTier::for_streak(streak),
        }
    }

    /// The toast line shown to the user, e.g. "⭐ Pro! Streak 10!"
    pub fn message(&self) -> String {
        format!("{} {}! Streak {}!", self.tier.emoji(), self.tier, self.streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(StreakTier::for_streak(0), StreakTier::KeepGoing);
        assert_eq!(StreakTier::for_streak(4), StreakTier::KeepGoing);
        assert_eq!(StreakTier::for_streak(5), StreakTier::OnARoll);
        assert_eq!(StreakTier::for_streak(9), StreakTier::OnARoll);
        assert_eq!(StreakTier::for_streak(10), StreakTier::Pro);
        assert_eq!(StreakTier::for_streak(14), StreakTier::Pro);
        assert_eq!(StreakTier::for_streak(15), StreakTier::Speedster);
        assert_eq!(StreakTier::for_streak(20), StreakTier::HotStreak);
        assert_eq!(StreakTier::for_streak(25), StreakTier::Champion);
        assert_eq!(StreakTier::for_streak(30), StreakTier::Legend);
        assert_eq!(StreakTier::for_streak(39), StreakTier::Legend);
        assert_eq!(StreakTier::for_streak(40), StreakTier::Unstoppable);
        assert_eq!(StreakTier::for_streak(100), StreakTier::Unstoppable);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(StreakTier::Unstoppable.to_string(), "Unstoppable");
        assert_eq!(StreakTier::Legend.to_string(), "Legend");
        assert_eq!(StreakTier::Champion.to_string(), "Champion");
        assert_eq!(StreakTier::HotStreak.to_string(), "Hot Streak");
        assert_eq!(StreakTier::Speedster.to_string(), "Speedster");
        assert_eq!(StreakTier::Pro.to_string(), "Pro");
        assert_eq!(StreakTier::OnARoll.to_string(), "On a roll");
        assert_eq!(StreakTier::KeepGoing.to_string(), "Keep going");
    }

    #[test]
    fn test_milestone_steps() {
        assert_eq!(MILESTONE_STEPS, [5, 10, 15, 20, 25, 30, 40]);
    }

    #[test]
    fn test_milestone_message_format() {
        let event = MilestoneEvent::new(10);
        assert_eq!(event.tier, StreakTier::Pro);
        assert_eq!(event.message(), "⭐ Pro! Streak 10!");

        let event = MilestoneEvent::new(20);
        assert_eq!(event.message(), "🔥 Hot Streak! Streak 20!");
    }

    #[test]
    fn test_every_step_has_a_tier_above_keep_going() {
        for step in MILESTONE_STEPS {
            assert_ne!(StreakTier::for_streak(step), StreakTier::KeepGoing);
        }
    }
}
