//! Widget configuration constants
//!
//! Defaults for the campaign totals, timer cadences, and the fixed pools the
//! donation simulator draws from.

/// Campaign goal in whole dollars
pub const DEFAULT_TARGET_AMOUNT: u64 = 3_000_000;

/// Amount already collected when the widget starts, in whole dollars
pub const DEFAULT_INITIAL_RAISED: u64 = 1_850_500;

/// Donor count when the widget starts
pub const DEFAULT_INITIAL_DONORS: u64 = 48_266;

/// Maximum number of cards kept in the donor feed
pub const FEED_CAPACITY: usize = 120;

/// Maximum number of messages kept on the comment wall
pub const THOUGHTS_CAPACITY: usize = 200;

/// Interval between simulated donations
pub const GENERATOR_INTERVAL_MS: u64 = 7_000;

/// Interval between relative-time label refreshes
pub const LABEL_REFRESH_INTERVAL_MS: u64 = 5_000;

/// Tick of the raised-amount count-up animation
pub const COUNT_UP_TICK_MS: u64 = 50;

/// Number of steps the count-up animation is divided into
pub const COUNT_UP_STEPS: u64 = 20;

pub const FIRST_NAMES: [&str; 50] = [
    "Sophia", "Liam", "Olivia", "Noah", "Emma", "James", "Mia", "Lucas", "Ella", "Aiden",
    "Ethan", "Isabella", "Mason", "Amelia", "Logan", "Ava", "Elijah", "Harper", "Oliver",
    "Charlotte", "Benjamin", "Emily", "Daniel", "Abigail", "Henry", "Sofia", "Jackson", "Aria",
    "Michael", "Scarlett", "Sebastian", "Victoria", "Alexander", "Grace", "William", "Zoe",
    "Jacob", "Chloe", "Carter", "Layla", "Nathan", "Nora", "Aaron", "Luna", "Caleb", "Hannah",
    "Samuel", "Leah", "Owen", "Penelope",
];

pub const LAST_INITIALS: [&str; 20] = [
    "A.", "B.", "C.", "D.", "E.", "F.", "G.", "H.", "I.", "J.", "K.", "L.", "M.", "N.", "O.",
    "P.", "Q.", "R.", "S.", "T.",
];

/// Messages attached to simulated donations (the empty one means no message)
pub const MESSAGES: [&str; 8] = [
    "Keep going!",
    "God bless",
    "Happy to help",
    "For the kids",
    "Peace and love",
    "With hope",
    "Stay strong",
    "",
];

/// Simulated donation denominations in whole dollars
pub const AMOUNTS: [u64; 10] = [10, 20, 25, 30, 50, 75, 100, 150, 200, 300];

/// Supplies gallery: (image path, caption)
pub const SUPPLIES: [(&str, &str); 6] = [
    (
        "images/3.jpg",
        "Distributed 500 food packages to families in need.",
    ),
    (
        "images/12.jpg",
        "Delivered clean drinking water to 200 households.",
    ),
    (
        "images/med.webp",
        "Supplied essential medicines and first aid kits to clinics.",
    ),
    (
        "images/clothes.webp",
        "Distributed clothing and blankets to children.",
    ),
    (
        "images/school.webp",
        "Provided 300 school kits to support education.",
    ),
    (
        "images/shelter.png",
        "Set up 50 emergency shelters for families.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_totals_below_target() {
        assert!(DEFAULT_INITIAL_RAISED < DEFAULT_TARGET_AMOUNT);
    }

    #[test]
    fn amounts_are_positive() {
        assert!(AMOUNTS.iter().all(|a| *a > 0));
    }

    #[test]
    fn initials_are_letter_and_period() {
        for initial in LAST_INITIALS {
            let mut chars = initial.chars();
            assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()));
            assert_eq!(chars.as_str(), ".");
        }
    }

    #[test]
    fn exactly_one_empty_message() {
        assert_eq!(MESSAGES.iter().filter(|m| m.is_empty()).count(), 1);
    }

    #[test]
    fn timer_cadences() {
        assert_eq!(GENERATOR_INTERVAL_MS, 7_000);
        assert_eq!(LABEL_REFRESH_INTERVAL_MS, 5_000);
        assert_eq!(COUNT_UP_TICK_MS, 50);
        assert_eq!(COUNT_UP_STEPS, 20);
    }
}
