#![forbid(unsafe_code)]

//! Authored manual content.

use crate::registry::{Icon, SectionEntry, SectionId};

pub const HEADER_TITLE: &str = "🚀 Space Academy AI Training Manual 🛸";
pub const HEADER_TITLE_ASCII: &str = "Space Academy AI Training Manual";
pub const HEADER_SUBTITLE: &str = "Classified Document: Advanced AI Defense Systems";
pub const FOOTER_REMARK: &str =
    "Remember: The fate of Earth depends on your understanding of these systems, cadet!";
pub const FOOTER_HINTS: &str =
    "click or 1-6 select · arrows/Tab move · Enter open · PgUp/PgDn scroll · m mouse · q quit";

/// The six manual sections, in display order.
pub(crate) fn sections() -> Vec<SectionEntry> {
    vec![
        SectionEntry {
            id: SectionId::Intro,
            title: "Welcome to Space Academy: AI Division",
            icon: Icon::Rocket,
            body: "Greetings, cadet! You're about to learn about our most advanced AI system \
                   for defending Earth against the Space Invader threat. This training manual \
                   will break down the key components of our defense system.",
        },
        SectionEntry {
            id: SectionId::Brain,
            title: "The Neural Core (DQNAgent)",
            icon: Icon::Brain,
            body: "At the heart of our defense system lies the DQN (Deep Q-Network) Agent. \
                   Think of it as the brain of our operation. It uses advanced convolutional \
                   neural networks to process visual data from the battlefield and make \
                   split-second decisions on how to respond to the alien threat.",
        },
        SectionEntry {
            id: SectionId::Memory,
            title: "The Memory Banks (ReplayBuffer)",
            icon: Icon::Database,
            body: "Just like our best pilots learn from past encounters, our AI system stores \
                   its experiences in a special memory bank called the ReplayBuffer. This \
                   allows it to replay past battles and learn from both victories and defeats, \
                   constantly improving its strategy.",
        },
        SectionEntry {
            id: SectionId::Rewards,
            title: "The Motivation System (RewardShaper)",
            icon: Icon::Star,
            body: "To encourage optimal battle tactics, we've implemented a sophisticated \
                   reward system. It celebrates successful hits, strategic movement, and \
                   careful resource management while discouraging risky behavior that might \
                   leave Earth defenseless.",
        },
        SectionEntry {
            id: SectionId::Training,
            title: "The Training Protocol",
            icon: Icon::Zap,
            body: "Training happens over thousands of simulated battles. Our AI starts as a \
                   rookie with random actions (high epsilon) and gradually becomes more \
                   strategic (epsilon decay), learning to make better decisions through \
                   experience and constant evaluation.",
        },
        SectionEntry {
            id: SectionId::Achievements,
            title: "Mission Objectives",
            icon: Icon::Trophy,
            body: "Success metrics include:\n\
                   • Maximizing alien elimination rate\n\
                   • Maintaining defensive positioning\n\
                   • Efficient use of defense resources\n\
                   • Survival time optimization\n\
                   The system automatically saves its best configurations for future \
                   deployments.",
        },
    ]
}
