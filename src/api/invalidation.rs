use serde::{Deserialize, Serialize};

/// What changed since the last render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Movement,
    Layout,
    Slides,
    Value,
    Config,
    Plugins,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Movement => 1 << 0,
            Self::Layout => 1 << 1,
            Self::Slides => 1 << 2,
            Self::Value => 1 << 3,
            Self::Config => 1 << 4,
            Self::Plugins => 1 << 5,
        }
    }
}

/// Bitmask of pending invalidation topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Movement.bit()
        | InvalidationTopic::Layout.bit()
        | InvalidationTopic::Slides.bit()
        | InvalidationTopic::Value.bit()
        | InvalidationTopic::Config.bit()
        | InvalidationTopic::Plugins.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}
