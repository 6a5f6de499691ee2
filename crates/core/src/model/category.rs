use std::fmt;

/// Topic a question belongs to. Session selection caps how many questions of
/// one category a playthrough may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    WaterFacts,
    HomeConservation,
    Gardening,
    Ecosystems,
    Pollution,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::WaterFacts,
        Category::HomeConservation,
        Category::Gardening,
        Category::Ecosystems,
        Category::Pollution,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::WaterFacts => "Water Facts",
            Category::HomeConservation => "Saving Water at Home",
            Category::Gardening => "Smart Gardening",
            Category::Ecosystems => "Wildlife & Ecosystems",
            Category::Pollution => "Pollution",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
