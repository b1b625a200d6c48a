use std::fmt;

use serde::{Deserialize, Serialize};

/// Dishes a bubble vat produces and a customer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    BubbleTea,
    FoamSoup,
    FizzPie,
}

impl FoodKind {
    pub const ALL: [FoodKind; 3] = [FoodKind::BubbleTea, FoodKind::FoamSoup, FoodKind::FizzPie];

    pub fn label(self) -> &'static str {
        match self {
            FoodKind::BubbleTea => "Bubble Tea",
            FoodKind::FoamSoup => "Foam Soup",
            FoodKind::FizzPie => "Fizz Pie",
        }
    }
}

impl fmt::Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
