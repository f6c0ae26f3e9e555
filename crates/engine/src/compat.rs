//! Draw compatibility.
//!
//! Not every draw sells every bet type: Dominican draws only take Directo,
//! Palé and Tripleta, Super Palé draws only take Super Palé, and so on. Draws
//! are grouped into a [`DrawCategory`] by name.

use serde::{Deserialize, Serialize};

use crate::{BetType, util::normalize_key};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawCategory {
    Dominican,
    Usa,
    PickTwo,
    Cash3SixByOne,
    SuperPale,
    Panama,
    Anguila,
    /// Unknown draws, and the "General" tab, which offers every bet type.
    General,
}

const DOMINICAN_DRAWS: &[&str] = &[
    "LA PRIMERA",
    "LA PRIMERA 8PM",
    "GANA MAS",
    "NACIONAL",
    "QUINIELA PALE",
    "REAL",
    "LOTEKA",
    "LOTEDOM",
    "King Lottery AM",
    "King Lottery PM",
    "L.E. PUERTO RICO 2PM",
    "L.E. PUERTO RICO 10PM",
    "LA SUERTE",
    "LA SUERTE 6:00pm",
];

const USA_DRAWS: &[&str] = &[
    "NEW YORK DAY",
    "NEW YORK NIGHT",
    "FLORIDA AM",
    "FLORIDA PM",
    "GEORGIA-MID AM",
    "GEORGIA EVENING",
    "GEORGIA NIGHT",
    "NEW JERSEY AM",
    "NEW JERSEY PM",
    "CONNECTICUT AM",
    "CONNECTICUT PM",
    "CALIFORNIA AM",
    "CALIFORNIA PM",
    "CHICAGO AM",
    "CHICAGO PM",
    "PENN MIDDAY",
    "PENN EVENING",
    "INDIANA MIDDAY",
    "INDIANA EVENING",
    "TEXAS MORNING",
    "TEXAS DAY",
    "TEXAS EVENING",
    "TEXAS NIGHT",
    "VIRGINIA AM",
    "VIRGINIA PM",
    "SOUTH CAROLINA AM",
    "SOUTH CAROLINA PM",
    "MARYLAND MIDDAY",
    "MARYLAND EVENING",
    "MASS AM",
    "MASS PM",
    "NORTH CAROLINA AM",
    "NORTH CAROLINA PM",
    "DELAWARE AM",
    "DELAWARE PM",
];

const PICK_TWO_DRAWS: &[&str] = &[
    "FL PICK2 AM",
    "FL PICK2 PM",
    "LA CHICA",
    "DIARIA 11AM",
    "DIARIA 3PM",
    "DIARIA 9PM",
];

const CASH3_SIX_BY_ONE_DRAWS: &[&str] = &["NY AM 6x1", "NY PM 6x1", "FL AM 6X1", "FL PM 6X1"];

const SUPER_PALE_DRAWS: &[&str] = &[
    "SUPER PALE TARDE",
    "SUPER PALE NOCHE",
    "SUPER PALE NY-FL AM",
    "SUPER PALE NY-FL PM",
];

const PANAMA_DRAWS: &[&str] = &["PANAMA MIERCOLES", "PANAMA DOMINGO"];

const ANGUILA_DRAWS: &[&str] = &["Anguila 1pm", "Anguila 6PM", "Anguila 9pm", "Anguila 10am"];

const CATEGORY_DRAWS: &[(DrawCategory, &[&str])] = &[
    (DrawCategory::Dominican, DOMINICAN_DRAWS),
    (DrawCategory::Usa, USA_DRAWS),
    (DrawCategory::PickTwo, PICK_TWO_DRAWS),
    (DrawCategory::Cash3SixByOne, CASH3_SIX_BY_ONE_DRAWS),
    (DrawCategory::SuperPale, SUPER_PALE_DRAWS),
    (DrawCategory::Panama, PANAMA_DRAWS),
    (DrawCategory::Anguila, ANGUILA_DRAWS),
];

const BASIC: &[BetType] = &[BetType::Directo, BetType::Pale, BetType::Tripleta];

const USA: &[BetType] = &[
    BetType::Directo,
    BetType::Pale,
    BetType::Tripleta,
    BetType::Cash3Straight,
    BetType::Cash3Box,
    BetType::Cash3FrontStraight,
    BetType::Cash3FrontBox,
    BetType::Cash3BackStraight,
    BetType::Cash3BackBox,
    BetType::Play4Straight,
    BetType::Play4Box,
    BetType::Pick5Straight,
    BetType::Pick5Box,
    BetType::PickTwoFront,
    BetType::PickTwoBack,
    BetType::PickTwoMiddle,
    BetType::Bolita,
    BetType::Singulacion,
];

const PICK_TWO: &[BetType] = &[
    BetType::PickTwoFront,
    BetType::PickTwoBack,
    BetType::PickTwoMiddle,
];

const CASH3_SIX_BY_ONE: &[BetType] = &[
    BetType::Cash3Straight,
    BetType::Cash3Box,
    BetType::Cash3FrontStraight,
    BetType::Cash3FrontBox,
    BetType::Cash3BackStraight,
    BetType::Cash3BackBox,
];

const SUPER_PALE: &[BetType] = &[BetType::SuperPale];

const PANAMA: &[BetType] = &[
    BetType::Directo,
    BetType::Pale,
    BetType::Tripleta,
    BetType::Panama,
];

impl DrawCategory {
    /// Category of the draw called `name`.
    ///
    /// Matching ignores case, accents and punctuation; names that are not in
    /// the draw table fall back to [`DrawCategory::General`].
    #[must_use]
    pub fn for_draw(name: &str) -> Self {
        let Some(key) = normalize_key(name) else {
            return Self::General;
        };
        CATEGORY_DRAWS
            .iter()
            .find(|(_, draws)| {
                draws
                    .iter()
                    .any(|draw| normalize_key(draw).as_deref() == Some(key.as_str()))
            })
            .map_or(Self::General, |(category, _)| *category)
    }

    /// Bet types a draw of this category can sell.
    #[must_use]
    pub fn allowed_bet_types(self) -> &'static [BetType] {
        match self {
            Self::Dominican | Self::Anguila => BASIC,
            Self::Usa => USA,
            Self::PickTwo => PICK_TWO,
            Self::Cash3SixByOne => CASH3_SIX_BY_ONE,
            Self::SuperPale => SUPER_PALE,
            Self::Panama => PANAMA,
            Self::General => &BetType::ALL,
        }
    }

    #[must_use]
    pub fn allows(self, bet_type: BetType) -> bool {
        self.allowed_bet_types().contains(&bet_type)
    }
}

/// `true` if `bet_type` can be sold on the draw called `draw_name`.
///
/// A blank name or the "General" tab accepts every bet type.
///
/// ```rust
/// use lottery_engine::{BetType, is_compatible};
///
/// assert!(is_compatible(BetType::Pale, "LOTEKA"));
/// assert!(!is_compatible(BetType::Cash3Box, "LOTEKA"));
/// assert!(is_compatible(BetType::Cash3Box, "general"));
/// ```
#[must_use]
pub fn is_compatible(bet_type: BetType, draw_name: &str) -> bool {
    DrawCategory::for_draw(draw_name).allows(bet_type)
}
