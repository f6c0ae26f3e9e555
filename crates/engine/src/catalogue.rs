//! Bet-type catalogue.
//!
//! Every bet a terminal can sell is one [`BetType`]. Each type has a fixed
//! digit length and belongs to one on-screen [`Section`] of the ticket.

use serde::{Deserialize, Serialize};

use crate::{CatalogueError, util::normalize_key};

/// Closed set of bet variants recognised by the notation.
///
/// `Panama` shares its notation with `Play4Straight` and `SuperPale` shares
/// its length with `Pale`; the classifier never produces either of them on
/// its own, but they are still valid catalogue entries for draw filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetType {
    Directo,
    Pale,
    Tripleta,
    Cash3Straight,
    Cash3Box,
    Cash3FrontStraight,
    Cash3FrontBox,
    Cash3BackStraight,
    Cash3BackBox,
    Play4Straight,
    Play4Box,
    Pick5Straight,
    Pick5Box,
    PickTwoFront,
    PickTwoBack,
    PickTwoMiddle,
    Bolita,
    Singulacion,
    SuperPale,
    Panama,
}

/// Ticket group a line is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Directo,
    Cash3,
    Play4AndPick5,
    PaleAndTripleta,
}

impl BetType {
    pub const ALL: [BetType; 20] = [
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
        BetType::SuperPale,
        BetType::Panama,
    ];

    /// Canonical code, as stored by the back office.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Directo => "DIRECTO",
            Self::Pale => "PALE",
            Self::Tripleta => "TRIPLETA",
            Self::Cash3Straight => "CASH3_STRAIGHT",
            Self::Cash3Box => "CASH3_BOX",
            Self::Cash3FrontStraight => "CASH3_FRONT_STRAIGHT",
            Self::Cash3FrontBox => "CASH3_FRONT_BOX",
            Self::Cash3BackStraight => "CASH3_BACK_STRAIGHT",
            Self::Cash3BackBox => "CASH3_BACK_BOX",
            Self::Play4Straight => "PLAY4_STRAIGHT",
            Self::Play4Box => "PLAY4_BOX",
            Self::Pick5Straight => "PICK5_STRAIGHT",
            Self::Pick5Box => "PICK5_BOX",
            Self::PickTwoFront => "PICK_TWO_FRONT",
            Self::PickTwoBack => "PICK_TWO_BACK",
            Self::PickTwoMiddle => "PICK_TWO_MIDDLE",
            Self::Bolita => "BOLITA",
            Self::Singulacion => "SINGULACION",
            Self::SuperPale => "SUPER_PALE",
            Self::Panama => "PANAMA",
        }
    }

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Directo => "Directo",
            Self::Pale => "Palé",
            Self::Tripleta => "Tripleta",
            Self::Cash3Straight => "Cash3 Straight",
            Self::Cash3Box => "Cash3 Box",
            Self::Cash3FrontStraight => "Cash3 Front Straight",
            Self::Cash3FrontBox => "Cash3 Front Box",
            Self::Cash3BackStraight => "Cash3 Back Straight",
            Self::Cash3BackBox => "Cash3 Back Box",
            Self::Play4Straight => "Play4 Straight",
            Self::Play4Box => "Play4 Box",
            Self::Pick5Straight => "Pick5 Straight",
            Self::Pick5Box => "Pick5 Box",
            Self::PickTwoFront => "Pick Two Front",
            Self::PickTwoBack => "Pick Two Back",
            Self::PickTwoMiddle => "Pick Two Middle",
            Self::Bolita => "Bolita",
            Self::Singulacion => "Singulación",
            Self::SuperPale => "Super Palé",
            Self::Panama => "Panamá",
        }
    }

    /// Number of digits every play number of this type carries.
    #[must_use]
    pub const fn digits(self) -> usize {
        match self {
            Self::Singulacion => 1,
            Self::Directo
            | Self::PickTwoFront
            | Self::PickTwoBack
            | Self::PickTwoMiddle
            | Self::Bolita => 2,
            Self::Cash3Straight
            | Self::Cash3Box
            | Self::Cash3FrontStraight
            | Self::Cash3FrontBox
            | Self::Cash3BackStraight
            | Self::Cash3BackBox => 3,
            Self::Pale | Self::SuperPale | Self::Play4Straight | Self::Play4Box | Self::Panama => 4,
            Self::Pick5Straight | Self::Pick5Box => 5,
            Self::Tripleta => 6,
        }
    }

    /// Section the line is grouped under on the ticket.
    ///
    /// Bolita and Singulación are sold from the Cash3 group; the Pick Two
    /// variants are sold from the Play4 & Pick5 group.
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Directo => Section::Directo,
            Self::Pale | Self::Tripleta | Self::SuperPale => Section::PaleAndTripleta,
            Self::Cash3Straight
            | Self::Cash3Box
            | Self::Cash3FrontStraight
            | Self::Cash3FrontBox
            | Self::Cash3BackStraight
            | Self::Cash3BackBox
            | Self::Bolita
            | Self::Singulacion => Section::Cash3,
            Self::Play4Straight
            | Self::Play4Box
            | Self::Pick5Straight
            | Self::Pick5Box
            | Self::PickTwoFront
            | Self::PickTwoBack
            | Self::PickTwoMiddle
            | Self::Panama => Section::Play4AndPick5,
        }
    }

    /// `true` for bets that pay on any ordering of the chosen digits.
    #[must_use]
    pub const fn is_box(self) -> bool {
        matches!(
            self,
            Self::Cash3Box | Self::Cash3FrontBox | Self::Cash3BackBox | Self::Play4Box | Self::Pick5Box
        )
    }
}

impl core::fmt::Display for BetType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for BetType {
    type Error = CatalogueError;

    /// Parses a bet-type code in any spelling the back office emits:
    /// `"CASH3_STRAIGHT"`, `"CASH3 STRAIGHT"`, `"PALÉ"`, `"SINGULACIÓN 2"`.
    ///
    /// Range suffixes on Bolita/Singulación codes (`"BOLITA 1"`) name the same
    /// bet type.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let unknown = || CatalogueError::UnknownBetType(value.trim().to_string());
        let key = normalize_key(value).ok_or_else(unknown)?;

        let bet_type = match key.as_str() {
            "directo" => Self::Directo,
            "pale" => Self::Pale,
            "tripleta" => Self::Tripleta,
            "cash3 straight" => Self::Cash3Straight,
            "cash3 box" => Self::Cash3Box,
            "cash3 front straight" => Self::Cash3FrontStraight,
            "cash3 front box" => Self::Cash3FrontBox,
            "cash3 back straight" => Self::Cash3BackStraight,
            "cash3 back box" => Self::Cash3BackBox,
            "play4 straight" => Self::Play4Straight,
            "play4 box" => Self::Play4Box,
            "pick5 straight" => Self::Pick5Straight,
            "pick5 box" => Self::Pick5Box,
            "pick two front" => Self::PickTwoFront,
            "pick two back" => Self::PickTwoBack,
            "pick two middle" => Self::PickTwoMiddle,
            "bolita" | "bolita 1" | "bolita 2" => Self::Bolita,
            "singulacion" | "singulacion 1" | "singulacion 2" | "singulacion 3" => {
                Self::Singulacion
            }
            "super pale" => Self::SuperPale,
            "panama" => Self::Panama,
            _ => return Err(unknown()),
        };
        Ok(bet_type)
    }
}

impl Section {
    /// Heading printed above the group on the ticket.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Directo => "DIRECTO",
            Self::Cash3 => "CASH 3",
            Self::Play4AndPick5 => "PLAY 4 & PICK 5",
            Self::PaleAndTripleta => "PALE & TRIPLETA",
        }
    }
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_try_from() {
        for bet_type in BetType::ALL {
            assert_eq!(BetType::try_from(bet_type.code()), Ok(bet_type));
        }
    }

    #[test]
    fn try_from_accepts_back_office_spellings() {
        assert_eq!(BetType::try_from("PALÉ"), Ok(BetType::Pale));
        assert_eq!(BetType::try_from("SUPER PALÉ"), Ok(BetType::SuperPale));
        assert_eq!(BetType::try_from("cash3 front box"), Ok(BetType::Cash3FrontBox));
        assert_eq!(BetType::try_from("SINGULACIÓN 3"), Ok(BetType::Singulacion));
        assert_eq!(BetType::try_from("BOLITA 2"), Ok(BetType::Bolita));
    }

    #[test]
    fn try_from_rejects_unknown_codes() {
        assert_eq!(
            BetType::try_from("PICK2"),
            Err(CatalogueError::UnknownBetType("PICK2".to_string()))
        );
        assert!(BetType::try_from("").is_err());
        assert!(BetType::try_from("BOLITA 3").is_err());
    }

    #[test]
    fn digits_match_the_product_lengths() {
        assert_eq!(BetType::Singulacion.digits(), 1);
        assert_eq!(BetType::Directo.digits(), 2);
        assert_eq!(BetType::Cash3BackBox.digits(), 3);
        assert_eq!(BetType::SuperPale.digits(), 4);
        assert_eq!(BetType::Pick5Box.digits(), 5);
        assert_eq!(BetType::Tripleta.digits(), 6);
    }

    #[test]
    fn sections_follow_ticket_groups() {
        assert_eq!(BetType::Bolita.section(), Section::Cash3);
        assert_eq!(BetType::Singulacion.section(), Section::Cash3);
        assert_eq!(BetType::PickTwoMiddle.section(), Section::Play4AndPick5);
        assert_eq!(BetType::SuperPale.section(), Section::PaleAndTripleta);
        assert_eq!(BetType::Directo.section(), Section::Directo);
    }

    #[test]
    fn box_variants_are_flagged() {
        let boxes: Vec<BetType> = BetType::ALL.into_iter().filter(|b| b.is_box()).collect();
        assert_eq!(
            boxes,
            [
                BetType::Cash3Box,
                BetType::Cash3FrontBox,
                BetType::Cash3BackBox,
                BetType::Play4Box,
                BetType::Pick5Box,
            ]
        );
    }

    #[test]
    fn serde_uses_canonical_codes() {
        let json = serde_json::to_string(&BetType::Cash3FrontBox).unwrap();
        assert_eq!(json, "\"CASH3_FRONT_BOX\"");
        let json = serde_json::to_string(&BetType::PickTwoMiddle).unwrap();
        assert_eq!(json, "\"PICK_TWO_MIDDLE\"");
    }
}
