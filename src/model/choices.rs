//! Fixed choice sets offered by the intake form.
//!
//! Each choice type exposes its full set through `ALL` (in the order the form
//! lists them), a display `label()`, and a case-insensitive [`FromStr`] that
//! accepts exactly those labels.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Returned when a raw value is not one of the labels of a choice set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{value}' is not a valid {kind}")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! choice_set {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every choice, in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Text shown in the form and in the admin table.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ParseChoiceError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

choice_set! {
    /// Holster carry style.
    HolsterType, "holster type" {
        /// Inside the waistband.
        Iwb => "IWB",
        /// Outside the waistband.
        Owb => "OWB",
        Appendix => "Appendix",
        Duty => "Duty",
    }
}

choice_set! {
    /// Holster finish color.
    Color, "color" {
        Black => "Black",
        Brown => "Brown",
        /// Flat dark earth.
        Fde => "FDE",
        OdGreen => "OD Green",
    }
}

choice_set! {
    /// Fulfilment status of an order.
    ///
    /// Orders are created `Pending` and nothing moves them on yet.
    #[derive(Default)]
    OrderStatus, "order status" {
        #[default]
        Pending => "Pending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_form_order() {
        let holsters: Vec<_> = HolsterType::ALL.iter().map(|h| h.label()).collect();
        assert_eq!(holsters, ["IWB", "OWB", "Appendix", "Duty"]);

        let colors: Vec<_> = Color::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(colors, ["Black", "Brown", "FDE", "OD Green"]);
    }

    #[test]
    fn test_parse_ignores_case_and_padding() {
        assert_eq!("owb".parse::<HolsterType>(), Ok(HolsterType::Owb));
        assert_eq!("  Appendix ".parse::<HolsterType>(), Ok(HolsterType::Appendix));
        assert_eq!("od green".parse::<Color>(), Ok(Color::OdGreen));
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        let err = "Shoulder".parse::<HolsterType>().unwrap_err();
        assert_eq!(err.kind, "holster type");
        assert_eq!(err.value, "Shoulder");
        assert_eq!(err.to_string(), "'Shoulder' is not a valid holster type");

        // Partial matches are not accepted
        assert!("OD".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(OrderStatus::Pending.to_string(), "Pending");
    }
}
