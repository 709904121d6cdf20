//! Brand catalogue for the insights client.

use serde::Serialize;

/// A brand entry insights can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Brand {
    /// Identifier sent in creation requests.
    pub id: i64,
    /// Display name shown in the brand selector.
    pub name: &'static str,
}

/// Brands offered by the add-insight dialog.
///
/// The first entry is the dialog's default selection.
pub const BRANDS: &[Brand] = &[
    Brand {
        id: 0,
        name: "Alpha",
    },
    Brand { id: 1, name: "Beta" },
    Brand {
        id: 2,
        name: "Gamma",
    },
    Brand {
        id: 3,
        name: "Delta",
    },
];

/// Brand id selected when the dialog opens or resets.
pub(crate) fn default_brand_id() -> i64 {
    BRANDS.first().map_or(0, |brand| brand.id)
}
