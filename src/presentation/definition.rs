/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Metadata shared by every entity: a name template, a summary template and
//! the table of fields that receive a default literal when absent on decode.

use crate::utils::template::render_json_template;
use serde::Serialize;
use serde_json::Value;

/// A field that is filled with `value` when missing from the decoded JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefault {
    /// Wire name of the field
    pub field: &'static str,
    /// Default literal, as it appears on the wire
    pub value: &'static str,
}

impl FieldDefault {
    /// Creates a new default entry
    #[must_use]
    pub const fn new(field: &'static str, value: &'static str) -> Self {
        Self { field, value }
    }
}

/// Defaults of market orders and their transactions
pub const MARKET_ORDER_DEFAULTS: &[FieldDefault] = &[
    FieldDefault::new("timeInForce", "FOK"),
    FieldDefault::new("positionFill", "DEFAULT"),
];

/// Defaults of fixed price orders and their transactions
pub const FIXED_PRICE_ORDER_DEFAULTS: &[FieldDefault] =
    &[FieldDefault::new("positionFill", "DEFAULT")];

/// Defaults of limit, stop and market-if-touched orders and their transactions
pub const ENTRY_ORDER_DEFAULTS: &[FieldDefault] = &[
    FieldDefault::new("timeInForce", "GTC"),
    FieldDefault::new("positionFill", "DEFAULT"),
    FieldDefault::new("triggerCondition", "DEFAULT"),
];

/// Defaults of take profit, stop loss and trailing stop loss orders and their transactions
pub const DEPENDENT_ORDER_DEFAULTS: &[FieldDefault] = &[
    FieldDefault::new("timeInForce", "GTC"),
    FieldDefault::new("triggerCondition", "DEFAULT"),
];

/// Defaults of the `*OnFill` order details
pub const ON_FILL_DEFAULTS: &[FieldDefault] = &[FieldDefault::new("timeInForce", "GTC")];

/// Describes how an entity names and summarises itself.
///
/// Templates use `{field}` placeholders resolved against the entity's own
/// JSON form, so they see exactly the wire field names.
pub trait Definition: Serialize {
    /// Short name template, e.g. `Order Fill {id}`
    const NAME_FORMAT: &'static str;
    /// One line summary template
    const SUMMARY_FORMAT: &'static str;
    /// Fields defaulted on decode when absent
    const DEFAULTS: &'static [FieldDefault] = &[];

    /// JSON form of the entity
    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Renders the name template
    fn title(&self) -> String {
        render_json_template(Self::NAME_FORMAT, &self.to_json())
    }

    /// Renders the summary template
    fn summary(&self) -> String {
        render_json_template(Self::SUMMARY_FORMAT, &self.to_json())
    }
}

/// Implements [`Definition`] with the given templates and default table
#[macro_export]
macro_rules! impl_definition {
    ($ty:ty, $name:literal, $summary:literal) => {
        impl $crate::presentation::definition::Definition for $ty {
            const NAME_FORMAT: &'static str = $name;
            const SUMMARY_FORMAT: &'static str = $summary;
        }
    };
    ($ty:ty, $name:literal, $summary:literal, $defaults:expr) => {
        impl $crate::presentation::definition::Definition for $ty {
            const NAME_FORMAT: &'static str = $name;
            const SUMMARY_FORMAT: &'static str = $summary;
            const DEFAULTS: &'static [$crate::presentation::definition::FieldDefault] = $defaults;
        }
    };
}
