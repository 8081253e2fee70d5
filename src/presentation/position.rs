/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::impl_definition;
use crate::presentation::primitives::{AccountUnits, DecimalNumber, InstrumentName, PriceValue, TradeID};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Direction implied by the sign of a position side's units
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionDirection {
    /// Positive units
    Long,
    /// Negative units
    Short,
    /// Zero or unknown units
    Flat,
}

/// One side (long or short) of a position
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct PositionSide {
    /// Units held; positive for long, negative for short
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DecimalNumber>,
    /// Volume weighted average price of the open trades
    #[serde(rename = "averagePrice", skip_serializing_if = "Option::is_none")]
    pub average_price: Option<PriceValue>,
    /// Open trades contributing to this side
    #[serde(rename = "tradeIDs", skip_serializing_if = "Option::is_none")]
    pub trade_ids: Option<Vec<TradeID>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    #[serde(rename = "unrealizedPL", skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    #[serde(rename = "resettablePL", skip_serializing_if = "Option::is_none")]
    pub resettable_pl: Option<AccountUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    #[serde(rename = "guaranteedExecutionFees", skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fees: Option<AccountUnits>,
}

impl PositionSide {
    /// Direction from the sign of `units`
    pub fn direction(&self) -> PositionDirection {
        match self.units.as_deref().and_then(|u| u.parse::<f64>().ok()) {
            Some(units) if units > 0.0 => PositionDirection::Long,
            Some(units) if units < 0.0 => PositionDirection::Short,
            _ => PositionDirection::Flat,
        }
    }

    /// Whether the side holds any units
    pub fn is_open(&self) -> bool {
        self.direction() != PositionDirection::Flat
    }
}

impl_definition!(
    PositionSide,
    "Position Side",
    "{units} @ {averagePrice}, {pl} PL {unrealizedPL} UPL"
);

/// Aggregated long and short exposure of one instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    /// Instrument of the position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Realized profit/loss over the position lifetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl: Option<AccountUnits>,
    /// Unrealized profit/loss of open trades
    #[serde(rename = "unrealizedPL", skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<AccountUnits>,
    /// Margin currently used by the position
    #[serde(rename = "marginUsed", skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
    /// Profit/loss since the last reset
    #[serde(rename = "resettablePL", skip_serializing_if = "Option::is_none")]
    pub resettable_pl: Option<AccountUnits>,
    /// Financing paid or collected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financing: Option<AccountUnits>,
    /// Commission paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<AccountUnits>,
    /// Fees charged for guaranteed stop losses
    #[serde(rename = "guaranteedExecutionFees", skip_serializing_if = "Option::is_none")]
    pub guaranteed_execution_fees: Option<AccountUnits>,
    /// Long side of the position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<PositionSide>,
    /// Short side of the position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<PositionSide>,
}

impl Position {
    /// Net units (long plus short), when both sides parse
    pub fn net_units(&self) -> Option<f64> {
        let side = |s: &Option<PositionSide>| -> Option<f64> {
            match s.as_ref().and_then(|s| s.units.as_deref()) {
                Some(units) => units.parse().ok(),
                None => Some(0.0),
            }
        };
        Some(side(&self.long)? + side(&self.short)?)
    }
}

impl_definition!(
    Position,
    "Position {instrument}",
    "{instrument}, {pl} PL {unrealizedPL} UPL"
);

/// Price dependent state of a position
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CalculatedPositionState {
    /// Instrument of the position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentName>,
    /// Net unrealized profit/loss
    #[serde(rename = "netUnrealizedPL", skip_serializing_if = "Option::is_none")]
    pub net_unrealized_pl: Option<AccountUnits>,
    /// Unrealized profit/loss of the long side
    #[serde(rename = "longUnrealizedPL", skip_serializing_if = "Option::is_none")]
    pub long_unrealized_pl: Option<AccountUnits>,
    /// Unrealized profit/loss of the short side
    #[serde(rename = "shortUnrealizedPL", skip_serializing_if = "Option::is_none")]
    pub short_unrealized_pl: Option<AccountUnits>,
    /// Margin currently used by the position
    #[serde(rename = "marginUsed", skip_serializing_if = "Option::is_none")]
    pub margin_used: Option<AccountUnits>,
}

impl_definition!(
    CalculatedPositionState,
    "Calculated Position State {instrument}",
    "{instrument} net UPL {netUnrealizedPL}"
);
