/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::impl_definition;
use crate::presentation::primitives::{DecimalNumber, InstrumentName, PriceValue, WireTime};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of instrument
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    /// Currency pair
    Currency,
    /// Contract for difference
    Cfd,
    /// Metal
    Metal,
}

/// A tradeable instrument as configured for an account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Instrument {
    /// Instrument name, e.g. EUR_USD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<InstrumentName>,
    /// Currency, CFD or metal
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InstrumentType>,
    /// Human readable name
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Position of the pip, e.g. -4 means 0.0001
    #[serde(rename = "pipLocation", skip_serializing_if = "Option::is_none")]
    pub pip_location: Option<i32>,
    #[serde(rename = "displayPrecision", skip_serializing_if = "Option::is_none")]
    pub display_precision: Option<i32>,
    #[serde(rename = "tradeUnitsPrecision", skip_serializing_if = "Option::is_none")]
    pub trade_units_precision: Option<i32>,
    #[serde(rename = "minimumTradeSize", skip_serializing_if = "Option::is_none")]
    pub minimum_trade_size: Option<DecimalNumber>,
    #[serde(
        rename = "maximumTrailingStopDistance",
        skip_serializing_if = "Option::is_none"
    )]
    pub maximum_trailing_stop_distance: Option<DecimalNumber>,
    #[serde(
        rename = "minimumTrailingStopDistance",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_trailing_stop_distance: Option<DecimalNumber>,
    #[serde(rename = "maximumPositionSize", skip_serializing_if = "Option::is_none")]
    pub maximum_position_size: Option<DecimalNumber>,
    #[serde(rename = "maximumOrderUnits", skip_serializing_if = "Option::is_none")]
    pub maximum_order_units: Option<DecimalNumber>,
    #[serde(rename = "marginRate", skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<DecimalNumber>,
}

impl Instrument {
    /// Size of one pip, from `pipLocation`
    pub fn pip_size(&self) -> Option<f64> {
        self.pip_location.map(|location| 10f64.powi(location))
    }
}

impl_definition!(Instrument, "Instrument {name}", "{displayName} ({type})");

/// Open, high, low and close of one candle
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CandlestickData {
    /// Open price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub o: Option<PriceValue>,
    /// Highest price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<PriceValue>,
    /// Lowest price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<PriceValue>,
    /// Close price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<PriceValue>,
}

/// One candle; which of `bid`, `ask` and `mid` is present depends on the requested price components
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Candlestick {
    /// Start time of the candle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<WireTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<CandlestickData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask: Option<CandlestickData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<CandlestickData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
    /// Whether the candle is closed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

impl_definition!(Candlestick, "Candle {time}", "{time} o {mid.o} h {mid.h} l {mid.l} c {mid.c}");

/// Candle width
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CandlestickGranularity {
    #[default]
    S5,
    S10,
    S15,
    S30,
    M1,
    M2,
    M4,
    M5,
    M10,
    M15,
    M30,
    H1,
    H2,
    H3,
    H4,
    H6,
    H8,
    H12,
    D,
    W,
    M,
}

impl CandlestickGranularity {
    /// Every granularity, shortest first
    pub const ALL: [CandlestickGranularity; 21] = [
        Self::S5,
        Self::S10,
        Self::S15,
        Self::S30,
        Self::M1,
        Self::M2,
        Self::M4,
        Self::M5,
        Self::M10,
        Self::M15,
        Self::M30,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H6,
        Self::H8,
        Self::H12,
        Self::D,
        Self::W,
        Self::M,
    ];

    /// Query parameter value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S5 => "S5",
            Self::S10 => "S10",
            Self::S15 => "S15",
            Self::S30 => "S30",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::M4 => "M4",
            Self::M5 => "M5",
            Self::M10 => "M10",
            Self::M15 => "M15",
            Self::M30 => "M30",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
            Self::H6 => "H6",
            Self::H8 => "H8",
            Self::H12 => "H12",
            Self::D => "D",
            Self::W => "W",
            Self::M => "M",
        }
    }

    /// Candle width in seconds; `None` for monthly candles
    #[must_use]
    pub const fn seconds(self) -> Option<u64> {
        Some(match self {
            Self::S5 => 5,
            Self::S10 => 10,
            Self::S15 => 15,
            Self::S30 => 30,
            Self::M1 => 60,
            Self::M2 => 120,
            Self::M4 => 240,
            Self::M5 => 300,
            Self::M10 => 600,
            Self::M15 => 900,
            Self::M30 => 1800,
            Self::H1 => 3600,
            Self::H2 => 7200,
            Self::H3 => 10800,
            Self::H4 => 14400,
            Self::H6 => 21600,
            Self::H8 => 28800,
            Self::H12 => 43200,
            Self::D => 86400,
            Self::W => 604800,
            Self::M => return None,
        })
    }
}

impl FromStr for CandlestickGranularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown granularity {s}")))
    }
}

/// Price components of a candle request: any of `M`, `B`, `A`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PriceComponents(String);

impl PriceComponents {
    /// Mid prices only
    #[must_use]
    pub fn mid() -> Self {
        Self("M".to_string())
    }

    /// Bid, ask and mid prices
    #[must_use]
    pub fn all() -> Self {
        Self("BAM".to_string())
    }

    /// Query parameter value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PriceComponents {
    fn default() -> Self {
        Self::mid()
    }
}

impl FromStr for PriceComponents {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_uppercase();
        if s.is_empty() || !s.chars().all(|c| matches!(c, 'M' | 'B' | 'A')) {
            return Err(AppError::InvalidInput(format!("invalid price components {s:?}")));
        }
        Ok(Self(s))
    }
}
