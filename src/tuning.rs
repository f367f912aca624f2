//! Data-driven game balance
//!
//! Phase tables define the difficulty timeline: how long each stage lasts and
//! how fast/dense traffic gets. The standard table is compiled in; custom
//! tables can be loaded from JSON. Validation happens here, at load time;
//! the simulation itself never re-checks phase data mid-tick.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One difficulty stage of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: u32,
    pub name: String,
    /// Phase length in seconds. The last phase is effectively unbounded.
    pub duration: f32,
    /// Multiplier on the obstacle base descent speed
    pub base_speed: f32,
    /// Expected obstacle spawns per second
    pub spawn_rate: f32,
    /// Minimum same-lane spacing between a spawn and existing traffic, pixels
    #[serde(default = "default_min_gap")]
    pub min_gap: f32,
}

fn default_min_gap() -> f32 {
    100.0
}

/// Why a phase table was rejected at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    EmptyTable,
    NonPositiveDuration { phase: u32 },
    NonPositiveSpeed { phase: u32 },
    NegativeSpawnRate { phase: u32 },
    NegativeMinGap { phase: u32 },
    Parse(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::EmptyTable => write!(f, "phase table is empty"),
            TuningError::NonPositiveDuration { phase } => {
                write!(f, "phase {phase} has a non-positive duration")
            }
            TuningError::NonPositiveSpeed { phase } => {
                write!(f, "phase {phase} has a non-positive base speed")
            }
            TuningError::NegativeSpawnRate { phase } => {
                write!(f, "phase {phase} has a negative spawn rate")
            }
            TuningError::NegativeMinGap { phase } => {
                write!(f, "phase {phase} has a negative lane gap")
            }
            TuningError::Parse(e) => write!(f, "phase table did not parse: {e}"),
        }
    }
}

impl std::error::Error for TuningError {}

/// An ordered, immutable, validated sequence of phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Phase>", into = "Vec<Phase>")]
pub struct PhaseTable {
    phases: Vec<Phase>,
}

impl PhaseTable {
    /// The shipped difficulty timeline.
    pub fn standard() -> Self {
        let phase = |id, name: &str, duration, base_speed, spawn_rate| Phase {
            id,
            name: name.to_string(),
            duration,
            base_speed,
            spawn_rate,
            min_gap: default_min_gap(),
        };
        Self {
            phases: vec![
                phase(1, "Country Roads", 20.0, 1.0, 0.4),
                phase(2, "Mountain Pass", 40.0, 1.3, 0.6),
                phase(3, "Desert Highway", 80.0, 1.6, 0.8),
                // terminal phase: runs until game over
                phase(4, "Night City Sprint", 99_999.0, 2.0, 1.0),
            ],
        }
    }

    /// Validate and adopt a custom phase list.
    pub fn new(phases: Vec<Phase>) -> Result<Self, TuningError> {
        if phases.is_empty() {
            return Err(TuningError::EmptyTable);
        }
        for p in &phases {
            if !(p.duration > 0.0) {
                return Err(TuningError::NonPositiveDuration { phase: p.id });
            }
            if !(p.base_speed > 0.0) {
                return Err(TuningError::NonPositiveSpeed { phase: p.id });
            }
            if p.spawn_rate < 0.0 {
                return Err(TuningError::NegativeSpawnRate { phase: p.id });
            }
            if p.min_gap < 0.0 {
                return Err(TuningError::NegativeMinGap { phase: p.id });
            }
        }
        Ok(Self { phases })
    }

    /// Load a table from a JSON array of phases.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let phases: Vec<Phase> =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        Self::new(phases)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Phase>> for PhaseTable {
    type Error = TuningError;

    fn try_from(phases: Vec<Phase>) -> Result<Self, Self::Error> {
        Self::new(phases)
    }
}

impl From<PhaseTable> for Vec<Phase> {
    fn from(table: PhaseTable) -> Self {
        table.phases
    }
}
