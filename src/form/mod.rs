//! Workout entry form: raw text inputs, kind toggle, validation.

use crate::errors::AppResult;
use crate::models::workout::WorkoutDraft;
use crate::models::workout_type::WorkoutType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Distance => "Distance (km)",
            FormField::Duration => "Duration (min)",
            FormField::Cadence => "Cadence (step/min)",
            FormField::Elevation => "Elev Gain (meters)",
        }
    }
}

const RUNNING_FIELDS: [FormField; 3] = [FormField::Distance, FormField::Duration, FormField::Cadence];
const CYCLING_FIELDS: [FormField; 3] =
    [FormField::Distance, FormField::Duration, FormField::Elevation];

#[derive(Debug, Clone)]
pub struct WorkoutForm {
    kind: WorkoutType,
    visible: bool,
    distance: String,
    duration: String,
    cadence: String,
    elevation: String,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutForm {
    /// Hidden, empty, kind = Running.
    pub fn new() -> Self {
        Self {
            kind: WorkoutType::Running,
            visible: false,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the form and clear every input.
    pub fn hide(&mut self) {
        self.visible = false;
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn kind(&self) -> WorkoutType {
        self.kind
    }

    /// Switch between the cadence row (running) and the elevation row (cycling).
    pub fn select_kind(&mut self, kind: WorkoutType) {
        self.kind = kind;
    }

    pub fn visible_fields(&self) -> &'static [FormField] {
        match self.kind {
            WorkoutType::Running => &RUNNING_FIELDS,
            WorkoutType::Cycling => &CYCLING_FIELDS,
        }
    }

    pub fn set(&mut self, field: FormField, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            FormField::Distance => self.distance = raw,
            FormField::Duration => self.duration = raw,
            FormField::Cadence => self.cadence = raw,
            FormField::Elevation => self.elevation = raw,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Distance => &self.distance,
            FormField::Duration => &self.duration,
            FormField::Cadence => &self.cadence,
            FormField::Elevation => &self.elevation,
        }
    }

    /// Read the fields of the selected kind; hidden fields are ignored.
    /// An empty input reads as 0 (so an empty elevation gain is fine),
    /// a non-numeric one is invalid.
    pub fn read(&self) -> AppResult<WorkoutDraft> {
        let distance = parse_number(&self.distance);
        let duration = parse_number(&self.duration);

        let draft = match self.kind {
            WorkoutType::Running => {
                WorkoutDraft::running(distance, duration, parse_number(&self.cadence))
            }
            WorkoutType::Cycling => {
                WorkoutDraft::cycling(distance, duration, parse_number(&self.elevation))
            }
        };

        draft.validate()?;
        Ok(draft)
    }
}

fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>().unwrap_or(f64::NAN)
}
