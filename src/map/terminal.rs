use super::{MapView, Marker};
use crate::models::coords::Coords;
use crate::models::workout_id::WorkoutId;
use crate::utils::colors::colorize_type;

/// What the map is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Unset,
    Center { center: Coords, zoom: u8 },
    Bounds { south_west: Coords, north_east: Coords },
}

/// Text-only map: remembers the view and the markers and prints them.
#[derive(Debug, Clone)]
pub struct TerminalMap {
    viewport: Viewport,
    markers: Vec<Marker>,
}

impl Default for TerminalMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalMap {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::Unset,
            markers: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: &WorkoutId) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.id == id)
    }

    pub fn render_view(&self) -> String {
        match self.viewport {
            Viewport::Unset => "View: not set".to_string(),
            Viewport::Center { center, zoom } => format!("View: {} zoom {}", center, zoom),
            Viewport::Bounds {
                south_west,
                north_east,
            } => format!("View: bounds {} → {}", south_west, north_east),
        }
    }

    pub fn render(&self) -> String {
        let mut out = self.render_view();
        out.push('\n');

        if self.markers.is_empty() {
            out.push_str("No markers.\n");
            return out;
        }

        out.push_str(&format!("Markers ({}):\n", self.markers.len()));
        for m in &self.markers {
            out.push_str(&format!(
                "  📍 {} {} [{}]\n",
                m.coords,
                colorize_type(m.kind, &m.popup),
                m.id
            ));
        }
        out
    }
}

impl MapView for TerminalMap {
    fn set_view(&mut self, center: Coords, zoom: u8) {
        self.viewport = Viewport::Center { center, zoom };
    }

    fn fit_bounds(&mut self, points: &[Coords]) {
        let Some(first) = points.first() else {
            return;
        };

        let (mut sw, mut ne) = (*first, *first);
        for p in &points[1..] {
            sw.lat = sw.lat.min(p.lat);
            sw.lng = sw.lng.min(p.lng);
            ne.lat = ne.lat.max(p.lat);
            ne.lng = ne.lng.max(p.lng);
        }

        self.viewport = Viewport::Bounds {
            south_west: sw,
            north_east: ne,
        };
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn remove_marker(&mut self, id: &WorkoutId) {
        self.markers.retain(|m| &m.id != id);
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }
}
