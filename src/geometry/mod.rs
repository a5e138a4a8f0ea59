//! Kurven-Geometrie: Bézier-Auswertung, Bogenlängen-Parametrisierung, Spur-Sampling.
//!
//! Aufgeteilt in:
//! - `bezier`     — Bernstein-Basis, Position/Tangente/Normale, Tessellierung
//! - `arc_length` — Bogenlängen-Tabelle, Distanz → Parameter
//! - `lane`       — links/rechts ausgerichtete Spurpunkte

pub mod arc_length;
pub mod bezier;
pub mod lane;

pub use arc_length::ArcLengthTable;
pub use lane::{LanePair, LanePoints, LaneSampler};
