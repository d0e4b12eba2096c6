//! AI-Q India: a short AI-readiness assessment that samples a balanced set
//! of questions, scores the answers into one of four archetypes and renders
//! the result as text, a terminal UI or an SVG certificate.

pub mod assessment;
pub mod certificate;
pub mod config;
pub mod contact;
pub mod log_buffer;
pub mod output;
pub mod radar;
pub mod share;
pub mod telemetry;
pub mod tui;
