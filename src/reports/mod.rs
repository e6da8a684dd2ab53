//! Report retrieval and rendering
//!
//! - `workflow`: selection, fetch and export state for one report screen
//! - `render`: the fixed display structure shared by terminal and exports

pub mod render;
pub mod workflow;

pub use render::{RenderOptions, ReportLine, ReportView};
pub use workflow::{ExportTarget, FetchOutcome, FetchTicket, ReportState, ReportWorkflow};
