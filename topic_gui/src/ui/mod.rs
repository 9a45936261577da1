//! UI module for the Topic App GUI
//!
//! # Panel Structure
//! - `toolbar` - App title and the Done / New / Create PDF buttons
//! - `entry_panel` - The four text fields, top to bottom in entry order
//! - `preview_panel` - Read-only view of the rows "Create PDF" will write
//! - `status_bar` - Bottom status messages

pub mod entry_panel;
pub mod preview_panel;
pub mod status_bar;
pub mod toolbar;
